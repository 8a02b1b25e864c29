pub mod manager;
pub mod models;
pub mod query_builder;

pub use manager::{ConnectionProvider, DatabaseConnection, DatabaseError, DatabaseManager, Entity};

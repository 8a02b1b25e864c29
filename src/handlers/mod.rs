pub mod health;
pub mod list;

pub use health::healthcheck;
pub use list::list;

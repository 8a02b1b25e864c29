use async_trait::async_trait;
use serde::Serialize;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::filter::{SqlParam, SqlResult};

/// Errors from the connection provider and query execution
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The engine rejected a bound value (SQLSTATE class 22, data exception)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let is_data_exception = db_err.code().map_or(false, |code| code.starts_with("22"));
                if is_data_exception {
                    DatabaseError::InvalidValue(db_err.message().to_string())
                } else {
                    DatabaseError::QueryError(db_err.to_string())
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_) => DatabaseError::ConnectionError(err.to_string()),
            other => DatabaseError::QueryError(other.to_string()),
        }
    }
}

/// A row type the endpoints can return, decoded from Postgres by `FromRow`.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + FixtureRow + Send + Unpin + 'static {}

impl<T> Entity for T where T: for<'r> FromRow<'r, PgRow> + Serialize + FixtureRow + Send + Unpin + 'static {}

/// Unit tests hand fake connections JSON rows, so there an entity must also
/// deserialize. Release builds carry no such bound.
#[cfg(test)]
pub trait FixtureRow: serde::de::DeserializeOwned {}

#[cfg(test)]
impl<T: serde::de::DeserializeOwned> FixtureRow for T {}

#[cfg(not(test))]
pub trait FixtureRow {}

#[cfg(not(test))]
impl<T> FixtureRow for T {}

/// A single checked-out connection. Dropping it releases the connection.
#[async_trait]
pub trait DatabaseConnection: Send {
    async fn fetch_all<T: Entity>(&mut self, statement: &SqlResult) -> Result<Vec<T>, DatabaseError>;
}

/// Hands out one connection per request
#[async_trait]
pub trait ConnectionProvider: Send + Sync + 'static {
    type Connection: DatabaseConnection;

    async fn acquire(&self) -> Result<Self::Connection, DatabaseError>;
}

/// Postgres-backed provider over a lazily connecting pool
#[derive(Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Does not touch the network; connections open on first acquire
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;
        Ok(Self::with_options(options, config))
    }

    pub fn with_options(options: PgConnectOptions, config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy_with(options);

        info!(
            "Configured database pool for {} (max {} connections)",
            config.redacted_url(),
            config.max_connections
        );
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}

pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ConnectionProvider for DatabaseManager {
    type Connection = PgSession;

    async fn acquire(&self) -> Result<PgSession, DatabaseError> {
        let conn = self.pool.acquire().await?;
        Ok(PgSession { conn })
    }
}

#[async_trait]
impl DatabaseConnection for PgSession {
    async fn fetch_all<T: Entity>(&mut self, statement: &SqlResult) -> Result<Vec<T>, DatabaseError> {
        let mut q = sqlx::query_as::<_, T>(&statement.query);
        for p in statement.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(&mut *self.conn).await?;
        Ok(rows)
    }
}

fn bind_param_query_as<'q, O>(
    q: QueryAs<'q, Postgres, O, PgArguments>,
    v: &SqlParam,
) -> QueryAs<'q, Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, PgRow>,
{
    match v {
        SqlParam::Text(s) => q.bind(s.clone()),
        SqlParam::BigInt(i) => q.bind(*i),
    }
}

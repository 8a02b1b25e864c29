use std::time::Instant;

use tracing::{debug, error, warn};

use crate::config::DatabaseConfig;
use crate::database::manager::{ConnectionProvider, DatabaseConnection, DatabaseError, Entity};
use crate::filter::SqlResult;

/// Run one statement on a freshly acquired connection.
///
/// The connection is released before returning, on success and on failure.
pub async fn fetch_all<P, T>(
    provider: &P,
    statement: &SqlResult,
    config: &DatabaseConfig,
) -> Result<Vec<T>, DatabaseError>
where
    P: ConnectionProvider,
    T: Entity,
{
    let mut conn = provider.acquire().await.map_err(|e| {
        error!("Failed to acquire database connection: {}", e);
        e
    })?;

    if config.enable_query_logging {
        debug!(sql = %statement.query, params = ?statement.params, "Executing query");
    }

    let started = Instant::now();
    let result: Result<Vec<T>, DatabaseError> = conn.fetch_all(statement).await;
    drop(conn);
    let elapsed = started.elapsed();

    if config.enable_slow_query_warning && elapsed >= config.slow_query_threshold() {
        warn!(
            elapsed_ms = elapsed.as_millis() as u64,
            sql = %statement.query,
            "Slow query"
        );
    }

    match &result {
        Ok(rows) => debug!(rows = rows.len(), elapsed_ms = elapsed.as_millis() as u64, "Query complete"),
        Err(DatabaseError::InvalidValue(msg)) => debug!("Query rejected a filter value: {}", msg),
        Err(e) => error!("Query failed: {}", e),
    }

    result
}

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::api::format::{to_row_maps, RowMap};
use crate::app::AppState;
use crate::database::{query_builder, ConnectionProvider};
use crate::error::ApiError;
use crate::queries::ListQuery;

/// GET /tasks, /submissions, /submissions/enriched, /quality_reviews
///
/// Parameters are parsed and pagination validated before a connection is
/// acquired, so malformed requests never reach the database.
pub async fn list<P, Q>(
    State(state): State<AppState<P>>,
    query: Result<Query<Q>, QueryRejection>,
) -> Result<Json<Vec<RowMap>>, ApiError>
where
    P: ConnectionProvider,
    Q: ListQuery,
{
    let Query(query) = query?;
    let statement = query.to_sql()?;

    let rows: Vec<Q::Row> =
        query_builder::fetch_all(state.provider.as_ref(), &statement, &state.config.database).await?;
    tracing::debug!("{} returned {} rows", Q::NAME, rows.len());

    Ok(Json(to_row_maps(&rows)?))
}

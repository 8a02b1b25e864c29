use chrono::{DateTime, Utc};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::api::format::iso8601;

/// A submission joined to its task, with statistics over its quality reviews.
///
/// The review aggregates are rounded to 4 decimal places by the query and
/// are 0 when the submission has no reviews.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[cfg_attr(test, derive(Deserialize))]
pub struct EnrichedSubmission {
    pub submission_id: String,
    pub task_id: String,
    pub submitted_by: Option<String>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub time_spent_seconds: Option<i64>,
    pub submission_status: Option<String>,
    pub task_title: Option<String>,
    pub task_type: Option<String>,
    pub task_status: Option<String>,
    pub project_id: Option<String>,
    pub review_count: i64,
    pub avg_review_score: f64,
    /// Continuous (interpolated) 50th percentile
    pub median_review_score: f64,
    pub min_review_score: f64,
    pub max_review_score: f64,
}

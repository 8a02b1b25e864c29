use chrono::{DateTime, Utc};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::api::format::iso8601;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Submission {
    pub submission_id: String,
    pub task_id: String,
    pub submitted_by: Option<String>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub time_spent_seconds: Option<i64>,
    pub status: Option<String>,
}

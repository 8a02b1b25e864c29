use chrono::{DateTime, Utc};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::api::format::iso8601;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Task {
    pub task_id: String,
    pub project_id: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub task_type: Option<String>,
}

use chrono::{DateTime, Utc};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::api::format::iso8601;

/// Reviews carry no identifier of their own; `score` is projected as float8
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[cfg_attr(test, derive(Deserialize))]
pub struct QualityReview {
    pub submission_id: String,
    pub reviewer_id: Option<String>,
    #[serde(serialize_with = "iso8601::serialize_opt")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub score: Option<f64>,
}

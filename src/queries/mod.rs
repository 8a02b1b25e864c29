//! Per-endpoint query definitions: which filters each list endpoint accepts
//! and how they compose into a single parameterized SELECT.

pub mod tasks;
pub mod submissions;
pub mod enriched_submissions;
pub mod quality_reviews;

pub use tasks::TaskQuery;
pub use submissions::SubmissionQuery;
pub use enriched_submissions::EnrichedSubmissionQuery;
pub use quality_reviews::QualityReviewQuery;

use serde::de::DeserializeOwned;

use crate::database::manager::Entity;
use crate::filter::{Filter, FilterError, Pagination, SqlResult};

/// Query-string parameters of a list endpoint
pub trait ListQuery: DeserializeOwned + Send + 'static {
    type Row: Entity;

    /// Name used in logs
    const NAME: &'static str;

    fn limit(&self) -> Option<i64>;

    fn offset(&self) -> Option<i64>;

    fn to_filter(&self, pagination: Pagination) -> Filter;

    /// Validates pagination, then renders the statement
    fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let pagination = Pagination::new(self.limit(), self.offset())?;
        Ok(self.to_filter(pagination).to_sql())
    }
}

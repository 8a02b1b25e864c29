use serde::Deserialize;

use super::ListQuery;
use crate::database::models::QualityReview;
use crate::filter::{Filter, FilterJoin, FilterOrder, FilterWhere, Pagination};

const COLUMNS: &[&str] = &[
    "qr.submission_id",
    "qr.reviewer_id",
    "qr.reviewed_at::timestamptz AS reviewed_at",
    "qr.score::float8 AS score",
];

/// GET /quality_reviews
#[derive(Debug, Default, Clone, Deserialize)]
pub struct QualityReviewQuery {
    pub submission_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub project_id: Option<String>,
    pub reviewed_after: Option<String>,
    pub reviewed_before: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery for QualityReviewQuery {
    type Row = QualityReview;

    const NAME: &'static str = "quality_reviews";

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn to_filter(&self, pagination: Pagination) -> Filter {
        let mut filter = Filter::new("quality_reviews qr").select(COLUMNS);

        // review -> submission -> task, each hop on the parent's primary key
        if self.project_id.is_some() {
            filter = filter
                .join(FilterJoin::inner("submissions s", "qr.submission_id = s.submission_id"))
                .join(FilterJoin::inner("tasks t", "s.task_id = t.task_id"));
        }

        filter
            .where_opt(FilterWhere::eq("qr.submission_id"), self.submission_id.as_deref())
            .where_opt(FilterWhere::eq("qr.reviewer_id"), self.reviewer_id.as_deref())
            .where_opt(FilterWhere::eq("t.project_id"), self.project_id.as_deref())
            .where_opt(FilterWhere::gte_timestamp("qr.reviewed_at"), self.reviewed_after.as_deref())
            .where_opt(FilterWhere::lte_timestamp("qr.reviewed_at"), self.reviewed_before.as_deref())
            .order(FilterOrder::desc("qr.reviewed_at"))
            .order(FilterOrder::desc("qr.submission_id"))
            .order(FilterOrder::desc("qr.reviewer_id"))
            .paginate(pagination)
    }
}

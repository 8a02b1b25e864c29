use serde::Deserialize;

use super::ListQuery;
use crate::database::models::EnrichedSubmission;
use crate::filter::{Filter, FilterJoin, FilterOrder, FilterWhere, Pagination};

/// Every aggregate row exists (no GROUP BY), so `review_count` is never NULL;
/// the others are NULL when there are no reviews and get COALESCEd to 0.
const REVIEW_STATS: &str = "(\
    SELECT \
        COUNT(*)::int8 AS review_count, \
        ROUND(AVG(qr.score)::numeric, 4) AS avg_score, \
        ROUND((PERCENTILE_CONT(0.5) WITHIN GROUP (ORDER BY qr.score::float8))::numeric, 4) AS median_score, \
        ROUND(MIN(qr.score)::numeric, 4) AS min_score, \
        ROUND(MAX(qr.score)::numeric, 4) AS max_score \
    FROM quality_reviews qr \
    WHERE qr.submission_id = s.submission_id\
) r";

const COLUMNS: &[&str] = &[
    "s.submission_id",
    "s.task_id",
    "s.submitted_by",
    "s.submitted_at::timestamptz AS submitted_at",
    "s.time_spent_seconds::int8 AS time_spent_seconds",
    "s.status AS submission_status",
    "t.title AS task_title",
    "t.type AS task_type",
    "t.status AS task_status",
    "t.project_id",
    "COALESCE(r.review_count, 0)::int8 AS review_count",
    "COALESCE(r.avg_score, 0)::float8 AS avg_review_score",
    "COALESCE(r.median_score, 0)::float8 AS median_review_score",
    "COALESCE(r.min_score, 0)::float8 AS min_review_score",
    "COALESCE(r.max_score, 0)::float8 AS max_review_score",
];

/// GET /submissions/enriched
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EnrichedSubmissionQuery {
    pub submitted_by: Option<String>,
    pub project_id: Option<String>,
    pub submitted_after: Option<String>,
    pub submitted_before: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery for EnrichedSubmissionQuery {
    type Row = EnrichedSubmission;

    const NAME: &'static str = "submissions_enriched";

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn to_filter(&self, pagination: Pagination) -> Filter {
        Filter::new("submissions s")
            .select(COLUMNS)
            .join(FilterJoin::inner("tasks t", "s.task_id = t.task_id"))
            .join(FilterJoin::left_lateral(REVIEW_STATS))
            .where_opt(FilterWhere::eq("s.submitted_by"), self.submitted_by.as_deref())
            .where_opt(FilterWhere::eq("t.project_id"), self.project_id.as_deref())
            .where_opt(FilterWhere::gte_timestamp("s.submitted_at"), self.submitted_after.as_deref())
            .where_opt(FilterWhere::lte_timestamp("s.submitted_at"), self.submitted_before.as_deref())
            .order(FilterOrder::desc("s.submitted_at"))
            .order(FilterOrder::desc("s.submission_id"))
            .paginate(pagination)
    }
}

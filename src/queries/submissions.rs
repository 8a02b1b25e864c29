use serde::Deserialize;

use super::ListQuery;
use crate::database::models::Submission;
use crate::filter::{Filter, FilterJoin, FilterOrder, FilterWhere, Pagination};

const COLUMNS: &[&str] = &[
    "s.submission_id",
    "s.task_id",
    "s.submitted_by",
    "s.submitted_at::timestamptz AS submitted_at",
    "s.time_spent_seconds::int8 AS time_spent_seconds",
    "s.status",
];

/// GET /submissions
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SubmissionQuery {
    pub task_id: Option<String>,
    pub submitted_by: Option<String>,
    pub project_id: Option<String>,
    pub submitted_after: Option<String>,
    pub submitted_before: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery for SubmissionQuery {
    type Row = Submission;

    const NAME: &'static str = "submissions";

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn to_filter(&self, pagination: Pagination) -> Filter {
        let mut filter = Filter::new("submissions s").select(COLUMNS);

        // Project lives on the task; only pay for the join when filtering by it
        if self.project_id.is_some() {
            filter = filter.join(FilterJoin::inner("tasks t", "s.task_id = t.task_id"));
        }

        filter
            .where_opt(FilterWhere::eq("s.task_id"), self.task_id.as_deref())
            .where_opt(FilterWhere::eq("s.submitted_by"), self.submitted_by.as_deref())
            .where_opt(FilterWhere::eq("t.project_id"), self.project_id.as_deref())
            .where_opt(FilterWhere::gte_timestamp("s.submitted_at"), self.submitted_after.as_deref())
            .where_opt(FilterWhere::lte_timestamp("s.submitted_at"), self.submitted_before.as_deref())
            .order(FilterOrder::desc("s.submitted_at"))
            .order(FilterOrder::desc("s.submission_id"))
            .paginate(pagination)
    }
}

use serde::Deserialize;

use super::ListQuery;
use crate::database::models::Task;
use crate::filter::{Filter, FilterOrder, FilterWhere, Pagination};

const COLUMNS: &[&str] = &[
    "t.task_id",
    "t.project_id",
    "t.status",
    "t.assigned_to",
    "t.created_at::timestamptz AS created_at",
    "t.title",
    "t.type",
];

/// GET /tasks
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub created_after: Option<String>,
    pub created_before: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQuery for TaskQuery {
    type Row = Task;

    const NAME: &'static str = "tasks";

    fn limit(&self) -> Option<i64> {
        self.limit
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn to_filter(&self, pagination: Pagination) -> Filter {
        Filter::new("tasks t")
            .select(COLUMNS)
            .where_opt(FilterWhere::eq("t.project_id"), self.project_id.as_deref())
            .where_opt(FilterWhere::eq("t.status"), self.status.as_deref())
            .where_opt(FilterWhere::eq("t.assigned_to"), self.assigned_to.as_deref())
            .where_opt(FilterWhere::gte_timestamp("t.created_at"), self.created_after.as_deref())
            .where_opt(FilterWhere::lte_timestamp("t.created_at"), self.created_before.as_deref())
            .order(FilterOrder::desc("t.created_at"))
            .order(FilterOrder::desc("t.task_id"))
            .paginate(pagination)
    }
}

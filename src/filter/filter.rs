use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::pagination::Pagination;
use super::types::{FilterJoin, FilterOrderInfo, FilterWhereInfo, SqlParam, SqlResult};

/// Builder for a single parameterized SELECT.
///
/// Every identifier that reaches the SQL text is a `&'static str` supplied by
/// the endpoint query definitions; request input only ever travels through
/// the bound parameter list.
#[derive(Debug, Clone)]
pub struct Filter {
    source: &'static str,
    select_columns: Vec<&'static str>,
    joins: Vec<FilterJoin>,
    where_data: FilterWhere,
    order_data: Vec<FilterOrderInfo>,
    pagination: Option<Pagination>,
}

impl Filter {
    /// `source` is the FROM target including its alias, e.g. `tasks t`
    pub fn new(source: &'static str) -> Self {
        Self {
            source,
            select_columns: vec![],
            joins: vec![],
            where_data: FilterWhere::new(),
            order_data: vec![],
            pagination: None,
        }
    }

    pub fn select(mut self, columns: &[&'static str]) -> Self {
        self.select_columns = columns.to_vec();
        self
    }

    pub fn join(mut self, join: FilterJoin) -> Self {
        self.joins.push(join);
        self
    }

    /// Adds the predicate only when a value is present
    pub fn where_opt(mut self, condition: FilterWhereInfo, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.where_data.push(condition, SqlParam::Text(v.to_string()));
        }
        self
    }

    pub fn order(mut self, order: FilterOrderInfo) -> Self {
        self.order_data.push(order);
        self
    }

    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn joins(&self) -> &[FilterJoin] {
        &self.joins
    }

    pub fn to_sql(&self) -> SqlResult {
        let (where_clause, mut params) = self.where_data.generate(0);
        let joins = self.joins.iter().map(FilterJoin::to_sql).collect::<Vec<_>>().join(" ");
        let order_clause = FilterOrder::generate(&self.order_data);
        let limit_clause = self.build_limit_clause(&mut params);

        let query = [
            format!("SELECT {}", self.build_select_clause()),
            format!("FROM {}", self.source),
            joins,
            format!("WHERE {}", where_clause),
            order_clause,
            limit_clause,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        SqlResult { query, params }
    }

    fn build_select_clause(&self) -> String {
        if self.select_columns.is_empty() {
            "*".to_string()
        } else {
            self.select_columns.join(", ")
        }
    }

    fn build_limit_clause(&self, params: &mut Vec<SqlParam>) -> String {
        match self.pagination {
            Some(page) => {
                params.push(SqlParam::BigInt(page.limit()));
                params.push(SqlParam::BigInt(page.offset()));
                format!("LIMIT ${} OFFSET ${}", params.len() - 1, params.len())
            }
            None => String::new(),
        }
    }
}

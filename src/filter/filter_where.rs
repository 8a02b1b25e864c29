use super::types::{FilterOp, FilterWhereInfo, ParamCast, SqlParam};

/// Ordered predicate clauses with a parallel list of their bound values.
/// Placeholders are only numbered when the clause is rendered.
#[derive(Debug, Default, Clone)]
pub struct FilterWhere {
    conditions: Vec<FilterWhereInfo>,
    param_values: Vec<SqlParam>,
}

impl FilterWhere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: FilterWhereInfo, value: SqlParam) {
        self.conditions.push(condition);
        self.param_values.push(value);
    }

    /// Render as `a AND b AND ...`, numbering placeholders after
    /// `starting_param_index`. An empty filter renders `1=1`.
    pub fn generate(&self, starting_param_index: usize) -> (String, Vec<SqlParam>) {
        if self.conditions.is_empty() {
            return ("1=1".to_string(), vec![]);
        }

        let mut param_index = starting_param_index;
        let sql_conditions: Vec<String> = self
            .conditions
            .iter()
            .map(|condition| {
                param_index += 1;
                Self::build_sql_condition(condition, param_index)
            })
            .collect();

        (sql_conditions.join(" AND "), self.param_values.clone())
    }

    fn build_sql_condition(condition: &FilterWhereInfo, index: usize) -> String {
        let placeholder = match condition.cast {
            Some(cast) => format!("${}::{}", index, cast.to_sql()),
            None => format!("${}", index),
        };
        format!("{} {} {}", condition.column, condition.operator.to_sql(), placeholder)
    }

    pub fn eq(column: &'static str) -> FilterWhereInfo {
        FilterWhereInfo { column, operator: FilterOp::Eq, cast: None }
    }

    pub fn gte_timestamp(column: &'static str) -> FilterWhereInfo {
        FilterWhereInfo { column, operator: FilterOp::Gte, cast: Some(ParamCast::Timestamptz) }
    }

    pub fn lte_timestamp(column: &'static str) -> FilterWhereInfo {
        FilterWhereInfo { column, operator: FilterOp::Lte, cast: Some(ParamCast::Timestamptz) }
    }
}

/// Comparison applied by a single WHERE predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lte,
}

impl FilterOp {
    pub fn to_sql(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
        }
    }
}

/// Server-side cast applied to a bound parameter before comparison.
/// Range filters arrive as text and are parsed by the engine, so a bad
/// value fails there as a data exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamCast {
    Timestamptz,
}

impl ParamCast {
    pub fn to_sql(&self) -> &'static str {
        match self {
            ParamCast::Timestamptz => "timestamptz",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterWhereInfo {
    /// Qualified column, e.g. `s.submitted_at`. Always a compile-time constant.
    pub column: &'static str,
    pub operator: FilterOp,
    pub cast: Option<ParamCast>,
}

/// Every listing is newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOrderInfo {
    pub column: &'static str,
    pub sort: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftLateral,
}

/// A join clause. `target` is either `table alias` or, for lateral joins,
/// a parenthesized subquery followed by its alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterJoin {
    pub kind: JoinKind,
    pub target: &'static str,
    pub on: &'static str,
}

impl FilterJoin {
    pub fn inner(target: &'static str, on: &'static str) -> Self {
        Self { kind: JoinKind::Inner, target, on }
    }

    pub fn left_lateral(target: &'static str) -> Self {
        Self { kind: JoinKind::LeftLateral, target, on: "true" }
    }

    pub fn to_sql(&self) -> String {
        match self.kind {
            JoinKind::Inner => format!("JOIN {} ON {}", self.target, self.on),
            JoinKind::LeftLateral => format!("LEFT JOIN LATERAL {} ON {}", self.target, self.on),
        }
    }
}

/// A value bound to a `$n` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    BigInt(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// One result row as an ordered field-name → value mapping.
/// Field order follows the struct (and therefore the SQL projection).
pub type RowMap = Map<String, Value>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Failed to serialize row: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Row did not serialize to an object")]
    NotAnObject,
}

pub fn to_row_map<T: Serialize>(row: &T) -> Result<RowMap, FormatError> {
    match serde_json::to_value(row)? {
        Value::Object(map) => Ok(map),
        _ => Err(FormatError::NotAnObject),
    }
}

pub fn to_row_maps<T: Serialize>(rows: &[T]) -> Result<Vec<RowMap>, FormatError> {
    rows.iter().map(to_row_map).collect()
}

/// ISO-8601 rendering for temporal columns: `2024-01-31T09:30:00+00:00`,
/// with six fractional digits only when the value has sub-second precision.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Timelike, Utc};
    use serde::Serializer;

    pub fn format(value: &DateTime<Utc>) -> String {
        let precision = if value.nanosecond() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        value.to_rfc3339_opts(precision, false)
    }

    pub fn serialize_opt<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&format(v)),
            None => serializer.serialize_none(),
        }
    }
}

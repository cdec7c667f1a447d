//! Column type inference and the date-name timestamp coercion.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::dataset::{Column, DataType, Value};
use crate::error::{CsvscopeError, Result};
use crate::input::DataTable;

/// Datetime layouts tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Builds typed columns from raw string cells.
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Case-insensitive name fragment that marks a column as a timestamp.
    date_marker: String,
}

impl TypeInferrer {
    pub fn new() -> Self {
        Self {
            date_marker: "date".to_string(),
        }
    }

    /// Infer the type of a column and convert its cells.
    pub fn build_column<'a>(
        &self,
        name: &str,
        raw: impl Iterator<Item = &'a str>,
    ) -> Result<Column> {
        let cells: Vec<Option<&str>> = raw
            .map(|v| {
                if DataTable::is_null_value(v) {
                    None
                } else {
                    Some(v.trim())
                }
            })
            .collect();

        if self.is_date_column(name) {
            let values = coerce_timestamps(name, &cells)?;
            debug!(column = name, "coerced column to timestamp");
            return Ok(Column::new(name, DataType::Timestamp, values));
        }

        let dtype = infer_type(&cells);
        let values = cells
            .iter()
            .map(|cell| match cell {
                None => Value::Null,
                Some(raw) => convert(raw, dtype),
            })
            .collect();

        Ok(Column::new(name, dtype, values))
    }

    /// Whether the column name asks for timestamp coercion.
    pub fn is_date_column(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.date_marker)
    }
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

/// Narrowest type every non-null cell fits.
fn infer_type(cells: &[Option<&str>]) -> DataType {
    let mut present = cells.iter().flatten().peekable();
    if present.peek().is_none() {
        return DataType::Text;
    }

    let present: Vec<&str> = present.copied().collect();
    if present.iter().all(|v| v.parse::<i64>().is_ok()) {
        DataType::Integer
    } else if present.iter().all(|v| v.parse::<f64>().is_ok()) {
        DataType::Float
    } else if present.iter().all(|v| parse_bool(v).is_some()) {
        DataType::Boolean
    } else {
        DataType::Text
    }
}

fn convert(raw: &str, dtype: DataType) -> Value {
    match dtype {
        DataType::Integer => raw.parse().map(Value::Integer).unwrap_or(Value::Null),
        DataType::Float => raw.parse().map(Value::Float).unwrap_or(Value::Null),
        DataType::Boolean => parse_bool(raw).map(Value::Boolean).unwrap_or(Value::Null),
        DataType::Timestamp => parse_timestamp(raw).map(Value::Timestamp).unwrap_or(Value::Null),
        DataType::Text => Value::Text(raw.to_string()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Timestamps for a date-named column. A column whose cells are all numbers
/// holds epoch nanoseconds; otherwise every cell must be a timestamp layout.
fn coerce_timestamps(name: &str, cells: &[Option<&str>]) -> Result<Vec<Value>> {
    let epochs: Option<Vec<Option<i64>>> = cells
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(raw) => epoch_nanos(raw).map(Some),
        })
        .collect();
    if let Some(epochs) = epochs {
        return Ok(epochs
            .into_iter()
            .map(|nanos| match nanos {
                None => Value::Null,
                Some(n) => Value::Timestamp(DateTime::from_timestamp_nanos(n).naive_utc()),
            })
            .collect());
    }

    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            None => Ok(Value::Null),
            Some(raw) => parse_timestamp(raw)
                .map(Value::Timestamp)
                .ok_or_else(|| CsvscopeError::DateCoercion {
                    column: name.to_string(),
                    row,
                    value: raw.to_string(),
                }),
        })
        .collect()
}

fn epoch_nanos(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
}

/// Parse a timestamp in one of the accepted layouts.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

//! Declared column types and cell values.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Display format for timestamp cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Free text / string values.
    Text,
    /// Whole numbers.
    Integer,
    /// Floating-point numbers.
    Float,
    /// true/false values.
    Boolean,
    /// Date and time values.
    Timestamp,
}

impl DataType {
    /// Returns true if this type is text.
    pub fn is_text(&self) -> bool {
        matches!(self, DataType::Text)
    }

    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Text => "text",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

/// Hashable identity of a non-null value, used for distinct counts and grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKey {
    Text(String),
    Integer(i64),
    Float(u64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Distinct-value identity. `None` for nulls.
    pub fn key(&self) -> Option<ValueKey> {
        match self {
            Value::Null => None,
            Value::Text(s) => Some(ValueKey::Text(s.clone())),
            Value::Integer(v) => Some(ValueKey::Integer(*v)),
            // -0.0 and 0.0 are the same value
            Value::Float(v) => Some(ValueKey::Float(if *v == 0.0 { 0 } else { v.to_bits() })),
            Value::Boolean(b) => Some(ValueKey::Boolean(*b)),
            Value::Timestamp(t) => Some(ValueKey::Timestamp(*t)),
        }
    }

    /// Human readable rendering. `None` for nulls.
    pub fn display(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Text(s) => Some(s.clone()),
            Value::Integer(v) => Some(v.to_string()),
            Value::Float(v) => Some(format_float(*v)),
            Value::Boolean(b) => Some(if *b { "True" } else { "False" }.to_string()),
            Value::Timestamp(t) => Some(t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Integer(v) => serializer.serialize_i64(*v),
            Value::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            Value::Float(_) => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Timestamp(t) => serializer.collect_str(&t.format(TIMESTAMP_FORMAT)),
        }
    }
}

/// Format a float so whole numbers keep a trailing `.0`.
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_keys_merge_signed_zero() {
        assert_eq!(Value::Float(0.0).key(), Value::Float(-0.0).key());
        assert_ne!(Value::Float(1.0).key(), Value::Float(2.0).key());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Float(3.0).display().as_deref(), Some("3.0"));
        assert_eq!(Value::Float(2.5).display().as_deref(), Some("2.5"));
        assert_eq!(Value::Boolean(true).display().as_deref(), Some("True"));
        assert_eq!(Value::Null.display(), None);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&vec![
            Value::Null,
            Value::Integer(3),
            Value::Text("a".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,3,"a"]"#);
    }
}

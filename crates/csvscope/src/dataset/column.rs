//! A typed column.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use super::types::{DataType, Value, ValueKey};

/// One named, typed column of a [`Dataset`](super::Dataset).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name, unique within the dataset.
    pub name: String,
    /// Declared type, after the timestamp coercion pass.
    pub dtype: DataType,
    /// Cells in row order.
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, dtype: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Number of distinct non-null values.
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .filter_map(Value::key)
            .collect::<HashSet<ValueKey>>()
            .len()
    }

    /// Non-null numeric values in row order. Empty for non-numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        if !self.dtype.is_numeric() {
            return Vec::new();
        }
        self.values.iter().filter_map(Value::as_f64).collect()
    }

    /// Count of each non-null value, most frequent first. Ties keep first-seen order.
    pub fn value_counts(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<ValueKey, (String, usize)> = IndexMap::new();
        for value in &self.values {
            if let (Some(key), Some(label)) = (value.key(), value.display()) {
                counts.entry(key).or_insert((label, 0)).1 += 1;
            }
        }

        let mut entries: Vec<(String, usize)> = counts.into_values().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.into_iter().collect()
    }
}

//! Column classification into categorical, numeric and cardinal groups.
//!
//! Text columns are categorical unless they hold more than `cardinal_threshold`
//! distinct values, in which case they are cardinal. Non-text columns with
//! fewer than `categorical_threshold` distinct values (flags, small codes) are
//! categorical; the remaining non-text columns are numeric. Both comparisons
//! are strict.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Dataset;

/// Thresholds for [`ColumnClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Non-text columns with fewer distinct values than this are categorical.
    pub categorical_threshold: i64,
    /// Text columns with more distinct values than this are cardinal.
    pub cardinal_threshold: i64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categorical_threshold: 10,
            cardinal_threshold: 20,
        }
    }
}

/// Column names per group, each in dataset column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub categorical: Vec<String>,
    pub numeric: Vec<String>,
    pub cardinal: Vec<String>,
}

impl Classification {
    pub fn is_categorical(&self, name: &str) -> bool {
        self.categorical.iter().any(|c| c == name)
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.numeric.iter().any(|c| c == name)
    }

    pub fn is_cardinal(&self, name: &str) -> bool {
        self.cardinal.iter().any(|c| c == name)
    }
}

/// Splits dataset columns by declared type and cardinality.
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    config: ClassifierConfig,
}

impl ColumnClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, dataset: &Dataset) -> Classification {
        let columns = dataset.columns();

        let text_cols: Vec<&str> = columns
            .iter()
            .filter(|c| c.dtype.is_text())
            .map(|c| c.name.as_str())
            .collect();

        let low_card_numeric: HashSet<&str> = columns
            .iter()
            .filter(|c| {
                !c.dtype.is_text()
                    && (c.distinct_count() as i64) < self.config.categorical_threshold
            })
            .map(|c| c.name.as_str())
            .collect();

        let high_card_text: HashSet<&str> = columns
            .iter()
            .filter(|c| {
                c.dtype.is_text() && (c.distinct_count() as i64) > self.config.cardinal_threshold
            })
            .map(|c| c.name.as_str())
            .collect();

        let mut classification = Classification::default();
        for column in columns {
            let name = column.name.as_str();
            let is_text = text_cols.contains(&name);

            if high_card_text.contains(name) {
                classification.cardinal.push(name.to_string());
            } else if is_text || low_card_numeric.contains(name) {
                classification.categorical.push(name.to_string());
            } else {
                classification.numeric.push(name.to_string());
            }
        }

        debug!(
            categorical = classification.categorical.len(),
            numeric = classification.numeric.len(),
            cardinal = classification.cardinal.len(),
            "classified columns"
        );

        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, DataType, Value};

    fn ints(name: &str, values: &[i64]) -> Column {
        Column::new(
            name,
            DataType::Integer,
            values.iter().map(|v| Value::Integer(*v)).collect(),
        )
    }

    fn texts(name: &str, distinct: usize, len: usize) -> Column {
        Column::new(
            name,
            DataType::Text,
            (0..len).map(|i| Value::Text(format!("v{}", i % distinct))).collect(),
        )
    }

    #[test]
    fn test_small_integer_columns_are_categorical() {
        let ds = Dataset::new(vec![ints("id", &[1, 2, 3]), ints("flag", &[0, 1, 0])]).unwrap();
        let result = ColumnClassifier::new().classify(&ds);

        assert_eq!(result.categorical, vec!["id", "flag"]);
        assert!(result.numeric.is_empty());
        assert!(result.cardinal.is_empty());
    }

    #[test]
    fn test_boundary_values() {
        let ds = Dataset::new(vec![
            ints("ten_distinct", &(0..20).map(|i| i % 10).collect::<Vec<_>>()),
            texts("twenty_distinct", 20, 20),
        ])
        .unwrap();
        let result = ColumnClassifier::new().classify(&ds);

        assert_eq!(result.numeric, vec!["ten_distinct"]);
        assert!(result.is_categorical("twenty_distinct"));
        assert!(!result.is_cardinal("twenty_distinct"));
    }

    #[test]
    fn test_high_cardinality_text_is_cardinal() {
        let ds = Dataset::new(vec![texts("city", 25, 25)]).unwrap();
        let result = ColumnClassifier::new().classify(&ds);

        assert_eq!(result.cardinal, vec!["city"]);
        assert!(result.categorical.is_empty());
    }

    #[test]
    fn test_non_positive_thresholds() {
        let ds = Dataset::new(vec![ints("flag", &[0, 1, 0]), texts("name", 2, 3)]).unwrap();
        let result = ColumnClassifier::with_config(ClassifierConfig {
            categorical_threshold: 0,
            cardinal_threshold: 0,
        })
        .classify(&ds);

        assert_eq!(result.numeric, vec!["flag"]);
        assert_eq!(result.cardinal, vec!["name"]);
        assert!(result.categorical.is_empty());
    }

    #[test]
    fn test_boolean_and_timestamp_columns_are_not_text() {
        let ds = Dataset::new(vec![Column::new(
            "ok",
            DataType::Boolean,
            vec![Value::Boolean(true), Value::Boolean(false)],
        )])
        .unwrap();
        let result = ColumnClassifier::new().classify(&ds);
        assert_eq!(result.categorical, vec!["ok"]);
    }
}

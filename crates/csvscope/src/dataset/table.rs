//! The in-memory dataset built from one upload.

use std::collections::HashSet;

use serde::Serialize;

use super::column::Column;
use super::types::{DataType, Value};
use crate::error::{CsvscopeError, Result};
use crate::inference::TypeInferrer;
use crate::input::DataTable;

/// Ordered, typed columns of equal length with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

/// First rows of a dataset, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    /// Column headers.
    pub headers: Vec<String>,
    /// Declared type per header.
    pub dtypes: Vec<DataType>,
    /// Row data (first N rows).
    pub rows: Vec<Vec<Value>>,
    /// Total row count in the dataset.
    pub total_rows: usize,
    /// Whether rows were left out.
    pub truncated: bool,
}

impl Dataset {
    /// Assemble a dataset from typed columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        let mut names = HashSet::new();
        for (idx, column) in columns.iter().enumerate() {
            if !names.insert(column.name.as_str()) {
                return Err(CsvscopeError::Parse {
                    row: 0,
                    column: idx,
                    message: format!("duplicate column name '{}'", column.name),
                });
            }
            if column.len() != row_count {
                return Err(CsvscopeError::Parse {
                    row: column.len().min(row_count),
                    column: idx,
                    message: format!(
                        "column '{}' has {} values, expected {}",
                        column.name,
                        column.len(),
                        row_count
                    ),
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Type every column of a parsed table, applying the timestamp coercion pass.
    pub fn from_table(table: &DataTable) -> Result<Self> {
        let inferrer = TypeInferrer::new();
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(idx, name)| inferrer.build_column(name, table.column_values(idx)))
            .collect::<Result<Vec<_>>>()?;

        let mut dataset = Self::new(columns)?;
        dataset.row_count = table.row_count();
        Ok(dataset)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Preview {
        let take = n.min(self.row_count);
        let rows = (0..take)
            .map(|row| self.columns.iter().map(|c| c.values[row].clone()).collect())
            .collect();

        Preview {
            headers: self.columns.iter().map(|c| c.name.clone()).collect(),
            dtypes: self.columns.iter().map(|c| c.dtype).collect(),
            rows,
            total_rows: self.row_count,
            truncated: self.row_count > take,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_from_table_types_columns() {
        let t = table(
            &["id", "name", "price", "active"],
            &[&["1", "a", "1.5", "true"], &["2", "b", "2", "false"]],
        );
        let ds = Dataset::from_table(&t).unwrap();

        let dtypes: Vec<DataType> = ds.columns().iter().map(|c| c.dtype).collect();
        assert_eq!(
            dtypes,
            vec![DataType::Integer, DataType::Text, DataType::Float, DataType::Boolean]
        );
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_zero_row_table() {
        let t = table(&["a", "b"], &[]);
        let ds = Dataset::from_table(&t).unwrap();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let cols = vec![
            Column::new("a", DataType::Integer, vec![]),
            Column::new("a", DataType::Integer, vec![]),
        ];
        assert!(Dataset::new(cols).is_err());
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let cols = vec![
            Column::new("a", DataType::Integer, vec![Value::Integer(1)]),
            Column::new("b", DataType::Integer, vec![]),
        ];
        assert!(Dataset::new(cols).is_err());
    }

    #[test]
    fn test_head() {
        let t = table(&["n"], &[&["1"], &["2"], &["3"]]);
        let ds = Dataset::from_table(&t).unwrap();

        let preview = ds.head(2);
        assert_eq!(preview.rows, vec![vec![Value::Integer(1)], vec![Value::Integer(2)]]);
        assert!(preview.truncated);
        assert_eq!(preview.total_rows, 3);

        assert!(!ds.head(10).truncated);
    }
}

//! Per-column missing value / uniqueness / dtype report.

use std::fmt;

use serde::{Serialize, Serializer};

use super::stats::round2;
use crate::dataset::{Column, DataType, Dataset};
use crate::error::{CsvscopeError, Result};

/// Share of missing cells in a column, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissingRatio {
    /// Percentage in [0, 100], rounded to two decimals.
    Percent(f64),
    /// The dataset has no rows.
    Undefined,
}

impl MissingRatio {
    pub fn percent(&self) -> Option<f64> {
        match self {
            MissingRatio::Percent(p) => Some(*p),
            MissingRatio::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, MissingRatio::Undefined)
    }
}

impl fmt::Display for MissingRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingRatio::Percent(p) => write!(f, "{:.2}", p),
            MissingRatio::Undefined => f.write_str("n/a"),
        }
    }
}

impl Serialize for MissingRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MissingRatio::Percent(p) => serializer.serialize_f64(*p),
            MissingRatio::Undefined => serializer.serialize_none(),
        }
    }
}

/// One row of the column information table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub missing_count: usize,
    pub missing_ratio: MissingRatio,
    pub distinct_count: usize,
    pub declared_type: DataType,
}

/// `missing_count / row_count * 100`, rounded to two decimals.
pub fn missing_ratio(column: &str, missing_count: usize, row_count: usize) -> Result<f64> {
    if row_count == 0 {
        return Err(CsvscopeError::UndefinedRatio {
            column: column.to_string(),
        });
    }
    Ok(round2(missing_count as f64 / row_count as f64 * 100.0))
}

/// Builds the column information table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    pub fn new() -> Self {
        Self
    }

    /// One row per column, most missing values first. Ties keep column order.
    pub fn report(&self, dataset: &Dataset) -> Vec<ColumnSummary> {
        let mut rows: Vec<ColumnSummary> = dataset
            .columns()
            .iter()
            .map(|column| self.summarize(column, dataset.row_count()))
            .collect();

        rows.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));
        rows
    }

    fn summarize(&self, column: &Column, row_count: usize) -> ColumnSummary {
        let missing_count = column.null_count();
        let missing_ratio = match missing_ratio(&column.name, missing_count, row_count) {
            Ok(p) => MissingRatio::Percent(p),
            Err(_) => MissingRatio::Undefined,
        };

        ColumnSummary {
            name: column.name.clone(),
            missing_count,
            missing_ratio,
            distinct_count: column.distinct_count(),
            declared_type: column.dtype,
        }
    }
}

//! Descriptive statistics of the numeric columns.

use serde::Serialize;

use super::stats::{quantile, sorted, RunningMoments};
use crate::dataset::{Column, Dataset};

/// One row of the describe table. Statistics a column cannot support
/// (no values, a single value for `std`) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericDescription {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

impl NumericDescription {
    /// Describe one column's non-null numeric values.
    pub fn from_column(column: &Column) -> Self {
        let values = column.numeric_values();
        let moments: RunningMoments = values.iter().copied().collect();
        let ordered = sorted(&values);

        Self {
            column: column.name.clone(),
            count: moments.count(),
            mean: moments.mean(),
            std: moments.sample_std(),
            min: moments.min(),
            q1: quantile(&ordered, 0.25),
            median: quantile(&ordered, 0.5),
            q3: quantile(&ordered, 0.75),
            max: moments.max(),
        }
    }
}

/// Describe every integer or float column, in column order.
pub fn describe(dataset: &Dataset) -> Vec<NumericDescription> {
    dataset
        .columns()
        .iter()
        .filter(|c| c.dtype.is_numeric())
        .map(NumericDescription::from_column)
        .collect()
}

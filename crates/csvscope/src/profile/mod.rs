//! Column profiling: classification, the column information table and
//! descriptive statistics.

mod classify;
mod describe;
pub mod stats;
mod summary;

pub use classify::{Classification, ClassifierConfig, ColumnClassifier};
pub use describe::{describe, NumericDescription};
pub use summary::{missing_ratio, ColumnSummary, MissingRatio, SummaryReporter};

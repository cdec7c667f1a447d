//! csvscope: explore an uploaded CSV file.
//!
//! A CSV upload becomes a typed [`Dataset`]. From it csvscope derives a
//! head preview, a per-column information table (missing values, distinct
//! values, declared type), descriptive statistics of the numeric columns, a
//! categorical / numeric / cardinal classification of the columns, and chart
//! figures for a handful of chart types.
//!
//! # Example
//!
//! ```no_run
//! use csvscope::{ChartKind, ChartRequest, Explorer};
//!
//! let explorer = Explorer::new();
//! let loaded = explorer.load_file("sales.csv").unwrap();
//!
//! for row in explorer.summary(&loaded.dataset) {
//!     println!("{}: {} missing ({})", row.name, row.missing_count, row.missing_ratio);
//! }
//!
//! let request = ChartRequest::new(ChartKind::Histogram).with_x("amount");
//! if let Some(figure) = explorer.plot(&loaded.dataset, &request).unwrap() {
//!     println!("{}", figure.title);
//! }
//! ```

pub mod chart;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod input;
pub mod profile;

mod explorer;
mod session;

pub use crate::explorer::{DatasetReport, Explorer, ExplorerConfig, LoadedDataset};
pub use crate::session::Session;
pub use chart::{AxisOptions, ChartKind, ChartRequest, Figure, FigureConfig, FigureData};
pub use dataset::{Column, DataType, Dataset, Preview, Value};
pub use error::{CsvscopeError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use profile::{
    Classification, ClassifierConfig, ColumnClassifier, ColumnSummary, MissingRatio,
    NumericDescription, SummaryReporter,
};

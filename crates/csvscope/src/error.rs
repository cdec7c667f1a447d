//! Error types for the csvscope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvscope operations.
#[derive(Debug, Error)]
pub enum CsvscopeError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing CSV data.
    #[error("Parse error at row {row}, column {column}: {message}")]
    Parse {
        row: usize,
        column: usize,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column whose name mentions a date holds a value that is not a timestamp.
    #[error("Cannot convert column '{column}' to datetime: unparseable value '{value}' at row {row}")]
    DateCoercion {
        column: String,
        row: usize,
        value: String,
    },

    /// Empty upload, or a header without any column.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Missing ratio requested for a dataset without rows.
    #[error("Missing ratio of column '{column}' is undefined for a dataset with no rows")]
    UndefinedRatio { column: String },

    /// A well-formed chart request that cannot be drawn from the data.
    #[error("Cannot render {chart}: {message}")]
    Render { chart: String, message: String },
}

impl CsvscopeError {
    /// Whether this error means the uploaded bytes could not become a dataset.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CsvscopeError::Parse { .. }
                | CsvscopeError::Csv(_)
                | CsvscopeError::DateCoercion { .. }
                | CsvscopeError::EmptyData(_)
        )
    }
}

/// Result type alias for csvscope operations.
pub type Result<T> = std::result::Result<T, CsvscopeError>;

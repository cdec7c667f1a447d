//! Typed, in-memory representation of an uploaded table.

mod column;
mod table;
mod types;

pub use column::Column;
pub use table::{Dataset, Preview};
pub use types::{format_float, DataType, Value, ValueKey, TIMESTAMP_FORMAT};

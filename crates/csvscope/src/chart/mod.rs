//! Chart requests and figure construction.

mod density;
mod figure;
mod kind;
mod request;

pub use density::KernelDensity;
pub use figure::{Bin, BoxGroup, Figure, FigureBuilder, FigureConfig, FigureData, Slice};
pub use kind::{ChartKind, ColumnSource};
pub use request::{AxisOptions, ChartRequest, ValidatedChart};

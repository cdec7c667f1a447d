//! Type inference for raw columns.

mod typing;

pub use typing::{parse_timestamp, TypeInferrer};

//! CLI command implementations.

pub mod columns;
pub mod inspect;
pub mod plot;
pub mod serve;

//! API request handlers.

mod data;
mod health;
mod plot;
mod upload;

pub use data::*;
pub use health::*;
pub use plot::*;
pub use upload::*;

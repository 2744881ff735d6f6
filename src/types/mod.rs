//! Type definitions for immoboard

mod chart;
mod error;
mod listing;

pub use chart::*;
pub use error::*;
pub use listing::*;

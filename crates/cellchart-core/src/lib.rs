#![forbid(unsafe_code)]

//! Core: cell-grid geometry and logging shims shared by the chart crates.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug_span, trace, warn};

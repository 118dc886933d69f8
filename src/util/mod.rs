//! Shared utilities.

/// Time sources.
pub mod clock;
/// Tracing subscriber setup.
pub mod telemetry;

pub use clock::*;
pub use telemetry::*;

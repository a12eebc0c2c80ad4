//! Logging setup shared by binaries, tests and benchmarks.
//!
//! Library crates only emit `tracing` events; whoever owns the process decides
//! where they go by calling [`init`] or [`init_pretty`].

/// Tracing subscriber configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init, init_pretty};

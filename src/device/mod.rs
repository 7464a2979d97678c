//! Device access
//!
//! This module holds the execution context and the executor that runs
//! commands against the switch CLI.

pub mod context;
pub mod executor;

// Re-export main types
pub use context::*;
pub use executor::*;

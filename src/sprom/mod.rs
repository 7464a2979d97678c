//! Transceiver SPROM handling
//!
//! This module parses SPROM dumps, resolves breakout-aware transceiver types,
//! and builds the single-interface report.

pub mod parse;
pub mod report;
pub mod rules;

// Re-export main types
pub use parse::*;
pub use report::*;
pub use rules::*;

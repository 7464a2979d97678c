//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, usage text, and dispatch to
//! the interface and status reports.

pub mod app;

// Re-export main types
pub use app::*;

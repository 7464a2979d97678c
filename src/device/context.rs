//! Execution context for device queries
//!
//! The context carries the verbosity level and the console helpers used to
//! report progress, warnings, and errors. Report content itself goes to stdout
//! through the caller; everything here except `print_action` goes to stderr.

use crate::ui;

/// Execution context shared (read-only) by every query in a run
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Normal = 0,
    Debug = 1,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            verbosity: Verbosity::Normal,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Enable debug output when `debug` is set
    pub fn with_debug(self, debug: bool) -> Self {
        if debug {
            self.with_verbosity(Verbosity::Debug)
        } else {
            self
        }
    }

    /// Whether debug output is enabled
    pub fn is_debug(&self) -> bool {
        self.verbosity >= Verbosity::Debug
    }

    /// Announce an action the operator asked for (always shown, on stdout)
    pub fn print_action(&self, message: &str) {
        println!("{}", message);
    }

    /// Print warning message
    pub fn print_warn(&self, message: &str) {
        eprintln!("{} {}", ui::warn_prefix(), message);
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", ui::error_prefix(), message);
    }

    /// Print debug message (only with -D)
    pub fn print_debug(&self, message: &str) {
        if self.is_debug() {
            eprintln!("{} {}", ui::debug_prefix(), message);
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

//! Console decoration
//!
//! `colored` drops the escape codes when `NO_COLOR` is set or output is not
//! a terminal, so report text stays plain when piped.

use colored::{ColoredString, Colorize};

pub fn warn_prefix() -> ColoredString {
    "[WARN]".yellow()
}

pub fn error_prefix() -> ColoredString {
    "[ERROR]".red().bold()
}

pub fn debug_prefix() -> ColoredString {
    "[DEBUG]".dimmed()
}

/// Section banner printed above a report, e.g. `--- Modified Interface Status ---`
pub fn banner(title: &str) -> ColoredString {
    format!("--- {} ---", title).bold()
}

//! Interface status report
//!
//! This module decodes `show interface status | json`, collects SPROM data
//! for the ports that need it, and renders the table with rewritten types.

pub mod collect;
pub mod report;
pub mod rows;
pub mod table;

// Re-export main types
pub use collect::*;
pub use report::*;
pub use rows::*;
pub use table::*;

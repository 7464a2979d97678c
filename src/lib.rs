//! type-check - transceiver type reporting for switch CLIs
//!
//! Queries a switch's CLI for transceiver SPROM data, rewrites raw EEPROM
//! type codes into their breakout-aware names, and prints either a single
//! interface report or a reformatted `show interface status` table.

// Public modules
pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod sprom;
pub mod status;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, XcvrError};

/// Current version of type-check
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

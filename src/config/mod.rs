//! Application configuration and constants.
//!
//! This module provides:
//! - Export constants (file naming, media type, report fields)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};

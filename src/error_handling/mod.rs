//! Error handling.
//!
//! This module provides the error types for:
//! - Logger initialization
//! - Export operations (only an empty record sequence is an error)
//! - Loading records from JSON input

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, InputError};

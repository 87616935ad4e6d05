//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for export operations.
///
/// Only the total absence of data aborts an export. Individual cell values
/// never fail: unrecognized values fall back to a best-effort string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The record sequence was empty; nothing was handed to the sink.
    #[error("No data to export")]
    NoData,
}

/// Error types for loading records from a JSON input file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be read.
    #[error("Failed to read input file {path}: {source}")]
    Io {
        /// Path of the input file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("Input must be a JSON array of objects")]
    NotAnArray,

    /// An array element is not a JSON object.
    #[error("Record {index} is not a JSON object")]
    RecordNotObject {
        /// Position of the offending element
        index: usize,
    },

    /// A field listed as a date holds text that is not RFC 3339.
    #[error("Record {index}: field '{field}' is not an RFC 3339 date: {value}")]
    InvalidDate {
        /// Position of the offending record
        index: usize,
        /// Field name
        field: String,
        /// Raw field text
        value: String,
    },
}

//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};
use crate::export::{ExportOptions, ReportShape};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for the `finance_report` binary.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use finance_report::Config;
///
/// let config = Config::parse_from([
///     "finance_report",
///     "accounts.json",
///     "--file-name",
///     "accounts",
///     "--report",
///     "simple",
///     "--fields",
///     "id,balance",
/// ]);
/// assert_eq!(config.fields, vec!["id", "balance"]);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "finance_report", version, about)]
pub struct Config {
    /// JSON file holding an array of record objects
    pub input: PathBuf,

    /// Base name of the exported file (no extension)
    #[arg(long)]
    pub file_name: String,

    /// Report title (reserved, not written to the document)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not append the `_YYYY-MM-DD` date suffix to the file name
    #[arg(long)]
    pub no_timestamp: bool,

    /// Report shape to export
    #[arg(long, value_enum, default_value_t = ReportShape::Csv)]
    pub report: ReportShape,

    /// Fields kept by a simple report, in output order
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Fields whose RFC 3339 text is exported as a date cell
    #[arg(long, value_delimiter = ',')]
    pub date_fields: Vec<String>,

    /// Directory the CSV file is written to
    #[arg(long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Write the document to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Builds the exporter options described by this configuration.
    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions::new(self.file_name.clone())
            .include_timestamp(!self.no_timestamp);
        if let Some(title) = &self.title {
            options = options.with_title(title.clone());
        }
        options
    }
}

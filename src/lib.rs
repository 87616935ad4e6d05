//! finance_report library: CSV report export for personal-finance records
//!
//! This library turns ordered sequences of flat records (accounts, budgets,
//! transactions, goals) into CSV documents and hands them to a file sink.
//! Three report shapes are available: the records as given, a simple report
//! with a chosen subset of fields, and a detailed report with export metadata.
//!
//! # Example
//!
//! ```
//! use finance_report::export::{generate_simple_report, ExportOptions, MemorySink, Record};
//!
//! let accounts = vec![
//!     Record::new().with("id", "1").with("name", "Checking").with("balance", 2500),
//!     Record::new().with("id", "2").with("name", "Savings").with("balance", 12000),
//! ];
//! let sink = MemorySink::new();
//! let options = ExportOptions::new("accounts").include_timestamp(false);
//!
//! let summary = generate_simple_report(&accounts, &options, &["id", "balance"], &sink)?;
//! assert_eq!(summary.file_name, "accounts_simple.csv");
//! assert_eq!(
//!     sink.last().unwrap().contents,
//!     "id,balance\n\"1\",2500\n\"2\",12000\n"
//! );
//! # Ok::<(), finance_report::ExportError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError, InputError};
pub use export::{
    export_csv, generate_detailed_report, generate_simple_report, ExportOptions, ExportSummary,
    FileSink, Record, ReportShape,
};

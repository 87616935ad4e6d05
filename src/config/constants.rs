//! Configuration constants.
//!
//! File naming, payload and report-shape constants shared by the exporter
//! and the CLI.

/// Extension appended to every exported file name.
pub const CSV_EXTENSION: &str = "csv";

/// Media type attached to the exported payload.
pub const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8";

/// Column delimiter.
pub const CSV_DELIMITER: char = ',';

/// Row terminator. Every row, including the last, ends with it.
pub const CSV_LINE_TERMINATOR: char = '\n';

/// File name suffix for simple (field subset) reports.
pub const SIMPLE_REPORT_SUFFIX: &str = "_simple";

/// File name suffix for detailed (metadata augmented) reports.
pub const DETAILED_REPORT_SUFFIX: &str = "_detailed";

/// Field appended by the detailed report holding the export instant.
pub const EXPORTED_AT_FIELD: &str = "exportedAt";

/// Field appended by the detailed report holding the report tag.
pub const REPORT_TYPE_FIELD: &str = "reportType";

/// Value of [`REPORT_TYPE_FIELD`] in detailed reports.
pub const DETAILED_REPORT_TYPE: &str = "Detailed";

/// chrono format of the date suffix (`_YYYY-MM-DD`).
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default directory written by the CLI's file sink.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Environment variable overriding the CLI output directory.
pub const OUTPUT_DIR_ENV: &str = "FINANCE_REPORT_OUTPUT_DIR";

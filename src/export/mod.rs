//! Export functionality for finance records.
//!
//! This module turns an ordered sequence of [`Record`]s into a CSV document
//! and hands it to a [`FileSink`]. Three report shapes are offered:
//! - plain CSV of the records as given ([`export_csv`])
//! - a simple report keeping selected fields ([`generate_simple_report`])
//! - a detailed report with export metadata ([`generate_detailed_report`])

mod csv;
mod record;
mod report;
mod sink;
mod types;
mod value;

pub use self::csv::{compose_file_name, export_csv, export_csv_at, header_fields, render_csv};
pub use record::Record;
pub use report::{
    annotate_detailed, export_report, generate_detailed_report, generate_detailed_report_at,
    generate_simple_report, generate_simple_report_at, project_fields,
};
pub use sink::{DirectorySink, FileSink, MemorySink, StdoutSink};
pub use types::{ExportFile, ExportOptions, ExportSummary, ReportShape};
pub use value::{format_timestamp, CellValue};

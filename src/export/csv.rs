//! CSV export functionality.
//!
//! Serializes an ordered sequence of records into a comma-delimited document
//! and hands it to a [`FileSink`].
//!
//! Columns come from the first record only. Later records are projected onto
//! those columns: a missing field becomes an empty cell and a field the first
//! record lacks is dropped.

use chrono::{DateTime, Utc};
use log::{debug, error};

use super::record::Record;
use super::sink::FileSink;
use super::types::{ExportFile, ExportOptions, ExportSummary};
use crate::config::{
    CSV_DELIMITER, CSV_EXTENSION, CSV_LINE_TERMINATOR, CSV_MEDIA_TYPE, FILE_DATE_FORMAT,
};
use crate::error_handling::ExportError;

/// Header columns for a document whose first record is `first`.
pub fn header_fields(first: &Record) -> Vec<String> {
    first.field_names().map(str::to_string).collect()
}

/// Renders `records` as CSV text.
///
/// The header row lists the column names unquoted. Every row, the last one
/// included, ends with `\n`.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] if `records` is empty.
///
/// # Examples
///
/// ```
/// use finance_report::export::{render_csv, Record};
///
/// let records = vec![
///     Record::new().with("a", 1).with("b", 2),
///     Record::new().with("a", 3),
/// ];
/// assert_eq!(render_csv(&records).unwrap(), "a,b\n1,2\n3,\n");
/// ```
pub fn render_csv(records: &[Record]) -> Result<String, ExportError> {
    let first = records.first().ok_or(ExportError::NoData)?;
    let headers = header_fields(first);
    Ok(render_with_headers(records, &headers))
}

fn render_with_headers(records: &[Record], headers: &[String]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().map(String::as_str));

    for record in records {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| record.get(header).map(|v| v.encode()).unwrap_or_default())
            .collect();
        push_row(&mut out, cells.iter().map(String::as_str));
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(CSV_DELIMITER);
        }
        out.push_str(cell);
    }
    out.push(CSV_LINE_TERMINATOR);
}

/// Builds `<file_name>[_<YYYY-MM-DD>].csv` for an export made at `now`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use finance_report::export::compose_file_name;
///
/// let now = Utc.with_ymd_and_hms(2025, 5, 8, 9, 0, 0).unwrap();
/// assert_eq!(compose_file_name("accounts", true, now), "accounts_2025-05-08.csv");
/// assert_eq!(compose_file_name("accounts", false, now), "accounts.csv");
/// ```
pub fn compose_file_name(file_name: &str, include_timestamp: bool, now: DateTime<Utc>) -> String {
    if include_timestamp {
        format!(
            "{}_{}.{}",
            file_name,
            now.format(FILE_DATE_FORMAT),
            CSV_EXTENSION
        )
    } else {
        format!("{}.{}", file_name, CSV_EXTENSION)
    }
}

/// Exports `records` as a CSV file named after `options`, timestamped now.
///
/// See [`export_csv_at`].
pub fn export_csv<S: FileSink + ?Sized>(
    records: &[Record],
    options: &ExportOptions,
    sink: &S,
) -> Result<ExportSummary, ExportError> {
    export_csv_at(records, options, sink, Utc::now())
}

/// Exports `records` as a CSV file, using `now` for the date suffix.
///
/// The document is built completely before it is handed to `sink`, so the
/// sink receives either the whole document or nothing. `options.title` is
/// not written to the document.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] if `records` is empty. The failure is
/// logged and the sink is not called.
pub fn export_csv_at<S: FileSink + ?Sized>(
    records: &[Record],
    options: &ExportOptions,
    sink: &S,
    now: DateTime<Utc>,
) -> Result<ExportSummary, ExportError> {
    let Some(first) = records.first() else {
        error!("No data to export ({})", options.file_name);
        return Err(ExportError::NoData);
    };

    let file_name = compose_file_name(&options.file_name, options.include_timestamp, now);
    let columns = header_fields(first);
    debug!("Exporting {} with columns: {}", file_name, columns.join(","));

    let contents = render_with_headers(records, &columns);

    debug!("Handing {} rows to sink as {}", records.len(), file_name);
    sink.save(ExportFile {
        file_name: file_name.clone(),
        media_type: CSV_MEDIA_TYPE,
        contents,
    });

    Ok(ExportSummary {
        file_name,
        rows: records.len(),
        columns,
    })
}

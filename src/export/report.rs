//! Report shapes layered on top of the CSV exporter.
//!
//! A simple report keeps a caller-chosen subset of fields; a detailed report
//! keeps everything and appends export metadata. Both derive a fresh record
//! sequence and pass it to [`export_csv_at`] with a suffixed file name, so a
//! simple report for `accounts` on 2025-05-08 is `accounts_simple_2025-05-08.csv`.

use chrono::{DateTime, Utc};
use log::{error, warn};

use super::csv::export_csv_at;
use super::record::Record;
use super::sink::FileSink;
use super::types::{ExportOptions, ExportSummary, ReportShape};
use super::value::{format_timestamp, CellValue};
use crate::config::{DETAILED_REPORT_TYPE, EXPORTED_AT_FIELD, REPORT_TYPE_FIELD};
use crate::error_handling::ExportError;

/// Projects each record onto `fields`.
///
/// Output fields follow the order of `fields`. A requested field that a record
/// lacks is left out of that record's projection rather than set to null.
pub fn project_fields<F: AsRef<str>>(records: &[Record], fields: &[F]) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            fields
                .iter()
                .filter_map(|field| {
                    let name = field.as_ref();
                    record.get(name).map(|value| (name, value.clone()))
                })
                .collect::<Record>()
        })
        .collect()
}

/// Appends `exportedAt` and `reportType` to each record.
///
/// Every record receives the same `exportedAt` text, the ISO-8601 form of
/// `exported_at`. A record that already has one of these fields has it
/// overwritten in place.
pub fn annotate_detailed(records: &[Record], exported_at: DateTime<Utc>) -> Vec<Record> {
    let stamp = format_timestamp(&exported_at);
    records
        .iter()
        .map(|record| {
            let mut annotated = record.clone();
            annotated.insert(EXPORTED_AT_FIELD, CellValue::Text(stamp.clone()));
            annotated.insert(REPORT_TYPE_FIELD, DETAILED_REPORT_TYPE);
            annotated
        })
        .collect()
}

/// Exports the `fields` subset of `records` as `<file_name>_simple[_date].csv`.
///
/// See [`generate_simple_report_at`].
pub fn generate_simple_report<S, F>(
    records: &[Record],
    options: &ExportOptions,
    fields: &[F],
    sink: &S,
) -> Result<ExportSummary, ExportError>
where
    S: FileSink + ?Sized,
    F: AsRef<str>,
{
    generate_simple_report_at(records, options, fields, sink, Utc::now())
}

/// Simple report with an explicit export instant.
///
/// The header is taken from the first projected record, so when that record
/// lacks some requested fields those columns are absent from the whole file.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] if `records` is empty.
pub fn generate_simple_report_at<S, F>(
    records: &[Record],
    options: &ExportOptions,
    fields: &[F],
    sink: &S,
    now: DateTime<Utc>,
) -> Result<ExportSummary, ExportError>
where
    S: FileSink + ?Sized,
    F: AsRef<str>,
{
    if records.is_empty() {
        error!("No data to export ({})", options.file_name);
        return Err(ExportError::NoData);
    }

    if fields.is_empty() {
        warn!("Simple report {} selects no fields", options.file_name);
    }
    for field in fields {
        let name = field.as_ref();
        if !records.iter().any(|record| record.contains_field(name)) {
            warn!("Field '{}' is not present in any record", name);
        }
    }

    let projected = project_fields(records, fields);
    export_csv_at(
        &projected,
        &options.with_file_suffix(ReportShape::Simple.file_suffix()),
        sink,
        now,
    )
}

/// Exports `records` with export metadata as `<file_name>_detailed[_date].csv`.
///
/// See [`generate_detailed_report_at`].
pub fn generate_detailed_report<S: FileSink + ?Sized>(
    records: &[Record],
    options: &ExportOptions,
    sink: &S,
) -> Result<ExportSummary, ExportError> {
    generate_detailed_report_at(records, options, sink, Utc::now())
}

/// Detailed report with an explicit export instant.
///
/// `now` is read once: it is both the `exportedAt` value of every row and the
/// date in the file name.
///
/// # Errors
///
/// Returns [`ExportError::NoData`] if `records` is empty.
pub fn generate_detailed_report_at<S: FileSink + ?Sized>(
    records: &[Record],
    options: &ExportOptions,
    sink: &S,
    now: DateTime<Utc>,
) -> Result<ExportSummary, ExportError> {
    if records.is_empty() {
        error!("No data to export ({})", options.file_name);
        return Err(ExportError::NoData);
    }

    let annotated = annotate_detailed(records, now);
    export_csv_at(
        &annotated,
        &options.with_file_suffix(ReportShape::Detailed.file_suffix()),
        sink,
        now,
    )
}

/// Exports `records` in the given `shape`.
///
/// `fields` is only consulted for [`ReportShape::Simple`].
pub fn export_report<S, F>(
    shape: ReportShape,
    records: &[Record],
    options: &ExportOptions,
    fields: &[F],
    sink: &S,
) -> Result<ExportSummary, ExportError>
where
    S: FileSink + ?Sized,
    F: AsRef<str>,
{
    let now = Utc::now();
    match shape {
        ReportShape::Csv => export_csv_at(records, options, sink, now),
        ReportShape::Simple => generate_simple_report_at(records, options, fields, sink, now),
        ReportShape::Detailed => generate_detailed_report_at(records, options, sink, now),
    }
}

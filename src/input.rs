//! Loading records from JSON input.
//!
//! The CLI reads a JSON array of objects. Object key order is preserved and
//! becomes the column order of the export. JSON has no date type, so fields
//! named in `date_fields` are parsed from RFC 3339 text into date cells.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::error_handling::InputError;
use crate::export::{CellValue, Record};

/// Reads and converts the JSON array stored at `path`.
///
/// # Errors
///
/// Returns an [`InputError`] if the file cannot be read or its contents are
/// not an array of objects, or if a date field holds unparseable text.
pub fn load_records<F: AsRef<str>>(
    path: &Path,
    date_fields: &[F],
) -> Result<Vec<Record>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text, date_fields)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses a JSON array of objects into records.
///
/// Null date fields stay null, and non-text values in a date field are kept
/// as they are.
///
/// # Examples
///
/// ```
/// use finance_report::export::CellValue;
/// use finance_report::input::parse_records;
///
/// let records = parse_records(
///     r#"[{"id": "t1", "date": "2025-05-01T00:00:00Z", "amount": -12.5}]"#,
///     &["date"],
/// )
/// .unwrap();
/// assert!(matches!(records[0].get("date"), Some(CellValue::Date(_))));
/// ```
pub fn parse_records<F: AsRef<str>>(
    json: &str,
    date_fields: &[F],
) -> Result<Vec<Record>, InputError> {
    let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
        return Err(InputError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => {
                let mut record = Record::from(map);
                parse_date_fields(&mut record, index, date_fields)?;
                Ok(record)
            }
            _ => Err(InputError::RecordNotObject { index }),
        })
        .collect()
}

fn parse_date_fields<F: AsRef<str>>(
    record: &mut Record,
    index: usize,
    date_fields: &[F],
) -> Result<(), InputError> {
    for field in date_fields {
        let field = field.as_ref();
        let Some(CellValue::Text(text)) = record.get(field) else {
            continue;
        };
        let parsed = DateTime::parse_from_rfc3339(text).map_err(|_| InputError::InvalidDate {
            index,
            field: field.to_string(),
            value: text.clone(),
        })?;
        record.insert(field, parsed.with_timezone(&Utc));
    }
    Ok(())
}

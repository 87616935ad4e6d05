//! Export types and options.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::{DETAILED_REPORT_SUFFIX, SIMPLE_REPORT_SUFFIX};

/// Report shapes the exporter can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, Serialize, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportShape {
    /// Records exported as given
    Csv,
    /// Caller-selected subset of fields
    Simple,
    /// Full records plus export metadata
    Detailed,
}

impl ReportShape {
    /// Suffix appended to the base file name before the date suffix.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ReportShape::Csv => "",
            ReportShape::Simple => SIMPLE_REPORT_SUFFIX,
            ReportShape::Detailed => DETAILED_REPORT_SUFFIX,
        }
    }
}

/// Options for exporting data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Base file name, without extension
    pub file_name: String,
    /// Report title. Reserved for a future heading; not written to the document.
    pub title: Option<String>,
    /// Append `_YYYY-MM-DD` to the file name (default: true)
    pub include_timestamp: bool,
}

impl ExportOptions {
    /// Creates options for `file_name` with the date suffix enabled.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            title: None,
            include_timestamp: true,
        }
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables or disables the date suffix.
    pub fn include_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    /// Returns a copy whose base file name carries `suffix`.
    pub(crate) fn with_file_suffix(&self, suffix: &str) -> Self {
        Self {
            file_name: format!("{}{}", self.file_name, suffix),
            ..self.clone()
        }
    }
}

/// A finished document handed to a [`FileSink`](super::FileSink).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// File name including extension
    pub file_name: String,
    /// Media type of `contents`
    pub media_type: &'static str,
    /// UTF-8 document text
    pub contents: String,
}

/// Outcome of a successful export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// File name handed to the sink
    pub file_name: String,
    /// Number of data rows (header excluded)
    pub rows: usize,
    /// Header columns in order
    pub columns: Vec<String>,
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `finance_report` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All export functionality is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process;

use finance_report::export::{export_report, DirectorySink, StdoutSink};
use finance_report::initialization::init_logger_with;
use finance_report::input::load_records;
use finance_report::{Config, ExportSummary, LogFormat, ReportShape};

fn main() -> Result<()> {
    // .env may set FINANCE_REPORT_OUTPUT_DIR
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&config) {
        Ok(summary) => {
            print_summary(&config, &summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("finance_report error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<ExportSummary> {
    if config.report == ReportShape::Simple && config.fields.is_empty() {
        bail!("--fields is required for simple reports");
    }

    let records = load_records(&config.input, config.date_fields.as_slice())
        .with_context(|| format!("Failed to load records from {}", config.input.display()))?;

    let options = config.export_options();
    let fields = config.fields.as_slice();

    if config.stdout {
        return export_report(config.report, &records, &options, fields, &StdoutSink)
            .with_context(|| format!("Failed to export {}", config.input.display()));
    }

    // The sink only logs write failures; ask it afterwards so a failed write exits non-zero
    let sink = DirectorySink::new(&config.output_dir);
    let summary = export_report(config.report, &records, &options, fields, &sink)
        .with_context(|| format!("Failed to export {}", config.input.display()))?;
    if let Some(message) = sink.last_error() {
        bail!(message);
    }

    Ok(summary)
}

fn print_summary(config: &Config, summary: &ExportSummary) {
    let line = match config.log_format {
        LogFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
        LogFormat::Plain => format!(
            "Exported {} row{} ({} column{}) as {}",
            summary.rows,
            if summary.rows == 1 { "" } else { "s" },
            summary.columns.len(),
            if summary.columns.len() == 1 { "" } else { "s" },
            summary.file_name
        ),
    };
    // Keep stdout clean when the document itself goes there
    if config.stdout {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

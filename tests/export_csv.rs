//! Tests for CSV export and report generation.

use finance_report::export::{
    annotate_detailed, export_csv, export_csv_at, generate_detailed_report,
    generate_detailed_report_at, generate_simple_report, generate_simple_report_at,
    project_fields, CellValue, DirectorySink, ExportOptions, MemorySink, Record,
};
use finance_report::ExportError;
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{export_instant, parse_csv, sample_accounts, sample_transactions};

/// Cell text a CSV reader should recover for `value`.
fn expected_cell(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => s.clone(),
        other => other.encode(),
    }
}

#[test]
fn test_export_csv_round_trip() {
    let accounts = sample_accounts();
    let sink = MemorySink::new();

    export_csv_at(&accounts, &ExportOptions::new("accounts"), &sink, export_instant())
        .expect("export should succeed");

    let file = sink.last().expect("sink should receive a file");
    let (header, rows) = parse_csv(&file.contents);

    assert_eq!(header, ["id", "name", "institution", "balance", "type"]);
    assert_eq!(rows.len(), accounts.len());
    for (row, record) in rows.iter().zip(&accounts) {
        let expected: Vec<String> = record.iter().map(|(_, v)| expected_cell(v)).collect();
        assert_eq!(row, &expected);
    }
    assert_eq!(rows[2][1], "Brokerage \"Growth\"");
}

#[test]
fn test_export_csv_exact_document() {
    let sink = MemorySink::new();
    export_csv_at(
        &sample_transactions(),
        &ExportOptions::new("transactions"),
        &sink,
        export_instant(),
    )
    .unwrap();

    let file = sink.last().unwrap();
    assert_eq!(file.file_name, "transactions_2025-05-08.csv");
    assert_eq!(file.media_type, "text/csv;charset=utf-8");
    assert_eq!(
        file.contents,
        concat!(
            "id,title,amount,date,category,memo\n",
            "\"1\",\"Grocery Shopping\",-120.5,2025-05-08T00:00:00.000Z,\"Groceries\",\n",
            "\"2\",\"Salary Deposit\",3500,2025-05-01T00:00:00.000Z,\"Income\",\"May, net\"\n",
        )
    );
}

#[test]
fn test_empty_input_yields_no_data_everywhere() {
    let sink = MemorySink::new();
    let options = ExportOptions::new("accounts");

    assert_eq!(export_csv(&[], &options, &sink), Err(ExportError::NoData));
    assert_eq!(
        generate_simple_report(&[], &options, &["id"], &sink),
        Err(ExportError::NoData)
    );
    assert_eq!(
        generate_detailed_report(&[], &options, &sink),
        Err(ExportError::NoData)
    );
    assert!(sink.is_empty(), "no file may be produced for empty input");
}

#[test]
fn test_quote_escaping() {
    let records = vec![Record::new().with("note", "He said \"hi\"")];
    let sink = MemorySink::new();
    export_csv(&records, &ExportOptions::new("notes"), &sink).unwrap();
    assert_eq!(sink.last().unwrap().contents, "note\n\"He said \"\"hi\"\"\"\n");
}

#[test]
fn test_date_is_not_quoted() {
    let sink = MemorySink::new();
    export_csv(&sample_transactions(), &ExportOptions::new("tx"), &sink).unwrap();
    let contents = sink.last().unwrap().contents;
    let first_row = contents.lines().nth(1).unwrap();
    let date_cell = first_row.split(',').nth(3).unwrap();
    assert_eq!(date_cell, "2025-05-08T00:00:00.000Z");
}

#[test]
fn test_detailed_report_shares_one_timestamp() {
    let accounts = sample_accounts();
    assert_eq!(accounts.len(), 3);

    let annotated = annotate_detailed(&accounts, export_instant());
    let stamps: Vec<_> = annotated.iter().map(|r| r.get("exportedAt")).collect();
    assert!(stamps.iter().all(|s| *s == stamps[0]));
    assert!(annotated
        .iter()
        .all(|r| r.get("reportType") == Some(&CellValue::Text("Detailed".to_string()))));

    // Same invariant through the written document, using the wall clock
    let sink = MemorySink::new();
    generate_detailed_report(&accounts, &ExportOptions::new("accounts"), &sink).unwrap();
    let (header, rows) = parse_csv(&sink.last().unwrap().contents);
    assert_eq!(&header[header.len() - 2..], ["exportedAt", "reportType"]);
    let exported_at: Vec<_> = rows.iter().map(|r| r[5].clone()).collect();
    assert_eq!(exported_at.len(), 3);
    assert!(exported_at.iter().all(|s| *s == exported_at[0]));
    assert!(rows.iter().all(|r| r[6] == "Detailed"));
}

#[test]
fn test_simple_report_projection() {
    let records = vec![
        Record::new().with("id", "1").with("name", "A").with("balance", 10),
        Record::new().with("id", "2").with("name", "B").with("balance", 20),
    ];
    let projected = project_fields(&records, &["id", "balance"]);
    assert_eq!(
        projected,
        vec![
            Record::new().with("id", "1").with("balance", 10),
            Record::new().with("id", "2").with("balance", 20),
        ]
    );
}

#[test]
fn test_file_name_composition() {
    let sink = MemorySink::new();
    let options = ExportOptions::new("accounts").include_timestamp(true);

    let simple =
        generate_simple_report_at(&sample_accounts(), &options, &["id"], &sink, export_instant())
            .unwrap();
    let detailed =
        generate_detailed_report_at(&sample_accounts(), &options, &sink, export_instant())
            .unwrap();

    assert_eq!(simple.file_name, "accounts_simple_2025-05-08.csv");
    assert_eq!(detailed.file_name, "accounts_detailed_2025-05-08.csv");
}

#[test]
fn test_heterogeneous_rows_follow_first_record() {
    let records = vec![
        Record::new().with("a", 1).with("b", 2),
        Record::new().with("a", 3),
    ];
    let sink = MemorySink::new();
    let summary = export_csv(&records, &ExportOptions::new("h"), &sink).unwrap();

    assert_eq!(summary.columns, ["a", "b"]);
    let contents = sink.last().unwrap().contents;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, ["a,b", "1,2", "3,"]);
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_extra_fields_after_first_record_are_dropped() {
    let records = vec![
        Record::new().with("a", 1),
        Record::new().with("a", 2).with("b", "lost"),
    ];
    let sink = MemorySink::new();
    export_csv(&records, &ExportOptions::new("h"), &sink).unwrap();
    assert_eq!(sink.last().unwrap().contents, "a\n1\n2\n");
}

#[test]
fn test_export_to_directory_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let sink = DirectorySink::new(temp_dir.path());

    let summary = generate_simple_report_at(
        &sample_accounts(),
        &ExportOptions::new("accounts"),
        &["name", "balance"],
        &sink,
        export_instant(),
    )
    .expect("export should succeed");

    let path = temp_dir.path().join("accounts_simple_2025-05-08.csv");
    assert_eq!(summary.file_name, "accounts_simple_2025-05-08.csv");
    let written = std::fs::read_to_string(&path).expect("Failed to read exported file");
    assert_eq!(
        written,
        "name,balance\n\"Main Checking\",4250.75\n\"Emergency Fund\",12000\n\"Brokerage \"\"Growth\"\"\",35820.4\n"
    );
}

#[test]
fn test_blocked_output_dir_is_reported_by_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "x").expect("Failed to create blocker file");
    let sink = DirectorySink::new(blocker.join("sub"));

    // The export itself succeeds; the write failure is the sink's to report
    let summary = generate_detailed_report_at(
        &sample_accounts(),
        &ExportOptions::new("accounts"),
        &sink,
        export_instant(),
    )
    .expect("export should hand the document to the sink");

    assert_eq!(summary.file_name, "accounts_detailed_2025-05-08.csv");
    let message = sink.last_error().expect("write failure should be recorded");
    assert!(message.contains("accounts_detailed_2025-05-08.csv"));
}

#[test]
fn test_file_name_cannot_leave_output_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("out");
    let sink = DirectorySink::new(&out_dir);

    export_csv_at(
        &sample_accounts(),
        &ExportOptions::new("../escaped").include_timestamp(false),
        &sink,
        export_instant(),
    )
    .expect("export should hand the document to the sink");

    assert!(!temp_dir.path().join("escaped.csv").exists());
    assert_eq!(sink.failures().len(), 1);
}

#[test]
fn test_concurrent_exports_are_independent() {
    let sink = MemorySink::new();
    std::thread::scope(|scope| {
        for name in ["a", "b", "c", "d"] {
            let sink = &sink;
            scope.spawn(move || {
                let records = vec![Record::new().with("name", name)];
                export_csv(&records, &ExportOptions::new(name).include_timestamp(false), sink)
                    .unwrap();
            });
        }
    });

    let mut files = sink.files();
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["a.csv", "b.csv", "c.csv", "d.csv"]);
    assert_eq!(files[2].contents, "name\n\"c\"\n");
}

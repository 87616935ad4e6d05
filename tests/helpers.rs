// Shared test fixtures for the export integration tests.
//
// Records mirror the dashboard's accounts and transactions collections.

use chrono::{DateTime, TimeZone, Utc};

use finance_report::export::Record;

/// Fixed export instant: 2025-05-08 14:20:00 UTC.
#[allow(dead_code)] // Used by other test files
pub fn export_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 8, 14, 20, 0).unwrap()
}

/// Three bank accounts with uniform fields.
#[allow(dead_code)] // Used by other test files
pub fn sample_accounts() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", "1")
            .with("name", "Main Checking")
            .with("institution", "Chase Bank")
            .with("balance", 4250.75)
            .with("type", "checking"),
        Record::new()
            .with("id", "2")
            .with("name", "Emergency Fund")
            .with("institution", "Ally Bank")
            .with("balance", 12000.0)
            .with("type", "savings"),
        Record::new()
            .with("id", "3")
            .with("name", "Brokerage \"Growth\"")
            .with("institution", "Vanguard")
            .with("balance", 35820.4)
            .with("type", "investment"),
    ]
}

/// Transactions with real dates and a null memo.
#[allow(dead_code)] // Used by other test files
pub fn sample_transactions() -> Vec<Record> {
    vec![
        Record::new()
            .with("id", "1")
            .with("title", "Grocery Shopping")
            .with("amount", -120.5)
            .with("date", Utc.with_ymd_and_hms(2025, 5, 8, 0, 0, 0).unwrap())
            .with("category", "Groceries")
            .with("memo", None::<String>),
        Record::new()
            .with("id", "2")
            .with("title", "Salary Deposit")
            .with("amount", 3500)
            .with("date", Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap())
            .with("category", "Income")
            .with("memo", "May, net"),
    ]
}

/// Splits a CSV document into header and rows with the `csv` crate.
#[allow(dead_code)] // Used by other test files
pub fn parse_csv(contents: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let header = reader
        .headers()
        .expect("Failed to read header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("Failed to read row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

//! CSV Export functionality
//!
//! Exports expense or income records to a spreadsheet-compatible CSV.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::FintrackResult;
use crate::models::{GroupField, Transaction};

/// Column headers, in order
pub const TRANSACTION_HEADERS: [&str; 7] = [
    "Date",
    "Title",
    "Category",
    "Amount",
    "Payment Method",
    "Description",
    "Status",
];

/// Whether a record has happened yet as of the reference date
fn status_of(txn: &Transaction, reference: NaiveDate) -> &'static str {
    match txn.calendar_date() {
        Some(date) if date > reference => "Scheduled",
        _ => "Completed",
    }
}

fn date_cell(txn: &Transaction) -> String {
    match txn.calendar_date() {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => txn.date.raw().to_string(),
    }
}

/// Export records to CSV, one row per record in input order.
///
/// `field` picks the classification shown in the Category column: the
/// spending category for expenses, the source for incomes.
pub fn export_transactions_csv<'a, W, I>(
    records: I,
    field: GroupField,
    reference: NaiveDate,
    writer: W,
) -> FintrackResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TRANSACTION_HEADERS)?;

    let mut rows = 0;
    for txn in records {
        let amount = txn.amount.format_plain();
        csv_writer.write_record([
            date_cell(txn).as_str(),
            txn.title.as_str(),
            field.label_of(txn).as_str(),
            amount.as_str(),
            txn.payment_method.as_deref().unwrap_or(""),
            txn.description.as_deref().unwrap_or(""),
            status_of(txn, reference),
        ])?;
        rows += 1;
    }

    csv_writer.flush()?;
    tracing::debug!(rows, "exported transactions to CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn export(records: &[Transaction], field: GroupField) -> String {
        let mut buffer = Vec::new();
        export_transactions_csv(records, field, date(2025, 3, 10), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            Transaction::expense("Lunch", Money::from_cents(1250), "groceries", date(2025, 3, 2))
                .with_payment_method("Card")
                .with_description("with team"),
            Transaction::expense("Concert", Money::from_cents(8000), "Fun", date(2025, 4, 1)),
        ];

        let csv = export(&records, GroupField::Category);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Date,Title,Category,Amount,Payment Method,Description,Status"
        );
        assert_eq!(lines[1], "2025-03-02,Lunch,Food,12.50,Card,with team,Completed");
        assert_eq!(lines[2], "2025-04-01,Concert,Entertainment,80.00,,,Scheduled");
    }

    #[test]
    fn test_fields_are_quoted() {
        let records = vec![Transaction::expense(
            "Rent, March",
            Money::from_cents(100000),
            "Rent",
            date(2025, 3, 1),
        )
        .with_description("said \"thanks\"")];

        let csv = export(&records, GroupField::Category);
        assert!(csv.contains("\"Rent, March\""));
        assert!(csv.contains("\"said \"\"thanks\"\"\""));
    }

    #[test]
    fn test_income_source_and_raw_dates() {
        let records = vec![Transaction::income(
            "Pay",
            Money::from_cents(300000),
            "Salary",
            RecordDate::parse("end of month"),
        )];
        let csv = export(&records, GroupField::Source);
        assert!(csv.contains("end of month,Pay,Salary,3000.00,,,Completed"));
    }

    #[test]
    fn test_returns_row_count() {
        let mut buffer = Vec::new();
        let records: Vec<Transaction> = Vec::new();
        let rows =
            export_transactions_csv(&records, GroupField::Category, date(2025, 3, 10), &mut buffer)
                .unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}

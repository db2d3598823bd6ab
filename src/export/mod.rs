//! Export module for fintrack
//!
//! - CSV: expense or income records (spreadsheet-compatible)
//! - JSON: a computed dashboard report, machine-readable
//! - YAML: the same report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, TRANSACTION_HEADERS};
pub use json::{export_report_json, MetricsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

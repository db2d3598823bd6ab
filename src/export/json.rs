//! JSON Export functionality
//!
//! Exports a computed dashboard as a versioned, machine-readable report.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::FintrackResult;
use crate::metrics::DashboardSummary;

/// Current report schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A dashboard wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    pub app_version: &'static str,
    pub dashboard: &'a DashboardSummary,
}

impl<'a> MetricsExport<'a> {
    pub fn new(dashboard: &'a DashboardSummary) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            dashboard,
        }
    }
}

/// Export a dashboard as pretty-printed JSON
pub fn export_report_json<W: Write>(
    dashboard: &DashboardSummary,
    writer: &mut W,
) -> FintrackResult<()> {
    let export = MetricsExport::new(dashboard);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

//! YAML Export functionality
//!
//! Exports a computed dashboard as a human-readable YAML report.

use std::io::Write;

use crate::error::FintrackResult;
use crate::export::json::MetricsExport;
use crate::metrics::DashboardSummary;

/// Export a dashboard as YAML with a short header comment
pub fn export_report_yaml<W: Write>(
    dashboard: &DashboardSummary,
    writer: &mut W,
) -> FintrackResult<()> {
    let export = MetricsExport::new(dashboard);

    writeln!(writer, "# fintrack metrics report")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# Period: {}", dashboard.period)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{compute_dashboard, DashboardRequest};
    use crate::models::PeriodSelector;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let request = DashboardRequest::new(PeriodSelector::LastMonth, reference);
        let dashboard = compute_dashboard(&[], &[], &[], &[], &request);

        let mut buffer = Vec::new();
        export_report_yaml(&dashboard, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# fintrack metrics report"));
        assert!(yaml.contains("# Period: Last Month"));
        assert!(yaml.contains("schemaVersion:"));
        assert!(yaml.contains("period: Last Month"));
    }
}

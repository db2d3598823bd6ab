//! CLI commands for data export
//!
//! Writes period records as CSV or the computed dashboard as JSON/YAML.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::context::CliContext;
use super::report::RecordKind;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_report_json, export_report_yaml, export_transactions_csv};
use crate::metrics::{compute_dashboard, filter_by_period, DashboardRequest};
use crate::models::PeriodSelector;

/// Report file formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// JSON with export metadata
    Json,
    /// YAML, human-readable
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export a period's records to CSV
    Csv {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "expenses")]
        kind: RecordKind,

        #[arg(short, long)]
        period: Option<PeriodSelector>,
    },

    /// Export the dashboard for a period
    Report {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportFormat,

        #[arg(short, long)]
        period: Option<PeriodSelector>,
    },
}

fn create_output(output: &Path) -> FintrackResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        FintrackError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle export commands
pub fn handle_export_command(ctx: &CliContext, cmd: ExportCommands) -> FintrackResult<()> {
    let snapshot = ctx.load_records()?;
    let reference = ctx.reference_date;

    match cmd {
        ExportCommands::Csv {
            output,
            kind,
            period,
        } => {
            let period = ctx.period_or_default(period);
            let matched = filter_by_period(kind.records(&snapshot), period, reference);

            let mut writer = create_output(&output)?;
            let rows = export_transactions_csv(
                matched.iter().copied(),
                kind.group_field(),
                reference,
                &mut writer,
            )?;
            writer.flush()?;

            println!(
                "Exported {} {} ({}) to: {}",
                rows,
                kind.title().to_lowercase(),
                period,
                output.display()
            );
        }
        ExportCommands::Report {
            output,
            format,
            period,
        } => {
            let request = DashboardRequest::new(ctx.period_or_default(period), reference)
                .with_trend_months(ctx.settings.trend_months);
            let summary = compute_dashboard(
                &snapshot.expenses,
                &snapshot.incomes,
                &snapshot.budgets,
                &snapshot.goals,
                &request,
            );

            let mut writer = create_output(&output)?;
            match format {
                ReportFormat::Json => export_report_json(&summary, &mut writer)?,
                ReportFormat::Yaml => export_report_yaml(&summary, &mut writer)?,
            }
            writer.flush()?;

            println!("Report ({}) exported to: {}", summary.period, output.display());
        }
    }

    Ok(())
}

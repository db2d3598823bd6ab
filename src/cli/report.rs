//! CLI commands for metric reports
//!
//! Each command loads the snapshot, computes one group of metrics and prints
//! it as a terminal table or as JSON/YAML.

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

use super::context::CliContext;
use crate::error::FintrackResult;
use crate::metrics::{
    compute_budget_metrics, compute_category_breakdown, compute_category_budgets,
    compute_dashboard, compute_goal_status, compute_monthly_trend, compute_period_totals,
    filter_by_period, DashboardRequest,
};
use crate::metrics::dashboard::MAX_TREND_MONTHS;
use crate::models::{GroupField, PeriodSelector, Transaction};
use crate::reports::{
    format_breakdown, format_budget_overview, format_dashboard, format_goals, format_totals,
    format_trend,
};
use crate::storage::Snapshot;

/// How a report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Which collection a command works on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    #[default]
    Expenses,
    Incomes,
}

impl RecordKind {
    pub fn records<'a>(&self, snapshot: &'a Snapshot) -> &'a [Transaction] {
        match self {
            Self::Expenses => &snapshot.expenses,
            Self::Incomes => &snapshot.incomes,
        }
    }

    pub fn group_field(&self) -> GroupField {
        match self {
            Self::Expenses => GroupField::Category,
            Self::Incomes => GroupField::Source,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Incomes => "Income",
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show every metric for a period
    #[command(alias = "dash")]
    Dashboard {
        /// Reporting period (e.g. "this-month", "last-3-months", "all")
        #[arg(short, long)]
        period: Option<PeriodSelector>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Period total compared with the previous period
    Totals {
        #[arg(short, long, value_enum, default_value = "expenses")]
        kind: RecordKind,

        #[arg(short, long)]
        period: Option<PeriodSelector>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Totals grouped by category (expenses) or source (incomes)
    Breakdown {
        #[arg(short, long, value_enum, default_value = "expenses")]
        kind: RecordKind,

        #[arg(short, long)]
        period: Option<PeriodSelector>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Spending against budgets
    Budget {
        #[arg(short, long)]
        period: Option<PeriodSelector>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Progress towards savings goals
    Goals {
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Spending per calendar month
    Trend {
        /// Number of months, ending with the current one
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_TREND_MONTHS as i64))]
        months: Option<u32>,

        #[arg(short, long, value_enum, default_value = "expenses")]
        kind: RecordKind,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Print `value` in the requested format; `table` renders the terminal form
fn emit<T, F>(value: &T, format: OutputFormat, table: F) -> FintrackResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Table => print!("{}", table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

/// Handle report commands
pub fn handle_report_command(ctx: &CliContext, cmd: ReportCommands) -> FintrackResult<()> {
    let snapshot = ctx.load_records()?;
    let reference = ctx.reference_date;
    let symbol = ctx.currency_symbol();

    match cmd {
        ReportCommands::Dashboard { period, format } => {
            let request = DashboardRequest::new(ctx.period_or_default(period), reference)
                .with_trend_months(ctx.settings.trend_window());
            let summary = compute_dashboard(
                &snapshot.expenses,
                &snapshot.incomes,
                &snapshot.budgets,
                &snapshot.goals,
                &request,
            );
            emit(&summary, format, || format_dashboard(&summary, symbol))
        }
        ReportCommands::Totals {
            kind,
            period,
            format,
        } => {
            let totals =
                compute_period_totals(kind.records(&snapshot), ctx.period_or_default(period), reference);
            emit(&totals, format, || format_totals(kind.title(), &totals, symbol))
        }
        ReportCommands::Breakdown {
            kind,
            period,
            format,
        } => {
            let period = ctx.period_or_default(period);
            let matched = filter_by_period(kind.records(&snapshot), period, reference);
            let groups = compute_category_breakdown(matched.iter().copied(), kind.group_field());
            let title = format!("{} by {} ({})", kind.title(), kind.group_field_label(), period);
            emit(&groups, format, || format_breakdown(&title, &groups, symbol))
        }
        ReportCommands::Budget { period, format } => {
            let period = ctx.period_or_default(period);
            let matched = filter_by_period(&snapshot.expenses, period, reference);
            let overall = compute_budget_metrics(&snapshot.budgets, matched.iter().copied());
            let rows = compute_category_budgets(&snapshot.budgets, &matched, reference);

            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct BudgetReport<'a> {
                period: PeriodSelector,
                #[serde(flatten)]
                overall: &'a crate::metrics::BudgetMetrics,
                categories: &'a [crate::metrics::CategoryBudgetMetrics],
            }

            let report = BudgetReport {
                period,
                overall: &overall,
                categories: &rows,
            };
            emit(&report, format, || format_budget_overview(&overall, &rows, symbol))
        }
        ReportCommands::Goals { format } => {
            let statuses: Vec<_> = snapshot
                .goals
                .iter()
                .map(|goal| compute_goal_status(goal, reference))
                .collect();
            emit(&statuses, format, || format_goals(&statuses, symbol))
        }
        ReportCommands::Trend {
            months,
            kind,
            format,
        } => {
            let months = months.unwrap_or_else(|| ctx.settings.trend_window());
            let points = compute_monthly_trend(kind.records(&snapshot), months, reference);
            emit(&points, format, || format_trend(&points, symbol))
        }
    }
}

impl RecordKind {
    fn group_field_label(&self) -> &'static str {
        match self.group_field() {
            GroupField::Category => "category",
            GroupField::Source => "source",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RecordDate};

    #[test]
    fn test_record_kind_selects_collection() {
        let snapshot = Snapshot {
            incomes: vec![Transaction::income(
                "Pay",
                Money::from_cents(100),
                "Salary",
                RecordDate::parse("2025-03-01"),
            )],
            ..Snapshot::default()
        };
        assert!(RecordKind::Expenses.records(&snapshot).is_empty());
        assert_eq!(RecordKind::Incomes.records(&snapshot).len(), 1);
        assert_eq!(RecordKind::Incomes.group_field(), GroupField::Source);
    }
}

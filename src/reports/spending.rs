//! Spending and income reports
//!
//! Terminal rendering of period totals and category/source breakdowns.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::display::{format_bar, format_change, format_percentage, truncate};
use crate::metrics::{CategoryBreakdown, PeriodTotals};
use crate::models::PeriodSelector;

const NAME_WIDTH: usize = 28;
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "%")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format period totals for terminal display
pub fn format_totals(title: &str, totals: &PeriodTotals, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", title, totals.period));
    output.push_str(&format!(
        "  Current:    {:>14}  ({} transactions)\n",
        totals.current_total.format_with_symbol(symbol),
        totals.transaction_count
    ));
    if totals.period != PeriodSelector::AllTime {
        output.push_str(&format!(
            "  Previous:   {:>14}\n",
            totals.comparison_total.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Change:     {:>14}\n",
            format_change(totals.percentage_change)
        ));
    }

    output
}

/// Format a breakdown as a table, largest group first
pub fn format_breakdown(title: &str, groups: &[CategoryBreakdown], symbol: &str) -> String {
    if groups.is_empty() {
        return format!("{}\n  No transactions in this period.\n", title);
    }

    let largest = groups
        .iter()
        .map(|g| g.percentage_of_grand_total)
        .fold(0.0_f64, f64::max);

    let rows: Vec<BreakdownRow> = groups
        .iter()
        .map(|group| BreakdownRow {
            name: truncate(&group.name, NAME_WIDTH),
            amount: group.total_amount.format_with_symbol(symbol),
            count: group.transaction_count,
            share: format_percentage(group.percentage_of_grand_total),
            bar: format_bar(group.percentage_of_grand_total, largest, BAR_WIDTH),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    format!("{}\n{}\n", title, table)
}

//! Budget Overview Report
//!
//! Overall budget utilization followed by one row per category budget.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::display::{format_money_colored, format_percentage, status_marker, truncate};
use crate::metrics::{BudgetMetrics, CategoryBudgetMetrics};

#[derive(Tabled)]
struct CategoryBudgetRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    amount: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Per day")]
    daily: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format budget metrics for terminal display
pub fn format_budget_overview(
    overall: &BudgetMetrics,
    categories: &[CategoryBudgetMetrics],
    symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget: {} of {} spent ({}), {} remaining [{}]\n",
        overall.spent_this_period.format_with_symbol(symbol),
        overall.total_budget.format_with_symbol(symbol),
        format_percentage(overall.percentage_used),
        format_money_colored(overall.remaining, symbol),
        overall.status
    ));

    if categories.is_empty() {
        output.push_str("  No category budgets set.\n");
        return output;
    }

    let rows: Vec<CategoryBudgetRow> = categories
        .iter()
        .map(|row| CategoryBudgetRow {
            marker: status_marker(row.status),
            category: truncate(&row.category, 24),
            amount: row.amount.format_with_symbol(symbol),
            spent: row.spent.format_with_symbol(symbol),
            remaining: row.remaining.format_with_symbol(symbol),
            used: format_percentage(row.percentage_used),
            daily: format!(
                "{} / {}",
                row.daily_spent.format_with_symbol(symbol),
                row.daily_budget.format_with_symbol(symbol)
            ),
            status: if row.is_over_budget {
                "Over budget".to_string()
            } else {
                row.status.to_string()
            },
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(2..7)).with(Alignment::right()))
        .to_string();

    output.push_str(&table);
    output.push('\n');

    let near_limit = categories
        .iter()
        .filter(|c| c.is_near_limit && !c.is_over_budget)
        .count();
    if near_limit > 0 {
        output.push_str(&format!("{} budget(s) near the limit\n", near_limit));
    }

    output
}

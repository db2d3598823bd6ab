//! Dashboard report
//!
//! The whole dashboard in one screen: totals, savings, breakdowns, budgets,
//! goals and the spending trend.

use super::budget_overview::format_budget_overview;
use super::goals::format_goals;
use super::spending::{format_breakdown, format_totals};
use super::trend::format_trend;
use crate::display::{double_separator, format_money_colored, format_percentage, separator};
use crate::metrics::DashboardSummary;

const WIDTH: usize = 80;

/// Format the dashboard for terminal display
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Dashboard: {} (as of {})\n",
        summary.period,
        summary.reference_date.format("%Y-%m-%d")
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format_totals("Expenses", &summary.expenses, symbol));
    output.push_str(&format_totals("Income", &summary.incomes, symbol));
    output.push_str(&format!(
        "Net savings: {} (savings rate {})\n",
        format_money_colored(summary.net_savings, symbol),
        format_percentage(summary.savings_rate)
    ));
    output.push_str(&format!(
        "Average daily spend: {}\n",
        summary.daily_average_spend.format_with_symbol(symbol)
    ));

    for section in [
        format_breakdown("Spending by category", &summary.expense_breakdown, symbol),
        format_breakdown("Income by source", &summary.income_breakdown, symbol),
        format_budget_overview(&summary.budget, &summary.category_budgets, symbol),
        format_goals(&summary.goals, symbol),
        format_trend(&summary.expense_trend, symbol),
    ] {
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&section);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{compute_dashboard, DashboardRequest};
    use crate::models::{Budget, Goal, Money, PeriodSelector, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_format_dashboard_sections() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let expenses = vec![Transaction::expense(
            "Groceries",
            Money::from_cents(4500),
            "Food",
            reference,
        )];
        let incomes = vec![Transaction::income(
            "Pay",
            Money::from_cents(100000),
            "Salary",
            reference,
        )];
        let budgets = vec![Budget::new("Food", Money::from_cents(10000))];
        let goals = vec![Goal::new("Bike", Money::from_cents(50000), reference)];
        let request = DashboardRequest::new(PeriodSelector::ThisMonth, reference);
        let summary = compute_dashboard(&expenses, &incomes, &budgets, &goals, &request);

        let output = format_dashboard(&summary, "$");

        assert!(output.starts_with("Dashboard: This Month (as of 2025-03-10)"));
        assert!(output.contains("Spending by category"));
        assert!(output.contains("Income by source"));
        assert!(output.contains("Budget: $45.00 of $100.00 spent (45.0%)"));
        assert!(output.contains("Goals"));
        assert!(output.contains("Monthly spending"));
        assert!(output.contains("savings rate 95.5%"));
    }
}

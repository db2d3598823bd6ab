//! Budget utilization
//!
//! Overall and per-category spend against budget limits, with a status
//! derived from fixed thresholds.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::{divide_money, percent_of, sum_amounts};
use crate::models::period::days_in_month;
use crate::models::{Budget, BudgetId, Money, Transaction};

/// Usage at or above this percentage is Critical
pub const CRITICAL_THRESHOLD: f64 = 90.0;
/// Usage at or above this percentage (and below Critical) is Warning
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Per-category usage at or above this percentage is flagged near the limit
pub const NEAR_LIMIT_THRESHOLD: f64 = 80.0;

/// Traffic-light status of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    Warning,
    Critical,
}

impl BudgetStatus {
    pub fn from_percentage(percentage_used: f64) -> Self {
        if percentage_used >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if percentage_used >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spend against the sum of all budgets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMetrics {
    pub total_budget: Money,
    pub spent_this_period: Money,
    /// Negative when overspent
    pub remaining: Money,
    pub percentage_used: f64,
    pub status: BudgetStatus,
}

/// Spend against a single category's budget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudgetMetrics {
    pub budget_id: BudgetId,
    /// Display label of the budget's category
    pub category: String,
    pub amount: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percentage_used: f64,
    pub status: BudgetStatus,
    /// The budget spread evenly over the days of the reference month
    pub daily_budget: Money,
    /// Spend so far divided by the day of month of the reference date
    pub daily_spent: Money,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
}

/// Compare total budget with total spend for the period.
///
/// `period_expenses` should already be filtered to the period of interest.
pub fn compute_budget_metrics<'a, I>(budgets: &[Budget], period_expenses: I) -> BudgetMetrics
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let total_budget: Money = budgets.iter().map(|b| b.amount).sum();
    let spent_this_period = sum_amounts(period_expenses);
    let percentage_used = percent_of(spent_this_period, total_budget);

    BudgetMetrics {
        total_budget,
        spent_this_period,
        remaining: total_budget - spent_this_period,
        percentage_used,
        status: BudgetStatus::from_percentage(percentage_used),
    }
}

/// Compare one budget with the expenses in its category.
///
/// Expenses match when their classified category has the same key as the
/// budget's, so "Groceries" spending counts against a "Food" budget.
pub fn compute_category_budget<'a, I>(
    budget: &Budget,
    period_expenses: I,
    reference: NaiveDate,
) -> CategoryBudgetMetrics
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let category = budget.expense_category();
    let key = category.key();
    let spent = sum_amounts(
        period_expenses
            .into_iter()
            .filter(|txn| txn.expense_category().key() == key),
    );
    let percentage_used = percent_of(spent, budget.amount);

    CategoryBudgetMetrics {
        budget_id: budget.id.clone(),
        category: category.label().to_string(),
        amount: budget.amount,
        spent,
        remaining: budget.amount - spent,
        percentage_used,
        status: BudgetStatus::from_percentage(percentage_used),
        daily_budget: divide_money(budget.amount, i64::from(days_in_month(reference))),
        daily_spent: divide_money(spent, i64::from(reference.day())),
        is_over_budget: spent > budget.amount,
        is_near_limit: percentage_used >= NEAR_LIMIT_THRESHOLD,
    }
}

/// Per-category metrics for every budget, in budget order
pub fn compute_category_budgets(
    budgets: &[Budget],
    period_expenses: &[&Transaction],
    reference: NaiveDate,
) -> Vec<CategoryBudgetMetrics> {
    budgets
        .iter()
        .map(|budget| compute_category_budget(budget, period_expenses.iter().copied(), reference))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::expense("test", Money::from_cents(cents), category, date(2025, 4, 3))
    }

    #[test]
    fn test_critical_at_ninety_percent() {
        let budgets = vec![Budget::new("Food", Money::from_cents(30000))];
        let expenses = vec![expense(20000, "Food"), expense(7000, "Food")];

        let metrics = compute_budget_metrics(&budgets, &expenses);

        assert_eq!(metrics.total_budget, Money::from_cents(30000));
        assert_eq!(metrics.spent_this_period, Money::from_cents(27000));
        assert_eq!(metrics.percentage_used, 90.0);
        assert_eq!(metrics.status, BudgetStatus::Critical);
        assert_eq!(metrics.remaining, Money::from_cents(3000));
    }

    #[test]
    fn test_zero_budget_is_on_track() {
        let expenses = vec![expense(5000, "Food")];
        let metrics = compute_budget_metrics(&[], &expenses);
        assert_eq!(metrics.percentage_used, 0.0);
        assert_eq!(metrics.status, BudgetStatus::OnTrack);
        assert_eq!(metrics.remaining, Money::from_cents(-5000));
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(BudgetStatus::from_percentage(74.9), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::from_percentage(75.0), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_percentage(89.9), BudgetStatus::Warning);
        assert_eq!(BudgetStatus::from_percentage(90.0), BudgetStatus::Critical);
        assert_eq!(BudgetStatus::from_percentage(250.0), BudgetStatus::Critical);
    }

    #[test]
    fn test_overspend_is_not_clamped() {
        let budgets = vec![Budget::new("Food", Money::from_cents(10000))];
        let expenses = vec![expense(15000, "Food")];
        let metrics = compute_budget_metrics(&budgets, &expenses);
        assert_eq!(metrics.remaining, Money::from_cents(-5000));
        assert_eq!(metrics.percentage_used, 150.0);
    }

    #[test]
    fn test_category_budget_scopes_to_category() {
        let budget = Budget::new("Food", Money::from_cents(31000));
        let expenses = vec![
            expense(12000, "Groceries"),
            expense(8800, "Food"),
            expense(50000, "Rent"),
        ];

        let metrics = compute_category_budget(&budget, &expenses, date(2025, 3, 10));

        assert_eq!(metrics.category, "Food");
        assert_eq!(metrics.spent, Money::from_cents(20800));
        assert_eq!(metrics.remaining, Money::from_cents(10200));
        assert_eq!(metrics.percentage_used, 67.1);
        assert_eq!(metrics.status, BudgetStatus::OnTrack);
        // March has 31 days
        assert_eq!(metrics.daily_budget, Money::from_cents(1000));
        assert_eq!(metrics.daily_spent, Money::from_cents(2080));
        assert!(!metrics.is_over_budget);
        assert!(!metrics.is_near_limit);
    }

    #[test]
    fn test_category_budget_flags() {
        let budget = Budget::new("Travel", Money::from_cents(10000));

        let near = compute_category_budget(&budget, &vec![expense(8000, "Travel")], date(2025, 2, 1));
        assert!(near.is_near_limit);
        assert!(!near.is_over_budget);
        assert_eq!(near.status, BudgetStatus::Warning);

        let over = compute_category_budget(&budget, &vec![expense(10001, "Travel")], date(2025, 2, 1));
        assert!(over.is_over_budget);
        assert_eq!(over.status, BudgetStatus::Critical);
    }

    #[test]
    fn test_zero_category_budget() {
        let budget = Budget::new("Gifts", Money::zero());
        let metrics = compute_category_budget(&budget, &vec![expense(500, "Gifts")], date(2025, 2, 1));
        assert_eq!(metrics.percentage_used, 0.0);
        assert!(metrics.is_over_budget);
        assert!(metrics.daily_budget.is_zero());
    }

    #[test]
    fn test_category_budgets_follow_budget_order() {
        let budgets = vec![
            Budget::new("Travel", Money::from_cents(100)),
            Budget::new("Food", Money::from_cents(100)),
        ];
        let expenses = vec![expense(50, "Food")];
        let refs: Vec<&Transaction> = expenses.iter().collect();
        let rows = compute_category_budgets(&budgets, &refs, date(2025, 2, 1));
        assert_eq!(rows[0].category, "Travel");
        assert_eq!(rows[1].spent, Money::from_cents(50));
    }
}

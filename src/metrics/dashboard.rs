//! The dashboard: every metric for one period in a single pass

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    compute_budget_metrics, compute_category_breakdown, compute_category_budgets,
    compute_daily_average, compute_goal_status, compute_monthly_trend, compute_period_totals,
    filter_by_period, percent_of, BudgetMetrics, CategoryBreakdown, CategoryBudgetMetrics,
    GoalStatus, MonthlyTrendPoint, PeriodTotals, PERCENT_CHANGE_LIMIT,
};
use crate::models::{Budget, Goal, GroupField, Money, PeriodSelector, Transaction};

/// Months shown in the expense trend unless configured otherwise
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Longest trend the CLI and settings accept
pub const MAX_TREND_MONTHS: u32 = 120;

/// Parameters for [`compute_dashboard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequest {
    pub period: PeriodSelector,
    pub reference_date: NaiveDate,
    pub trend_months: u32,
}

impl DashboardRequest {
    pub fn new(period: PeriodSelector, reference_date: NaiveDate) -> Self {
        Self {
            period,
            reference_date,
            trend_months: DEFAULT_TREND_MONTHS,
        }
    }

    pub fn with_trend_months(mut self, months: u32) -> Self {
        self.trend_months = months;
        self
    }
}

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub period: PeriodSelector,
    pub reference_date: NaiveDate,
    pub expenses: PeriodTotals,
    pub incomes: PeriodTotals,
    /// Income minus expenses for the selected period
    pub net_savings: Money,
    /// Net savings as a share of income; 0 without income
    pub savings_rate: f64,
    pub expense_breakdown: Vec<CategoryBreakdown>,
    pub income_breakdown: Vec<CategoryBreakdown>,
    pub budget: BudgetMetrics,
    pub category_budgets: Vec<CategoryBudgetMetrics>,
    pub goals: Vec<GoalStatus>,
    pub daily_average_spend: Money,
    pub expense_trend: Vec<MonthlyTrendPoint>,
}

/// Compute the full dashboard for `request.period`
pub fn compute_dashboard(
    expenses: &[Transaction],
    incomes: &[Transaction],
    budgets: &[Budget],
    goals: &[Goal],
    request: &DashboardRequest,
) -> DashboardSummary {
    let period = request.period;
    let reference = request.reference_date;

    let expense_totals = compute_period_totals(expenses, period, reference);
    let income_totals = compute_period_totals(incomes, period, reference);

    let period_expenses = filter_by_period(expenses, period, reference);
    let period_incomes = filter_by_period(incomes, period, reference);

    let net_savings = income_totals.current_total - expense_totals.current_total;
    let savings_rate = percent_of(net_savings, income_totals.current_total)
        .clamp(-PERCENT_CHANGE_LIMIT, PERCENT_CHANGE_LIMIT);

    tracing::debug!(
        period = %period,
        expenses = expenses.len(),
        incomes = incomes.len(),
        budgets = budgets.len(),
        goals = goals.len(),
        "computing dashboard"
    );

    DashboardSummary {
        period,
        reference_date: reference,
        net_savings,
        savings_rate,
        expense_breakdown: compute_category_breakdown(
            period_expenses.iter().copied(),
            GroupField::Category,
        ),
        income_breakdown: compute_category_breakdown(
            period_incomes.iter().copied(),
            GroupField::Source,
        ),
        budget: compute_budget_metrics(budgets, period_expenses.iter().copied()),
        category_budgets: compute_category_budgets(budgets, &period_expenses, reference),
        goals: goals
            .iter()
            .map(|goal| compute_goal_status(goal, reference))
            .collect(),
        daily_average_spend: compute_daily_average(expenses, period, reference),
        expense_trend: compute_monthly_trend(expenses, request.trend_months, reference),
        expenses: expense_totals,
        incomes: income_totals,
    }
}

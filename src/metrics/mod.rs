//! Derived metrics over transaction snapshots
//!
//! Every function in this module is a pure computation over borrowed records:
//! no IO, no state, and no error path. Malformed records have already been
//! degraded during deserialization (zero amounts, dateless records), and
//! every division by a quantity that may be zero is defined to yield zero.
//!
//! Amounts are `Money` (exact cents). Percentages are `f64` rounded half-up to
//! one decimal place.

pub mod breakdown;
pub mod budget;
pub mod dashboard;
pub mod goal;
pub mod totals;
pub mod trend;

pub use breakdown::{compute_category_breakdown, CategoryBreakdown};
pub use budget::{
    compute_budget_metrics, compute_category_budget, compute_category_budgets, BudgetMetrics,
    BudgetStatus, CategoryBudgetMetrics,
};
pub use dashboard::{compute_dashboard, DashboardRequest, DashboardSummary};
pub use goal::{compute_goal_progress, compute_goal_status, GoalProgress, GoalStatus};
pub use totals::{compute_period_totals, filter_by_period, sum_amounts, PeriodTotals};
pub use trend::{compute_daily_average, compute_monthly_trend, MonthlyTrendPoint};

use crate::models::Money;

/// Bound applied to period-over-period percentage changes
pub const PERCENT_CHANGE_LIMIT: f64 = 999.9;

/// Round half-up to one decimal place
pub fn round_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10.0 + 0.5).floor() / 10.0
}

/// `part / whole * 100`, or 0 when `whole` is zero, rounded to one decimal
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    round_percent(part.cents() as f64 * 100.0 / whole.cents() as f64)
}

/// `(current - comparison) / |comparison| * 100`, 0 for a zero comparison,
/// rounded and clamped to `±PERCENT_CHANGE_LIMIT`
pub fn percentage_change(current: Money, comparison: Money) -> f64 {
    if comparison.is_zero() {
        return 0.0;
    }
    let change = (current - comparison).cents() as f64 * 100.0 / comparison.abs().cents() as f64;
    round_percent(change).clamp(-PERCENT_CHANGE_LIMIT, PERCENT_CHANGE_LIMIT)
}

/// Divide an amount into `parts` equal shares, rounding half-up to cents.
/// Zero or negative `parts` yields zero.
pub fn divide_money(amount: Money, parts: i64) -> Money {
    if parts <= 0 {
        return Money::zero();
    }
    let cents = i128::from(amount.cents());
    let parts = i128::from(parts);
    let share = (2 * cents + parts).div_euclid(2 * parts);
    Money::from_cents(share.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

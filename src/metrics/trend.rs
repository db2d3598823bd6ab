//! Spending over time: daily averages and month-by-month series

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use super::{divide_money, filter_by_period, sum_amounts};
use crate::models::period::first_of_month;
use crate::models::{Money, PeriodSelector, Transaction};

/// Total for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// "YYYY-MM"
    pub month: String,
    pub total: Money,
    pub count: usize,
}

/// Number of days the period's total is spread over.
///
/// The current month and year count only the days elapsed up to the
/// reference date; closed windows count every day they cover. All Time runs
/// from the earliest dated record.
fn elapsed_days(records: &[&Transaction], period: PeriodSelector, reference: NaiveDate) -> i64 {
    match period {
        PeriodSelector::ThisMonth => i64::from(reference.day()),
        PeriodSelector::ThisYear => i64::from(reference.ordinal()),
        PeriodSelector::LastMonth | PeriodSelector::LastThreeMonths => period
            .window(reference)
            .map(|range| range.days())
            .unwrap_or(1),
        PeriodSelector::AllTime => records
            .iter()
            .filter_map(|txn| txn.calendar_date())
            .min()
            .map(|earliest| (reference - earliest).num_days() + 1)
            .unwrap_or(1)
            .max(1),
    }
}

/// Average amount per day over `period`, 0 when nothing matched
pub fn compute_daily_average(
    records: &[Transaction],
    period: PeriodSelector,
    reference: NaiveDate,
) -> Money {
    let matched = filter_by_period(records, period, reference);
    if matched.is_empty() {
        return Money::zero();
    }
    let total = sum_amounts(matched.iter().copied());
    divide_money(total, elapsed_days(&matched, period, reference))
}

/// Totals for each of the `months` calendar months ending with the reference
/// month, oldest first. Months without records report zero.
pub fn compute_monthly_trend(
    records: &[Transaction],
    months: u32,
    reference: NaiveDate,
) -> Vec<MonthlyTrendPoint> {
    let mut buckets: HashMap<(i32, u32), (Money, usize)> = HashMap::new();
    for txn in records {
        if let Some(date) = txn.calendar_date() {
            let bucket = buckets
                .entry((date.year(), date.month()))
                .or_insert((Money::zero(), 0));
            bucket.0 += txn.amount;
            bucket.1 += 1;
        }
    }

    let current_month = first_of_month(reference);
    (0..months)
        .rev()
        .filter_map(|back| current_month.checked_sub_months(Months::new(back)))
        .map(|month| {
            let (total, count) = buckets
                .get(&(month.year(), month.month()))
                .copied()
                .unwrap_or((Money::zero(), 0));
            MonthlyTrendPoint {
                month: month.format("%Y-%m").to_string(),
                total,
                count,
            }
        })
        .collect()
}

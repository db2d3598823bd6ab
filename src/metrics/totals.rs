//! Period filtering and period-over-period totals

use chrono::NaiveDate;
use serde::Serialize;

use super::percentage_change;
use crate::models::{DateRange, Money, PeriodSelector, Transaction};

/// Totals for a period and the period before it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub period: PeriodSelector,
    /// Sum of amounts inside the selected window
    pub current_total: Money,
    /// Sum of amounts inside the preceding window of the same shape
    pub comparison_total: Money,
    /// Change from comparison to current, in percent, within ±999.9
    pub percentage_change: f64,
    /// Number of records inside the selected window
    pub transaction_count: usize,
}

/// Sum the amounts of `records`, starting from zero
pub fn sum_amounts<'a, I>(records: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records.into_iter().map(|txn| txn.amount).sum()
}

/// Keep the records whose date falls in `period`'s window, preserving order.
///
/// Records with unparseable dates are dropped for every windowed period and
/// kept for All Time.
pub fn filter_by_period<'a, I>(
    records: I,
    period: PeriodSelector,
    reference: NaiveDate,
) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    records
        .into_iter()
        .filter(|txn| period.matches(txn.calendar_date(), reference))
        .collect()
}

fn sum_in_range(records: &[Transaction], range: DateRange) -> Money {
    records
        .iter()
        .filter(|txn| txn.calendar_date().is_some_and(|d| range.contains(d)))
        .map(|txn| txn.amount)
        .sum()
}

/// Compute current and comparison totals for `period`
pub fn compute_period_totals(
    records: &[Transaction],
    period: PeriodSelector,
    reference: NaiveDate,
) -> PeriodTotals {
    let current = filter_by_period(records, period, reference);
    let current_total = sum_amounts(current.iter().copied());
    let comparison_total = period
        .comparison_window(reference)
        .map(|range| sum_in_range(records, range))
        .unwrap_or_default();

    tracing::debug!(
        period = %period,
        records = records.len(),
        matched = current.len(),
        "computed period totals"
    );

    PeriodTotals {
        period,
        current_total,
        comparison_total,
        percentage_change: percentage_change(current_total, comparison_total),
        transaction_count: current.len(),
    }
}

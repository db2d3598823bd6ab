//! Category and source breakdowns
//!
//! Groups records by their classified category (expenses) or source
//! (incomes) and reports each group's share of the grand total.

use serde::Serialize;
use std::collections::HashMap;

use super::percent_of;
use crate::models::{GroupField, Money, Transaction};

/// One group in a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    /// Display label of the group (first spelling seen)
    pub name: String,
    pub total_amount: Money,
    pub transaction_count: usize,
    /// Share of the grand total, 0 when the grand total is zero
    pub percentage_of_grand_total: f64,
}

/// Group `records` by `field`, largest total first.
///
/// Groups with equal totals keep the order in which they were first seen.
pub fn compute_category_breakdown<'a, I>(records: I, field: GroupField) -> Vec<CategoryBreakdown>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CategoryBreakdown> = Vec::new();
    let mut grand_total = Money::zero();

    for txn in records {
        let slot = *index.entry(field.key_of(txn)).or_insert_with(|| {
            groups.push(CategoryBreakdown {
                name: field.label_of(txn),
                total_amount: Money::zero(),
                transaction_count: 0,
                percentage_of_grand_total: 0.0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_amount += txn.amount;
        group.transaction_count += 1;
        grand_total += txn.amount;
    }

    for group in &mut groups {
        group.percentage_of_grand_total = percent_of(group.total_amount, grand_total);
    }

    // sort_by is stable, so ties stay in first-seen order
    groups.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

    tracing::debug!(groups = groups.len(), field = ?field, "computed category breakdown");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        Transaction::expense("test", Money::from_cents(cents), category, date)
    }

    #[test]
    fn test_groups_sorted_by_total() {
        let records = vec![
            expense(1000, "Food"),
            expense(5000, "Rent"),
            expense(2500, "groceries"),
            expense(1500, "Entertainment"),
        ];

        let breakdown = compute_category_breakdown(&records, GroupField::Category);
        let names: Vec<&str> = breakdown.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Entertainment"]);

        let food = &breakdown[1];
        assert_eq!(food.total_amount, Money::from_cents(3500));
        assert_eq!(food.transaction_count, 2);
        assert_eq!(food.percentage_of_grand_total, 35.0);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            expense(1000, "Pets"),
            expense(1000, "Books"),
            expense(1000, "Garden"),
        ];
        let breakdown = compute_category_breakdown(&records, GroupField::Category);
        let names: Vec<&str> = breakdown.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Pets", "Books", "Garden"]);
    }

    #[test]
    fn test_unrecognized_spellings_share_a_group() {
        let records = vec![expense(100, "Pet Supplies"), expense(200, "pet  supplies")];
        let breakdown = compute_category_breakdown(&records, GroupField::Category);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].name, "Pet Supplies");
        assert_eq!(breakdown[0].percentage_of_grand_total, 100.0);
    }

    #[test]
    fn test_totals_sum_to_grand_total() {
        let records: Vec<Transaction> = [333, 333, 334, 1, 999, 12345]
            .iter()
            .zip(["Food", "Travel", "Food", "Other", "Misc", "Shopping"])
            .map(|(cents, cat)| expense(*cents, cat))
            .collect();

        let breakdown = compute_category_breakdown(&records, GroupField::Category);
        let summed: Money = breakdown.iter().map(|g| g.total_amount).sum();
        assert_eq!(summed, Money::from_cents(333 + 333 + 334 + 1 + 999 + 12345));
        let counted: usize = breakdown.iter().map(|g| g.transaction_count).sum();
        assert_eq!(counted, records.len());
    }

    #[test]
    fn test_zero_grand_total() {
        let records = vec![expense(0, "Food"), expense(0, "Travel")];
        let breakdown = compute_category_breakdown(&records, GroupField::Category);
        assert_eq!(breakdown.len(), 2);
        assert!(breakdown.iter().all(|g| g.percentage_of_grand_total == 0.0));
    }

    #[test]
    fn test_empty_input() {
        let breakdown = compute_category_breakdown(&Vec::<Transaction>::new(), GroupField::Source);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_income_sources() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let records = vec![
            Transaction::income("Pay", Money::from_cents(300000), "Salary", date),
            Transaction::income("Gig", Money::from_cents(100000), "consulting", date),
        ];
        let breakdown = compute_category_breakdown(&records, GroupField::Source);
        assert_eq!(breakdown[0].name, "Salary");
        assert_eq!(breakdown[0].percentage_of_grand_total, 75.0);
        assert_eq!(breakdown[1].name, "Freelance");
    }
}

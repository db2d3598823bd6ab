//! Financial goal model
//!
//! A goal is a savings target with a running progress amount and a due date.
//! Progress is never negative; a zero target is tolerated and reported as 0%.

use serde::{Deserialize, Serialize};

use super::date::RecordDate;
use super::lenient;
use super::ids::{GoalId, UserId};
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(alias = "$id", default)]
    pub id: GoalId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    /// Amount to reach
    #[serde(default)]
    pub target: Money,

    /// Amount saved so far
    #[serde(default)]
    pub progress: Money,

    #[serde(default)]
    pub due_date: RecordDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Goal {
    /// Create a new goal with no progress
    pub fn new(title: impl Into<String>, target: Money, due_date: impl Into<RecordDate>) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            category: String::new(),
            target,
            progress: Money::zero(),
            due_date: due_date.into(),
            user_id: None,
        }
    }

    pub fn with_progress(mut self, progress: Money) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn belongs_to(&self, user: &UserId) -> bool {
        self.user_id.as_ref() == Some(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_goal() {
        let json = r#"{
            "title": "Emergency fund",
            "category": "Savings",
            "target": "5000",
            "progress": 1250.5,
            "dueDate": "2025-12-31"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.target.cents(), 500000);
        assert_eq!(goal.progress.cents(), 125050);
        assert_eq!(goal.due_date.date(), NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn test_builder() {
        let due = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let goal = Goal::new("Bike", Money::from_cents(80000), due)
            .with_progress(Money::from_cents(20000))
            .with_category("Shopping");
        assert_eq!(goal.progress.cents(), 20000);
        assert_eq!(goal.category, "Shopping");
        assert_eq!(goal.due_date.raw(), "2026-06-01");
    }
}

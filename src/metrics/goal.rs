//! Goal progress

use chrono::NaiveDate;
use serde::Serialize;

use super::percent_of;
use crate::models::{Goal, GoalId, Money};

/// How far a goal has come
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub title: String,
    pub target: Money,
    pub progress: Money,
    /// `progress / target * 100`; 0 for a zero target. May exceed 100.
    pub percentage: f64,
    /// Amount still to save, never negative
    pub remaining: Money,
    pub is_complete: bool,
}

/// Progress plus where the goal stands against its due date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatus {
    #[serde(flatten)]
    pub progress: GoalProgress,
    /// Days until the due date, negative once past it; `None` if the due
    /// date did not parse
    pub days_remaining: Option<i64>,
    pub is_overdue: bool,
}

/// Compute a goal's completion percentage without dividing by a zero target
pub fn compute_goal_progress(goal: &Goal) -> GoalProgress {
    let remaining = if goal.progress >= goal.target {
        Money::zero()
    } else {
        goal.target - goal.progress
    };

    GoalProgress {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        target: goal.target,
        progress: goal.progress,
        percentage: percent_of(goal.progress, goal.target),
        remaining,
        is_complete: goal.target.is_positive() && goal.progress >= goal.target,
    }
}

/// Compute progress and due-date standing as of `reference`.
///
/// A completed goal is never overdue.
pub fn compute_goal_status(goal: &Goal, reference: NaiveDate) -> GoalStatus {
    let progress = compute_goal_progress(goal);
    let days_remaining = goal
        .due_date
        .date()
        .map(|due| (due - reference).num_days());
    let is_overdue = !progress.is_complete && days_remaining.is_some_and(|days| days < 0);

    GoalStatus {
        progress,
        days_remaining,
        is_overdue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_percentage() {
        let goal = Goal::new("Laptop", Money::from_cents(200000), date(2025, 12, 1))
            .with_progress(Money::from_cents(50000));
        let progress = compute_goal_progress(&goal);
        assert_eq!(progress.percentage, 25.0);
        assert_eq!(progress.remaining, Money::from_cents(150000));
        assert!(!progress.is_complete);
    }

    #[test]
    fn test_zero_target_is_zero_percent() {
        let goal = Goal::new("Nothing", Money::zero(), date(2025, 12, 1))
            .with_progress(Money::from_cents(1000));
        let progress = compute_goal_progress(&goal);
        assert_eq!(progress.percentage, 0.0);
        assert!(progress.percentage.is_finite());
        assert!(!progress.is_complete);
        assert!(progress.remaining.is_zero());
    }

    #[test]
    fn test_overshoot() {
        let goal = Goal::new("Trip", Money::from_cents(1000), date(2025, 12, 1))
            .with_progress(Money::from_cents(1500));
        let progress = compute_goal_progress(&goal);
        assert_eq!(progress.percentage, 150.0);
        assert!(progress.is_complete);
        assert!(progress.remaining.is_zero());
    }

    #[test]
    fn test_status_against_due_date() {
        let goal = Goal::new("Car", Money::from_cents(100000), date(2025, 3, 1));

        let early = compute_goal_status(&goal, date(2025, 2, 20));
        assert_eq!(early.days_remaining, Some(9));
        assert!(!early.is_overdue);

        let late = compute_goal_status(&goal, date(2025, 3, 4));
        assert_eq!(late.days_remaining, Some(-3));
        assert!(late.is_overdue);
    }

    #[test]
    fn test_completed_goal_is_not_overdue() {
        let goal = Goal::new("Done", Money::from_cents(100), date(2024, 1, 1))
            .with_progress(Money::from_cents(100));
        let status = compute_goal_status(&goal, date(2025, 1, 1));
        assert!(!status.is_overdue);
    }

    #[test]
    fn test_unparsed_due_date() {
        let goal = Goal::new("Someday", Money::from_cents(100), RecordDate::parse("soon"));
        let status = compute_goal_status(&goal, date(2025, 1, 1));
        assert_eq!(status.days_remaining, None);
        assert!(!status.is_overdue);
    }
}

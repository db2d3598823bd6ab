//! Record snapshots
//!
//! A snapshot is one JSON document holding the four collections the backend
//! stores for a user. Every key is optional, and individual records are
//! parsed leniently (see `Money` and `RecordDate`), so a partially filled
//! export still loads.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::file_io::{read_json_required, write_json_atomic};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, Goal, Transaction, UserId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub expenses: Vec<Transaction>,
    pub incomes: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
}

impl Snapshot {
    /// Load a snapshot file, failing with NotFound if it is missing
    pub fn load(path: impl AsRef<Path>) -> FintrackResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FintrackError::snapshot_not_found(path.display().to_string()));
        }

        let snapshot: Snapshot = read_json_required(path)?;
        tracing::debug!(
            path = %path.display(),
            expenses = snapshot.expenses.len(),
            incomes = snapshot.incomes.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> FintrackResult<()> {
        write_json_atomic(path, self)
    }

    /// Keep only the records belonging to `user`.
    ///
    /// Records without a user id are shared and always kept.
    pub fn for_user(self, user: &UserId) -> Self {
        Self {
            expenses: self
                .expenses
                .into_iter()
                .filter(|t| t.user_id.is_none() || t.belongs_to(user))
                .collect(),
            incomes: self
                .incomes
                .into_iter()
                .filter(|t| t.user_id.is_none() || t.belongs_to(user))
                .collect(),
            budgets: self
                .budgets
                .into_iter()
                .filter(|b| b.user_id.is_none() || b.belongs_to(user))
                .collect(),
            goals: self
                .goals
                .into_iter()
                .filter(|g| g.user_id.is_none() || g.belongs_to(user))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
            && self.incomes.is_empty()
            && self.budgets.is_empty()
            && self.goals.is_empty()
    }
}

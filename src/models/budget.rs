//! Category budget model
//!
//! One budget per spending category per user. The amount is the spending
//! limit for a calendar month.

use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::{BudgetId, UserId};
use super::lenient;
use super::money::Money;

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(alias = "$id", default)]
    pub id: BudgetId,

    /// Category name as entered
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    #[serde(default)]
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// The classified category this budget limits
    pub fn expense_category(&self) -> ExpenseCategory {
        ExpenseCategory::parse(&self.category)
    }

    pub fn belongs_to(&self, user: &UserId) -> bool {
        self.user_id.as_ref() == Some(user)
    }
}

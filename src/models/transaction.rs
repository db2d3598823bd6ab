//! Transaction model
//!
//! Expenses and incomes share one record shape: expenses carry a `category`,
//! incomes a `source`. Records are read-only snapshots of backend documents;
//! nothing in this crate mutates them after deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{ExpenseCategory, IncomeSource};
use super::date::RecordDate;
use super::ids::{TransactionId, UserId};
use super::lenient;
use super::money::Money;

/// A recorded expense or income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend document id
    #[serde(alias = "$id", default)]
    pub id: TransactionId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,

    /// Non-negative amount; malformed values deserialize as zero
    #[serde(default)]
    pub amount: Money,

    /// Spending category (expenses)
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    /// Income source (incomes)
    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    #[serde(default)]
    pub date: RecordDate,

    #[serde(
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<String>,

    /// Owner of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl Transaction {
    fn blank(title: impl Into<String>, amount: Money, date: impl Into<RecordDate>) -> Self {
        Self {
            id: TransactionId::new(),
            title: title.into(),
            amount,
            category: None,
            source: None,
            description: None,
            date: date.into(),
            payment_method: None,
            user_id: None,
        }
    }

    /// Create an expense in the given category
    pub fn expense(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: impl Into<RecordDate>,
    ) -> Self {
        let mut txn = Self::blank(title, amount, date);
        txn.category = Some(category.into());
        txn
    }

    /// Create an income from the given source
    pub fn income(
        title: impl Into<String>,
        amount: Money,
        source: impl Into<String>,
        date: impl Into<RecordDate>,
    ) -> Self {
        let mut txn = Self::blank(title, amount, date);
        txn.source = Some(source.into());
        txn
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// The calendar date, if the stored date parsed
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.date()
    }

    /// The classified spending category (missing ⇒ Other)
    pub fn expense_category(&self) -> ExpenseCategory {
        ExpenseCategory::parse(self.category.as_deref().unwrap_or_default())
    }

    /// The classified income source (missing ⇒ Other)
    pub fn income_source(&self) -> IncomeSource {
        IncomeSource::parse(self.source.as_deref().unwrap_or_default())
    }

    /// Whether the record belongs to `user`; unowned records belong to nobody
    pub fn belongs_to(&self, user: &UserId) -> bool {
        self.user_id.as_ref() == Some(user)
    }
}

/// Which classification field a breakdown groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupField {
    /// `category`, used for expenses
    #[default]
    Category,
    /// `source`, used for incomes
    Source,
}

impl GroupField {
    /// The display label of `txn` under this field
    pub fn label_of(&self, txn: &Transaction) -> String {
        match self {
            Self::Category => txn.expense_category().label().to_string(),
            Self::Source => txn.income_source().label().to_string(),
        }
    }

    /// The grouping key of `txn` under this field
    pub fn key_of(&self, txn: &Transaction) -> String {
        match self {
            Self::Category => txn.expense_category().key(),
            Self::Source => txn.income_source().key(),
        }
    }
}

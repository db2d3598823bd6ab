//! Core data models for fintrack
//!
//! This module contains the record types consumed from the backend
//! (transactions, budgets, goals, the current user) and the value types the
//! metrics are expressed in (money, dates, periods, categories).

pub mod budget;
pub mod category;
pub mod date;
pub mod goal;
pub mod ids;
pub mod lenient;
pub mod money;
pub mod period;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use category::{ExpenseCategory, IncomeSource};
pub use date::RecordDate;
pub use goal::Goal;
pub use ids::{BudgetId, GoalId, TransactionId, UserId};
pub use money::Money;
pub use period::{DateRange, PeriodParseError, PeriodSelector};
pub use transaction::{GroupField, Transaction};
pub use user::UserRecord;

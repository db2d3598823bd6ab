//! fintrack - personal finance metrics
//!
//! This library computes the numbers behind a personal-finance dashboard:
//! period totals with period-over-period change, category and source
//! breakdowns, budget utilization, savings-goal progress, daily averages and
//! monthly trends. It also provides a TTL cache in front of an
//! authentication backend so repeated "who is logged in" checks stay cheap.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records and value types (money, dates, periods, categories)
//! - `metrics`: Pure metric computations
//! - `auth`: Authentication backend seam and the session cache
//! - `storage`: JSON snapshot and settings files
//! - `export`: CSV, JSON and YAML export
//! - `display` / `reports`: Terminal rendering
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::metrics::compute_period_totals;
//! use fintrack::models::PeriodSelector;
//! use fintrack::storage::Snapshot;
//!
//! let snapshot = Snapshot::load("snapshot.json")?;
//! let today = chrono::Local::now().date_naive();
//! let totals = compute_period_totals(&snapshot.expenses, PeriodSelector::ThisMonth, today);
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FintrackError, FintrackResult};

//! Reports module for fintrack
//!
//! Terminal renderings of computed metrics: the dashboard, spending and
//! income breakdowns, budget utilization, goal progress and the monthly
//! trend.

pub mod budget_overview;
pub mod dashboard;
pub mod goals;
pub mod spending;
pub mod trend;

pub use budget_overview::format_budget_overview;
pub use dashboard::format_dashboard;
pub use goals::format_goals;
pub use spending::{format_breakdown, format_totals};
pub use trend::format_trend;

//! Display formatting for terminal output
//!
//! Small helpers for money, percentages, bars and separators used by the
//! report renderers in `reports`.

pub mod report;

pub use report::{
    double_separator, format_bar, format_change, format_money_colored, format_percentage,
    separator, status_marker, truncate,
};

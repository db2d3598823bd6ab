//! Reporting period selection
//!
//! A `PeriodSelector` names a time window relative to a reference date (usually
//! today): the current or previous calendar month, a rolling three-month
//! window, the current calendar year, or everything. Each windowed selector
//! also knows its comparison window, the immediately preceding window of the
//! same shape, which drives period-over-period percentage changes.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = first_of_month(date);
        Self {
            start,
            end: start + Duration::days(i64::from(days_in_month(date)) - 1),
        }
    }

    /// The calendar year containing `date`
    pub fn year_of(date: NaiveDate) -> Self {
        let start = date - Duration::days(i64::from(date.ordinal0()));
        let length = if is_leap_year(date.year()) { 366 } else { 365 };
        Self {
            start,
            end: start + Duration::days(length - 1),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the previous calendar month
fn previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) - Duration::days(1)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    match date.month() {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(date.year()) => 29,
        _ => 28,
    }
}

/// Subtract whole months, clamping to the earliest representable date
fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Length of the rolling window, in months
pub const ROLLING_WINDOW_MONTHS: u32 = 3;

/// The time window a metric is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PeriodSelector {
    #[default]
    #[serde(rename = "This Month")]
    ThisMonth,
    #[serde(rename = "Last Month")]
    LastMonth,
    #[serde(rename = "Last 3 Months")]
    LastThreeMonths,
    #[serde(rename = "This Year")]
    ThisYear,
    #[serde(rename = "All Time")]
    AllTime,
}

impl PeriodSelector {
    /// Every selector, in the order a period picker lists them
    pub const ALL: [PeriodSelector; 5] = [
        Self::ThisMonth,
        Self::LastMonth,
        Self::LastThreeMonths,
        Self::ThisYear,
        Self::AllTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::LastThreeMonths => "Last 3 Months",
            Self::ThisYear => "This Year",
            Self::AllTime => "All Time",
        }
    }

    /// The window this selector covers, or `None` for All Time
    pub fn window(&self, reference: NaiveDate) -> Option<DateRange> {
        match self {
            Self::ThisMonth => Some(DateRange::month_of(reference)),
            Self::LastMonth => Some(DateRange::month_of(previous_month(reference))),
            Self::LastThreeMonths => Some(DateRange::new(
                months_before(reference, ROLLING_WINDOW_MONTHS),
                reference,
            )),
            Self::ThisYear => Some(DateRange::year_of(reference)),
            Self::AllTime => None,
        }
    }

    /// The immediately preceding window of the same shape, or `None` for All Time
    pub fn comparison_window(&self, reference: NaiveDate) -> Option<DateRange> {
        match self {
            Self::ThisMonth => Some(DateRange::month_of(previous_month(reference))),
            Self::LastMonth => Some(DateRange::month_of(previous_month(previous_month(
                reference,
            )))),
            Self::LastThreeMonths => {
                let current_start = months_before(reference, ROLLING_WINDOW_MONTHS);
                let end = current_start - Duration::days(1);
                Some(DateRange::new(
                    months_before(current_start, ROLLING_WINDOW_MONTHS),
                    end,
                ))
            }
            Self::ThisYear => {
                let start_of_year = DateRange::year_of(reference).start;
                Some(DateRange::year_of(start_of_year - Duration::days(1)))
            }
            Self::AllTime => None,
        }
    }

    /// Whether a record dated `date` belongs to this selector's window.
    ///
    /// All Time matches everything, including records whose date could not be
    /// parsed; every windowed selector rejects unparseable dates.
    pub fn matches(&self, date: Option<NaiveDate>, reference: NaiveDate) -> bool {
        match self.window(reference) {
            None => true,
            Some(range) => date.is_some_and(|d| range.contains(d)),
        }
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PeriodSelector {
    type Err = PeriodParseError;

    /// Parse a period name
    ///
    /// Accepts the display labels ("Last 3 Months") and their kebab/snake
    /// forms ("last-3-months", "this_year"), case-insensitively, plus a few
    /// short aliases ("month", "last", "quarter", "year", "all").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "thismonth" | "month" | "current" => Ok(Self::ThisMonth),
            "lastmonth" | "last" | "previous" | "prev" => Ok(Self::LastMonth),
            "last3months" | "lastthreemonths" | "3months" | "quarter" => {
                Ok(Self::LastThreeMonths)
            }
            "thisyear" | "year" => Ok(Self::ThisYear),
            "alltime" | "all" => Ok(Self::AllTime),
            _ => Err(PeriodParseError::UnknownPeriod(s.trim().to_string())),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    UnknownPeriod(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::UnknownPeriod(s) => write!(
                f,
                "Unknown period '{}' (expected this-month, last-month, last-3-months, this-year or all-time)",
                s
            ),
        }
    }
}

impl std::error::Error for PeriodParseError {}

//! Record dates as they arrive from the backend
//!
//! Dates are calendar dates, but the backend stores them as strings that may
//! be plain `YYYY-MM-DD` or full timestamps. The raw text is kept so exports
//! can echo it back; a date that does not parse simply has no calendar value
//! and falls outside every period window.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::lenient::scalar_text;

/// A calendar date that may have failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl RecordDate {
    /// Parse a raw date string; never fails
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_calendar_date(&raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            tracing::debug!(value = %raw, "record date did not parse");
        }
        Self { raw, parsed }
    }

    /// Build from an already-known calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            raw: date.format("%Y-%m-%d").to_string(),
            parsed: Some(date),
        }
    }

    /// The calendar date, if the raw value parsed
    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parsed {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            None => f.write_str(&self.raw),
        }
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and offset-less timestamps.
/// Time of day is discarded; RFC 3339 values keep their local calendar date.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.date());
        }
    }
    None
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for RecordDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // null, numbers and nested values are tolerated like garbage text
        let raw = scalar_text(Value::deserialize(deserializer)?);
        Ok(Self::parse(raw.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        let d = RecordDate::parse("2025-03-14");
        assert_eq!(d.date(), Some(date(2025, 3, 14)));
        assert_eq!(d.to_string(), "2025-03-14");
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(
            RecordDate::parse("2025-03-14T23:30:00.000+00:00").date(),
            Some(date(2025, 3, 14))
        );
        assert_eq!(
            RecordDate::parse("2025-03-14T08:00:00Z").date(),
            Some(date(2025, 3, 14))
        );
        assert_eq!(
            RecordDate::parse("2025-03-14T08:00:00.250").date(),
            Some(date(2025, 3, 14))
        );
    }

    #[test]
    fn test_garbage_keeps_raw_text() {
        let d = RecordDate::parse("next tuesday");
        assert!(!d.is_valid());
        assert_eq!(d.raw(), "next tuesday");
        assert_eq!(d.to_string(), "next tuesday");
        assert!(!RecordDate::parse("2025-02-30").is_valid());
    }

    #[test]
    fn test_deserialize_null() {
        let d: RecordDate = serde_json::from_str("null").unwrap();
        assert!(!d.is_valid());
        assert_eq!(d.raw(), "");
    }

    #[test]
    fn test_deserialize_non_string_stays_unparsed() {
        let d: RecordDate = serde_json::from_str("1740787200000").unwrap();
        assert!(!d.is_valid());
        assert_eq!(d.raw(), "1740787200000");

        let d: RecordDate = serde_json::from_str(r#"{"seconds": 1}"#).unwrap();
        assert!(!d.is_valid());
    }
}

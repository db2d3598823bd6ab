//! User settings for fintrack
//!
//! Display preferences, the default reporting period, session cache TTL and
//! the log level used when `FINTRACK_LOG` is not set.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::auth::DEFAULT_SESSION_TTL_SECS;
use crate::error::FintrackError;
use crate::metrics::dashboard::{DEFAULT_TREND_MONTHS, MAX_TREND_MONTHS};
use crate::models::PeriodSelector;
use crate::storage::file_io::write_json_atomic;

/// Longest TTL honoured by the session cache
const MAX_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Period used when a command is run without `--period`
    #[serde(default)]
    pub default_period: PeriodSelector,

    /// How long the current user is served from the session cache
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Tracing filter used when `FINTRACK_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Months covered by the spending trend
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_session_ttl() -> u64 {
    DEFAULT_SESSION_TTL_SECS as u64
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_trend_months() -> u32 {
    DEFAULT_TREND_MONTHS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_period: PeriodSelector::default(),
            session_ttl_secs: default_session_ttl(),
            log_level: default_log_level(),
            trend_months: default_trend_months(),
        }
    }
}

impl Settings {
    /// Session TTL as a duration, capped at one day
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs.min(MAX_SESSION_TTL_SECS) as i64)
    }

    /// Trend length, between one month and ten years
    pub fn trend_window(&self) -> u32 {
        self.trend_months.clamp(1, MAX_TREND_MONTHS)
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk atomically
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

//! Shared state for CLI command handlers

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::auth::{FileAuthBackend, SessionCache, SystemClock};
use crate::config::{FintrackPaths, Settings};
use crate::error::FintrackResult;
use crate::models::PeriodSelector;
use crate::storage::Snapshot;

/// Everything a command needs: where data lives, user settings, and the
/// date metrics are computed as of
pub struct CliContext {
    pub paths: FintrackPaths,
    pub settings: Settings,
    /// Snapshot to read; the default location unless `--data` was given
    pub snapshot_path: PathBuf,
    pub reference_date: NaiveDate,
}

impl CliContext {
    pub fn new(
        paths: FintrackPaths,
        settings: Settings,
        snapshot_path: Option<PathBuf>,
        reference_date: NaiveDate,
    ) -> Self {
        let snapshot_path = snapshot_path.unwrap_or_else(|| paths.snapshot_file());
        Self {
            paths,
            settings,
            snapshot_path,
            reference_date,
        }
    }

    /// Session cache over the file-backed session, with the configured TTL
    pub fn session_cache(&self) -> SessionCache<FileAuthBackend> {
        SessionCache::with_clock(
            FileAuthBackend::new(self.paths.session_file()),
            self.settings.session_ttl(),
            SystemClock,
        )
    }

    /// Load the snapshot, scoped to the logged-in user if there is one
    pub fn load_records(&self) -> FintrackResult<Snapshot> {
        let snapshot = Snapshot::load(&self.snapshot_path)?;

        match self.session_cache().get_current_user()? {
            Some(user) => {
                tracing::debug!(user = %user.id, "scoping records to current user");
                Ok(snapshot.for_user(&user.id))
            }
            None => Ok(snapshot),
        }
    }

    pub fn period_or_default(&self, period: Option<PeriodSelector>) -> PeriodSelector {
        period.unwrap_or(self.settings.default_period)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

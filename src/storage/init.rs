//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and an empty
//! snapshot to fill in.

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::FintrackError;

use super::snapshot::Snapshot;

/// Initialize storage for a fresh installation.
///
/// Existing settings and snapshot files are left alone.
pub fn initialize_storage(paths: &FintrackPaths) -> Result<(), FintrackError> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
    }

    if !paths.snapshot_file().exists() {
        Snapshot::default().save(paths.snapshot_file())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.is_initialized() || !paths.snapshot_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.settings_file().exists());
        assert!(Snapshot::load(paths.snapshot_file()).unwrap().is_empty());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let snapshot = Snapshot {
            expenses: vec![Transaction::expense("Lunch", Money::from_cents(900), "Food", date)],
            ..Snapshot::default()
        };
        snapshot.save(paths.snapshot_file()).unwrap();

        initialize_storage(&paths).unwrap();

        let loaded = Snapshot::load(paths.snapshot_file()).unwrap();
        assert_eq!(loaded.expenses.len(), 1);
        assert_eq!(loaded.expenses[0].title, "Lunch");
    }
}

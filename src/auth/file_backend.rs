//! Session stored in a local JSON file
//!
//! Stands in for the hosted authentication service when running the CLI:
//! `login` writes `session.json`, `logout` removes it, and the current user
//! is whatever the file says.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::backend::{AuthBackend, AuthError, Credentials};
use crate::models::{UserId, UserRecord};
use crate::storage::file_io::write_json_atomic;

/// On-disk shape of `session.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    pub user: UserRecord,
    pub logged_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileAuthBackend {
    path: PathBuf,
}

impl FileAuthBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, `None` when the file does not exist
    pub fn read_session(&self) -> Result<Option<SessionFile>, AuthError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthError::Transport(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&contents).map(Some).map_err(|e| {
            AuthError::Transport(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl AuthBackend for FileAuthBackend {
    fn current_user(&self) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.read_session()?.map(|session| session.user))
    }

    fn login(&self, credentials: &Credentials) -> Result<UserRecord, AuthError> {
        let email = credentials.email.trim();
        if email.is_empty() {
            return Err(AuthError::Unauthorized("an email address is required".into()));
        }

        let user = UserRecord {
            id: credentials.user_id.clone().unwrap_or_else(UserId::new),
            name: credentials.name.clone().unwrap_or_default(),
            email: email.to_string(),
        };
        let session = SessionFile {
            user: user.clone(),
            logged_in_at: Utc::now(),
        };

        write_json_atomic(&self.path, &session).map_err(|e| AuthError::Transport(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), "session file written");
        Ok(user)
    }

    fn logout(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Transport(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backend(temp_dir: &TempDir) -> FileAuthBackend {
        FileAuthBackend::new(temp_dir.path().join("session.json"))
    }

    #[test]
    fn test_missing_file_means_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(backend(&temp_dir).current_user().unwrap(), None);
    }

    #[test]
    fn test_login_then_current_user() {
        let temp_dir = TempDir::new().unwrap();
        let backend = backend(&temp_dir);

        let credentials = Credentials::new("alice@example.com")
            .with_user_id(UserId::from_raw("u-1"))
            .with_name("Alice");
        let user = backend.login(&credentials).unwrap();
        assert_eq!(user.id.as_str(), "u-1");

        let current = backend.current_user().unwrap().unwrap();
        assert_eq!(current, user);
        assert!(backend.path().exists());
    }

    #[test]
    fn test_login_issues_id() {
        let temp_dir = TempDir::new().unwrap();
        let user = backend(&temp_dir)
            .login(&Credentials::new("bob@example.com"))
            .unwrap();
        assert!(!user.id.as_str().is_empty());
        assert_eq!(user.display_name(), "bob@example.com");
    }

    #[test]
    fn test_login_requires_email() {
        let temp_dir = TempDir::new().unwrap();
        let err = backend(&temp_dir).login(&Credentials::new("  ")).unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
    }

    #[test]
    fn test_logout_removes_session() {
        let temp_dir = TempDir::new().unwrap();
        let backend = backend(&temp_dir);
        backend.login(&Credentials::new("a@b.c")).unwrap();
        backend.logout().unwrap();
        assert_eq!(backend.current_user().unwrap(), None);
        // Logging out twice is fine
        backend.logout().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_transport_error() {
        let temp_dir = TempDir::new().unwrap();
        let backend = backend(&temp_dir);
        fs::write(backend.path(), "{ not json").unwrap();
        let err = backend.current_user().unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}

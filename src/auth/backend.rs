//! The authentication backend seam
//!
//! The hosted service that owns user sessions sits behind `AuthBackend`, so
//! the session cache can be exercised against an in-memory fake and the CLI
//! can run against a session file.

use thiserror::Error;

use crate::models::{UserId, UserRecord};

/// Failures reported by an authentication backend.
///
/// "Not logged in" is not an error; backends answer `Ok(None)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The backend could not be reached or returned something unreadable
    #[error("backend transport failure: {0}")]
    Transport(String),

    /// The backend refused the request
    #[error("not authorized: {0}")]
    Unauthorized(String),
}

/// What a login request carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Reuse an existing account id; a new one is issued when absent
    pub user_id: Option<UserId>,
    pub name: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_id: None,
            name: None,
        }
    }

    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Trait defining the operations the session cache needs from the backend
///
/// Calls are synchronous and carry no timeout or retry of their own.
pub trait AuthBackend {
    /// The user of the current session, `None` when nobody is logged in
    fn current_user(&self) -> Result<Option<UserRecord>, AuthError>;

    /// Start a session and return the user it belongs to
    fn login(&self, credentials: &Credentials) -> Result<UserRecord, AuthError>;

    /// End the current session. Ending a missing session is not an error.
    fn logout(&self) -> Result<(), AuthError>;
}

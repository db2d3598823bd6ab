//! Time-to-live cache of the current user
//!
//! Every screen asks "who is logged in?"; the cache answers from memory for
//! `ttl` after the last successful check and goes to the backend otherwise.
//! Login and logout pass through to the backend and then drop the cached
//! answer, so the next lookup always sees the new session.

use chrono::{DateTime, Duration, Utc};

use super::backend::{AuthBackend, AuthError, Credentials};
use super::clock::{Clock, SystemClock};
use crate::models::UserRecord;

/// How long a confirmed user is served from memory
pub const DEFAULT_SESSION_TTL_SECS: i64 = 30;

/// What the cache currently knows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub cached_user: Option<UserRecord>,
    pub last_checked_at: Option<DateTime<Utc>>,
    /// True only while `cached_user` holds a confirmed user
    pub is_valid: bool,
}

/// Session cache owning its backend and clock
pub struct SessionCache<B, C = SystemClock> {
    backend: B,
    clock: C,
    ttl: Duration,
    state: SessionState,
}

impl<B: AuthBackend> SessionCache<B, SystemClock> {
    /// Cache with the default TTL and the system clock
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, Duration::seconds(DEFAULT_SESSION_TTL_SECS), SystemClock)
    }
}

impl<B: AuthBackend, C: Clock> SessionCache<B, C> {
    pub fn with_clock(backend: B, ttl: Duration, clock: C) -> Self {
        Self {
            backend,
            clock,
            ttl,
            state: SessionState::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Any answer, including "nobody is logged in", is served until it is
    /// `ttl` old
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.state
            .last_checked_at
            .is_some_and(|checked| now - checked < self.ttl)
    }

    /// The current user, from memory when the last check is recent enough.
    ///
    /// On a backend error the cache is left exactly as it was, so an expired
    /// entry stays expired and the next call retries.
    pub fn get_current_user(&mut self) -> Result<Option<UserRecord>, AuthError> {
        let now = self.clock.now();
        if self.is_fresh(now) {
            tracing::debug!("session cache hit");
            return Ok(self.state.cached_user.clone());
        }

        tracing::debug!("session cache miss, asking backend");
        let user = self.backend.current_user()?;

        self.state = SessionState {
            is_valid: user.is_some(),
            cached_user: user.clone(),
            last_checked_at: Some(now),
        };
        Ok(user)
    }

    /// Drop whatever the cache holds
    pub fn invalidate(&mut self) {
        self.state = SessionState::default();
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<UserRecord, AuthError> {
        let user = self.backend.login(credentials)?;
        self.invalidate();
        tracing::info!(user = %user.id, "logged in");
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.backend.logout()?;
        self.invalidate();
        tracing::info!("logged out");
        Ok(())
    }
}

//! Authentication session handling
//!
//! - `AuthBackend`: the seam to whatever owns user sessions
//! - `SessionCache`: TTL cache of the current user in front of a backend
//! - `FileAuthBackend`: a backend keeping the session in `session.json`

pub mod backend;
pub mod cache;
pub mod clock;
pub mod file_backend;

pub use backend::{AuthBackend, AuthError, Credentials};
pub use cache::{SessionCache, SessionState, DEFAULT_SESSION_TTL_SECS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use file_backend::{FileAuthBackend, SessionFile};

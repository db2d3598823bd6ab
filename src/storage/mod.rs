//! Storage layer for fintrack
//!
//! JSON files with atomic writes: settings, the file-backed session and
//! record snapshots.

pub mod file_io;
pub mod init;
pub mod snapshot;

pub use file_io::{read_json_required, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use snapshot::Snapshot;

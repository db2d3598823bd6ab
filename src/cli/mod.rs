//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the metrics and session layers.

pub mod context;
pub mod export;
pub mod report;
pub mod session;

pub use context::CliContext;
pub use export::{handle_export_command, ExportCommands, ReportFormat};
pub use report::{handle_report_command, OutputFormat, RecordKind, ReportCommands};
pub use session::{handle_session_command, SessionCommands};

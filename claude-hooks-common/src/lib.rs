//! Claude Hooks Common - core library for the Claude Code hook binaries.
//!
//! Each hook reads one JSON payload from stdin, performs one bounded side
//! effect and exits. This crate holds everything except the process wiring:
//!
//! - [`event_log`]: stamps hook events and appends them to a JSON-Lines file
//! - [`notify`]: derives a desktop notification from an event and dispatches it
//! - [`lint`]: extracts file paths from an event and gates them through a linter
//! - [`process`]: the [`CommandRunner`] seam over external processes
//! - [`config`]: layered settings shared by all three hooks

pub mod config;
pub mod error;
pub mod event_log;
pub mod input;
pub mod lint;
pub mod notify;
pub mod process;
pub mod testing;

pub use config::{HooksConfig, LintConfig, LoggerConfig, NotifierConfig};
pub use error::HookError;
pub use event_log::{EventLog, LogEntry, WriteFailurePolicy};
pub use lint::{LintMode, LintOutcome, LintRunner};
pub use notify::{
    Delivery, NotificationOverrides, NotificationRequest, Notifier, ProcessTableResolver,
    TerminalApp, TerminalResolver,
};
pub use process::{CommandOutput, CommandRunner, SystemCommandRunner};

//! CLI definitions for the hook binaries.
//!
//! Only depends on `clap` and `std`; conversion into library types happens
//! in the hook modules.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What `hook-logger` does when the event cannot be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnError {
    /// Print the error and exit 1
    Fail,
    /// Print a warning and exit 0
    Ignore,
}

/// Append a Claude Code hook event to a JSON-Lines file.
///
/// Reads the event from stdin, stamps it with the capture time and appends
/// it as one line. Unparsable input is recorded with the parse error and
/// the raw text.
#[derive(Parser, Debug)]
#[command(name = "hook-logger")]
#[command(version)]
#[command(about = "Log Claude Code hook data to a JSONL file")]
pub struct LoggerCli {
    /// Path to the log file (parent directories are created)
    pub log_file: PathBuf,

    /// Behavior when the log cannot be written [default: from config, else fail]
    #[arg(long, value_enum)]
    pub on_error: Option<OnError>,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}

/// Show a desktop notification for a Claude Code hook event.
///
/// With both --title and --message, stdin is ignored. Otherwise the title
/// and message are derived from the `tool`, `command` and `status` fields
/// of the JSON event on stdin. Always exits 0.
#[derive(Parser, Debug)]
#[command(name = "hook-notifier")]
#[command(version)]
#[command(about = "Show desktop notifications for Claude Code")]
pub struct NotifierCli {
    /// Custom notification title
    #[arg(long)]
    pub title: Option<String>,

    /// Custom notification message
    #[arg(long)]
    pub message: Option<String>,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}

/// Run ruff on the Python files named by a Claude Code hook event.
///
/// Accepts `{"files": [...]}`, `{"file": "..."}`, `{"file_path": "..."}`,
/// `{"tool_input": {"file_path": "..."}}` or a bare JSON list on stdin.
#[derive(Parser, Debug)]
#[command(name = "hook-lint")]
#[command(version)]
#[command(about = "Run ruff on Python files from Claude Code")]
pub struct LintCli {
    /// Check files for issues (default)
    #[arg(long)]
    pub check: bool,

    /// Fix issues automatically (takes precedence over --check)
    #[arg(long)]
    pub fix: bool,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}

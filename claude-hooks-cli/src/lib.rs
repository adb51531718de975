//! Claude Hooks - command-line hooks for Claude Code.
//!
//! Three independent binaries, each invoked by Claude Code at a lifecycle
//! point with a JSON payload on stdin:
//!
//! - `hook-logger <file>`: append the event to a JSON-Lines log
//! - `hook-notifier [--title T] [--message M]`: show a desktop notification
//! - `hook-lint [--check|--fix]`: run `ruff` on the files named by the event
//!
//! The hook bodies live in [`logger`], [`notifier`] and [`lint`] and take
//! their streams and external-process runner as parameters, so the binaries
//! only parse arguments, set up tracing and exit with the returned code.
//!
//! # Example
//!
//! ```no_run
//! use claude_hooks::logger::run_logger_hook;
//! use claude_hooks_common::WriteFailurePolicy;
//! use std::path::Path;
//!
//! let code = run_logger_hook(
//!     Path::new("/tmp/hooks/events.jsonl"),
//!     WriteFailurePolicy::Fail,
//!     std::io::stdin().lock(),
//!     &mut std::io::stdout(),
//!     &mut std::io::stderr(),
//! );
//! std::process::exit(code);
//! ```

pub mod cli;
pub mod lint;
pub mod logger;
pub mod logging;
pub mod notifier;

pub use claude_hooks_common::*;
pub use cli::{LintCli, LoggerCli, NotifierCli};

/// Exit code for a successful hook.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a failed hook.
pub const EXIT_FAILURE: i32 = 1;

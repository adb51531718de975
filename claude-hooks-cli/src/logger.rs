//! `hook-logger`: append the stdin event to a JSON-Lines file.

use std::io::{Read, Write};
use std::path::Path;

use claude_hooks_common::input::read_payload;
use claude_hooks_common::{EventLog, HookError, LogEntry, LoggerConfig, WriteFailurePolicy};

use crate::cli::OnError;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

impl From<OnError> for WriteFailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Fail => WriteFailurePolicy::Fail,
            OnError::Ignore => WriteFailurePolicy::Ignore,
        }
    }
}

/// The flag wins over configuration.
pub fn resolve_policy(flag: Option<OnError>, config: &LoggerConfig) -> WriteFailurePolicy {
    flag.map(WriteFailurePolicy::from).unwrap_or(config.on_error)
}

/// Run the logger hook and return its exit code.
///
/// Prints `Logged to <path>` on success. Storage faults follow `policy`.
pub fn run_logger_hook<R: Read, W: Write, E: Write>(
    log_file: &Path,
    policy: WriteFailurePolicy,
    stdin: R,
    stdout: &mut W,
    stderr: &mut E,
) -> i32 {
    match log_event(log_file, stdin) {
        Ok(()) => {
            let _ = writeln!(stdout, "Logged to {}", log_file.display());
            let _ = stdout.flush();
            EXIT_SUCCESS
        }
        Err(e) => match policy {
            WriteFailurePolicy::Fail => {
                let _ = writeln!(stderr, "Error: {}", e);
                EXIT_FAILURE
            }
            WriteFailurePolicy::Ignore => {
                let _ = writeln!(stderr, "Warning: event not logged: {}", e);
                EXIT_SUCCESS
            }
        },
    }
}

fn log_event<R: Read>(log_file: &Path, stdin: R) -> Result<(), HookError> {
    let raw = read_payload(stdin)?;
    let entry = LogEntry::capture(&raw);
    if entry.is_parse_failure() {
        tracing::warn!("Input is not a JSON object; logging it as raw input");
    }
    EventLog::new(log_file).append(&entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_policy() {
        let config = LoggerConfig {
            on_error: WriteFailurePolicy::Ignore,
        };
        assert_eq!(resolve_policy(None, &config), WriteFailurePolicy::Ignore);
        assert_eq!(
            resolve_policy(Some(OnError::Fail), &config),
            WriteFailurePolicy::Fail
        );
        assert_eq!(
            resolve_policy(None, &LoggerConfig::default()),
            WriteFailurePolicy::Fail
        );
    }
}

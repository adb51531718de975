//! Append-only JSON-Lines log of hook events.
//!
//! Every invocation produces exactly one line. A payload that is not a JSON
//! object is never dropped: it is recorded as a diagnostic entry carrying
//! the raw input, so the log stays valid JSON-Lines either way.
//!
//! Concurrent hook processes may append to the same file. Each entry is
//! written with a single `write_all` on a handle opened in append mode; no
//! lock is taken.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HookError;

/// Key reserved for the capture time.
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Key holding the parse diagnostic in a fallback entry.
pub const ERROR_KEY: &str = "error";

/// Key holding the original stdin text in a fallback entry.
pub const RAW_INPUT_KEY: &str = "raw_input";

/// What the logger does when the entry cannot be stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteFailurePolicy {
    /// Report the error and exit non-zero.
    #[default]
    Fail,
    /// Report the error as a warning and exit zero.
    Ignore,
}

impl std::fmt::Display for WriteFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteFailurePolicy::Fail => write!(f, "fail"),
            WriteFailurePolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// Format a capture time: RFC 3339, microseconds, `+00:00` offset.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// One record destined for the log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    fields: Map<String, Value>,
    parse_failed: bool,
}

impl LogEntry {
    /// Build the entry for a raw stdin payload captured now.
    pub fn capture(raw: &str) -> Self {
        Self::from_input(raw, Utc::now())
    }

    /// Build the entry for a raw stdin payload captured at `now`.
    ///
    /// A JSON object keeps its keys in input order and gains (or has
    /// overwritten) `timestamp`. Anything else becomes a fallback entry.
    pub fn from_input(raw: &str, now: DateTime<Utc>) -> Self {
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(Value::Object(mut fields)) => {
                fields.insert(
                    TIMESTAMP_KEY.to_string(),
                    Value::String(format_timestamp(now)),
                );
                Self {
                    fields,
                    parse_failed: false,
                }
            }
            Ok(other) => Self::parse_failure(
                &format!("expected a JSON object, found {}", json_kind(&other)),
                raw,
                now,
            ),
            Err(e) => Self::parse_failure(&e.to_string(), raw, now),
        }
    }

    /// Build the diagnostic entry `{timestamp, error, raw_input}`.
    pub fn parse_failure(reason: &str, raw: &str, now: DateTime<Utc>) -> Self {
        let mut fields = Map::new();
        fields.insert(
            TIMESTAMP_KEY.to_string(),
            Value::String(format_timestamp(now)),
        );
        fields.insert(
            ERROR_KEY.to_string(),
            Value::String(format!("Failed to parse JSON: {}", reason)),
        );
        fields.insert(RAW_INPUT_KEY.to_string(), Value::String(raw.to_string()));
        Self {
            fields,
            parse_failed: true,
        }
    }

    /// The entry's fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// True for a diagnostic entry built from unparsable input.
    pub fn is_parse_failure(&self) -> bool {
        self.parse_failed
    }

    /// Serialize as one JSON-Lines record, newline included.
    pub fn to_line(&self) -> Result<String, HookError> {
        let mut line = serde_json::to_string(&self.fields)?;
        line.push('\n');
        Ok(line)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A JSON-Lines file that only ever grows.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// A log at `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one entry, creating the parent directories and file as needed.
    pub fn append(&self, entry: &LogEntry) -> Result<(), HookError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| HookError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let line = entry.to_line()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.append_error(source))?;
        file.write_all(line.as_bytes())
            .map_err(|source| self.append_error(source))?;

        tracing::debug!(
            path = %self.path.display(),
            parse_failure = entry.is_parse_failure(),
            "Appended hook event"
        );
        Ok(())
    }

    fn append_error(&self, source: std::io::Error) -> HookError {
        HookError::Append {
            path: self.path.clone(),
            source,
        }
    }
}

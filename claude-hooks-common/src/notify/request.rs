//! Notification title and message derivation.

use std::io::Read;

use serde_json::{Map, Value};

use crate::error::HookError;
use crate::input::read_payload;

/// Message used when the payload carries nothing worth showing.
pub const DEFAULT_MESSAGE: &str = "Hook executed";

/// Title used when the payload could not be understood.
pub const FALLBACK_TITLE_SUFFIX: &str = "Hook";

/// Longest command shown verbatim, in characters.
pub const MAX_COMMAND_CHARS: usize = 50;

const TRUNCATED_COMMAND_CHARS: usize = MAX_COMMAND_CHARS - ELLIPSIS.len();
const ELLIPSIS: &str = "...";

/// Values supplied with `--title` / `--message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationOverrides {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl NotificationOverrides {
    /// The overrides with empty values dropped; `--title ""` counts as absent.
    pub fn non_empty(&self) -> Self {
        let keep = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        Self {
            title: keep(&self.title),
            message: keep(&self.message),
        }
    }
}

/// A notification ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The request fully determined by flags, if both were given.
    pub fn explicit(overrides: &NotificationOverrides) -> Option<Self> {
        match overrides.non_empty() {
            NotificationOverrides {
                title: Some(title),
                message: Some(message),
            } => Some(Self::new(title, message)),
            _ => None,
        }
    }

    /// Resolve the request for one hook invocation.
    ///
    /// stdin is only read when the flags do not already fix both fields.
    /// Never fails: unreadable or unparsable input yields a fallback request
    /// describing the problem.
    pub fn resolve<R: Read>(overrides: &NotificationOverrides, stdin: R, product: &str) -> Self {
        if let Some(request) = Self::explicit(overrides) {
            return request;
        }

        let derived = read_payload(stdin)
            .and_then(|raw| Self::from_payload(&raw, overrides, product));

        match derived {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Could not derive notification from input: {}", e);
                Self::fallback(&e, overrides, product)
            }
        }
    }

    /// Derive the request from stdin text.
    pub fn from_payload(
        raw: &str,
        overrides: &NotificationOverrides,
        product: &str,
    ) -> Result<Self, HookError> {
        let overrides = &overrides.non_empty();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new(
                overrides.title.clone().unwrap_or_else(|| product.to_string()),
                overrides
                    .message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            ));
        }

        let data = match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            _ => {
                return Err(HookError::InvalidInput(
                    "expected a JSON object".to_string(),
                ))
            }
        };

        let title = match &overrides.title {
            Some(title) => title.clone(),
            None => {
                let tool = field_text(&data, "tool").unwrap_or_else(|| "Unknown".to_string());
                format!("{}: {}", product, tool)
            }
        };

        let message = match &overrides.message {
            Some(message) => message.clone(),
            None => summarize(&data),
        };

        Ok(Self::new(title, message))
    }

    /// The request shown when derivation failed.
    pub fn fallback(error: &HookError, overrides: &NotificationOverrides, product: &str) -> Self {
        let overrides = &overrides.non_empty();
        let title = overrides
            .title
            .clone()
            .unwrap_or_else(|| format!("{} {}", product, FALLBACK_TITLE_SUFFIX));
        let message = overrides.message.clone().unwrap_or_else(|| match error {
            HookError::Json(e) => format!("JSON parse error: {}", e),
            other => format!("Error: {}", other),
        });
        Self::new(title, message)
    }
}

/// `Command: <command> | Status: <status>`, skipping empty parts.
fn summarize(data: &Map<String, Value>) -> String {
    let mut parts = Vec::new();

    if let Some(command) = field_text(data, "command").filter(|c| !c.is_empty()) {
        parts.push(format!("Command: {}", truncate_command(&command)));
    }
    if let Some(status) = field_text(data, "status").filter(|s| !s.is_empty()) {
        parts.push(format!("Status: {}", status));
    }

    if parts.is_empty() {
        DEFAULT_MESSAGE.to_string()
    } else {
        parts.join(" | ")
    }
}

/// A field as display text. `null` and missing are both absent.
fn field_text(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Shorten a command to at most [`MAX_COMMAND_CHARS`] characters.
pub fn truncate_command(command: &str) -> String {
    if command.chars().count() > MAX_COMMAND_CHARS {
        let mut short: String = command.chars().take(TRUNCATED_COMMAND_CHARS).collect();
        short.push_str(ELLIPSIS);
        short
    } else {
        command.to_string()
    }
}

//! File path extraction from lint hook payloads.
//!
//! Accepted shapes, tried in order by key presence:
//!
//! ```json
//! {"files": ["a.py", "b.py"]}
//! {"file": "a.py"}
//! {"file_path": "a.py"}
//! {"tool_input": {"file_path": "a.py"}}
//! ["a.py", "b.py"]
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::HookError;

/// Parse stdin text and extract its file list.
///
/// Fails with [`HookError::EmptyInput`] for blank input, [`HookError::Json`]
/// for unparsable input and [`HookError::NoFiles`] when no path is found.
pub fn parse_request(raw: &str) -> Result<Vec<String>, HookError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(HookError::EmptyInput);
    }

    let value: Value = serde_json::from_str(raw)?;
    let files = extract_files(&value);
    if files.is_empty() {
        return Err(HookError::NoFiles);
    }
    Ok(files)
}

/// The file paths named by a payload, in input order.
///
/// The first key present decides the shape: `{"files": [], "file": "a.py"}`
/// yields nothing. Non-string list entries are skipped.
pub fn extract_files(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => {
            if let Some(files) = map.get("files") {
                paths(files)
            } else if let Some(file) = map.get("file") {
                paths(file)
            } else if let Some(file) = map.get("file_path") {
                paths(file)
            } else if let Some(file) = map.get("tool_input").and_then(|t| t.get("file_path")) {
                paths(file)
            } else {
                Vec::new()
            }
        }
        Value::Array(_) => paths(value),
        _ => Vec::new(),
    }
}

fn paths(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                other => {
                    tracing::debug!("Skipping non-string file entry: {}", other);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// True when `path` ends in one of `extensions` (given with or without the dot).
pub fn has_extension(path: &str, extensions: &[String]) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.') == ext)
        })
}

/// Keep only paths with a recognized extension, preserving order.
pub fn filter_by_extension(files: &[String], extensions: &[String]) -> Vec<String> {
    files
        .iter()
        .filter(|path| has_extension(path, extensions))
        .cloned()
        .collect()
}

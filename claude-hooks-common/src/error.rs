//! Error types for the hooks crate.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for hook operations.
#[derive(Debug, Error)]
pub enum HookError {
    /// IO error during stdin/stdout operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The hook received nothing on stdin.
    #[error("No input data provided")]
    EmptyInput,

    /// The input parsed, but named no file paths.
    #[error("No files found in input data")]
    NoFiles,

    /// The input parsed, but does not have the expected shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The parent directory of the log file could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The log file could not be opened or written.
    #[error("Failed to append to {}: {source}", path.display())]
    Append {
        /// The log file.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// An external program is not on the PATH.
    #[error("{program} is not installed")]
    ToolNotFound {
        /// The program that was looked up.
        program: String,
    },

    /// An external program could not be started.
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// An external program ran but reported failure.
    #[error("{program} exited with {status}")]
    CommandFailed {
        /// The program that failed.
        program: String,
        /// Human-readable exit status.
        status: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

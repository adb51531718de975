//! External process execution.
//!
//! Every hook that shells out goes through [`CommandRunner`] so tests can
//! substitute a recording fake (see [`crate::testing::ScriptedRunner`]).

use std::process::{Command, Stdio};

use crate::error::HookError;

/// Captured result of one external process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    /// Everything the process wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything the process wrote to stderr.
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// An output with the given exit code and no captured streams.
    pub fn exited(code: i32) -> Self {
        Self {
            status: Some(code),
            ..Default::default()
        }
    }

    /// Replace the captured stdout.
    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Replace the captured stderr.
    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    /// True when the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Exit status rendered for diagnostics.
    pub fn status_text(&self) -> String {
        match self.status {
            Some(code) => format!("exit status {}", code),
            None => "no exit status (terminated by signal)".to_string(),
        }
    }
}

/// Runs an external program to completion and captures its output.
pub trait CommandRunner {
    /// Run `program` with `args`.
    ///
    /// Returns [`HookError::ToolNotFound`] when the program cannot be found
    /// and [`HookError::Spawn`] when it exists but cannot be started. A
    /// non-zero exit is *not* an error; inspect [`CommandOutput::status`].
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, HookError>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
///
/// Arguments are passed to the program directly; no shell is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, HookError> {
        let resolved = which::which(program).map_err(|_| HookError::ToolNotFound {
            program: program.to_string(),
        })?;

        tracing::debug!(program = %resolved.display(), ?args, "Running external command");

        let output = Command::new(&resolved)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HookError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

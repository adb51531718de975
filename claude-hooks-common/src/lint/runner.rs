//! External linter invocation.

use crate::config::LintConfig;
use crate::error::HookError;
use crate::lint::request::filter_by_extension;
use crate::process::{CommandOutput, CommandRunner};

/// Whether the linter only reports or also applies safe fixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LintMode {
    #[default]
    Check,
    Fix,
}

impl LintMode {
    /// Linter arguments preceding the file list.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            LintMode::Check => &["check"],
            LintMode::Fix => &["check", "--fix"],
        }
    }
}

impl std::fmt::Display for LintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintMode::Check => write!(f, "check"),
            LintMode::Fix => write!(f, "fix"),
        }
    }
}

/// Result of gating a file list through the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// No file had a recognized extension; the linter was not run.
    NoApplicableFiles,
    /// The linter exited 0.
    Clean { files: usize },
    /// The linter exited non-zero.
    IssuesFound { files: usize },
}

impl LintOutcome {
    /// True unless the linter reported issues.
    pub fn success(&self) -> bool {
        !matches!(self, LintOutcome::IssuesFound { .. })
    }
}

/// Outcome plus everything the linter printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub outcome: LintOutcome,
    pub output: CommandOutput,
}

/// Runs the configured linter against files.
pub struct LintRunner<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a LintConfig,
}

impl<'a, R: CommandRunner> LintRunner<'a, R> {
    pub fn new(runner: &'a R, config: &'a LintConfig) -> Self {
        Self { runner, config }
    }

    /// The linter executable name.
    pub fn program(&self) -> &str {
        &self.config.program
    }

    /// Check the linter can be invoked (`<program> --version`).
    pub fn probe(&self) -> Result<(), HookError> {
        let not_found = || HookError::ToolNotFound {
            program: self.config.program.clone(),
        };
        match self.runner.run(&self.config.program, &["--version".to_string()]) {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => {
                tracing::debug!("{} --version failed with {}", self.config.program, output.status_text());
                Err(not_found())
            }
            Err(e) => {
                tracing::debug!("{} probe failed: {}", self.config.program, e);
                Err(not_found())
            }
        }
    }

    /// Files the linter applies to.
    pub fn applicable_files(&self, files: &[String]) -> Vec<String> {
        filter_by_extension(files, &self.config.extensions)
    }

    /// Probe the linter, then [`lint`](Self::lint) `files` in `mode`.
    ///
    /// Returns [`HookError::ToolNotFound`] when the probe fails.
    pub fn run(&self, files: &[String], mode: LintMode) -> Result<LintReport, HookError> {
        self.probe()?;
        self.lint(files, mode)
    }

    /// Filter `files` and run the linter on what remains.
    ///
    /// The linter is not started when nothing remains.
    pub fn lint(&self, files: &[String], mode: LintMode) -> Result<LintReport, HookError> {
        let files = self.applicable_files(files);
        if files.is_empty() {
            tracing::debug!("No files with extensions {:?}", self.config.extensions);
            return Ok(LintReport {
                outcome: LintOutcome::NoApplicableFiles,
                output: CommandOutput::default(),
            });
        }

        let mut args: Vec<String> = mode.args().iter().map(|a| a.to_string()).collect();
        args.extend(files.iter().cloned());

        let output = self.runner.run(&self.config.program, &args)?;
        let count = files.len();
        let outcome = if output.success() {
            LintOutcome::Clean { files: count }
        } else {
            LintOutcome::IssuesFound { files: count }
        };

        tracing::debug!(mode = %mode, files = count, ?outcome, "Lint finished");
        Ok(LintReport { outcome, output })
    }

    fn no_files_message(&self) -> String {
        let extensions: Vec<&str> = self
            .config
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();
        if extensions == ["py"] {
            return "No Python files found to process".to_string();
        }
        let listed: Vec<String> = extensions.iter().map(|ext| format!(".{}", ext)).collect();
        format!("No {} files found to process", listed.join("/"))
    }

    /// One-line summary for a finished run.
    pub fn summary(&self, outcome: &LintOutcome, mode: LintMode) -> String {
        match outcome {
            LintOutcome::NoApplicableFiles => self.no_files_message(),
            LintOutcome::Clean { files } => format!(
                "✓ {} {} completed successfully on {} file(s)",
                self.config.program, mode, files
            ),
            LintOutcome::IssuesFound { files } => format!(
                "✗ {} {} found issues in {} file(s)",
                self.config.program, mode, files
            ),
        }
    }
}

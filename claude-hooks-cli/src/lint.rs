//! `hook-lint`: run the linter on the files named by the stdin event.
//!
//! Unlike the other hooks this one propagates failure: its exit code gates
//! the calling workflow.
//!
//! | Situation                         | stream | exit |
//! |-----------------------------------|--------|------|
//! | blank stdin                       | stderr | 1    |
//! | unparsable JSON                   | stderr | 1    |
//! | no file paths in the payload      | stderr | 1    |
//! | linter not installed              | stderr | 1    |
//! | no file with a known extension    | stdout | 0    |
//! | linter exit 0                     | stdout | 0    |
//! | linter exit non-zero              | stdout | 1    |
//! | linter could not be run           | stderr | 1    |

use std::io::{Read, Write};

use claude_hooks_common::input::read_payload;
use claude_hooks_common::lint::parse_request;
use claude_hooks_common::{CommandRunner, HookError, LintConfig, LintMode, LintRunner};

use crate::cli::LintCli;
use crate::{EXIT_FAILURE, EXIT_SUCCESS};

impl LintCli {
    /// `--fix` wins; check is the default.
    pub fn mode(&self) -> LintMode {
        if self.fix {
            LintMode::Fix
        } else {
            LintMode::Check
        }
    }
}

/// Run the lint hook and return its exit code.
///
/// The linter's own stdout and stderr are relayed byte for byte before the
/// summary line.
pub fn run_lint_hook<R, W, E, C>(
    mode: LintMode,
    stdin: R,
    runner: &C,
    config: &LintConfig,
    stdout: &mut W,
    stderr: &mut E,
) -> i32
where
    R: Read,
    W: Write,
    E: Write,
    C: CommandRunner,
{
    let files = match read_payload(stdin).and_then(|raw| parse_request(&raw)) {
        Ok(files) => files,
        Err(e) => {
            let _ = writeln!(stderr, "{}", input_error_message(&e));
            return EXIT_FAILURE;
        }
    };
    tracing::debug!(?files, %mode, "Lint request");

    let lint = LintRunner::new(runner, config);

    let report = match lint.run(&files, mode) {
        Ok(report) => report,
        Err(HookError::ToolNotFound { .. }) => {
            let _ = writeln!(
                stderr,
                "Error: {} is not installed. Install with: {}",
                lint.program(),
                config.install_hint
            );
            return EXIT_FAILURE;
        }
        Err(e) => {
            let _ = writeln!(stderr, "Error running {}: {}", lint.program(), e);
            return EXIT_FAILURE;
        }
    };

    let _ = stdout.write_all(&report.output.stdout);
    let _ = stderr.write_all(&report.output.stderr);
    let _ = writeln!(stdout, "{}", lint.summary(&report.outcome, mode));
    let _ = stdout.flush();

    if report.outcome.success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

fn input_error_message(error: &HookError) -> String {
    match error {
        HookError::Json(e) => format!("Error parsing JSON input: {}", e),
        HookError::EmptyInput | HookError::NoFiles => error.to_string(),
        other => format!("Error: {}", other),
    }
}

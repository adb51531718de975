//! `hook-lint` - run the linter on files named by a Claude Code hook event.
//!
//! Exit codes:
//! - 0: Lint clean, or no file with a recognized extension
//! - 1: Lint issues, invalid input, or linter unavailable

use std::io;

use clap::Parser;

use claude_hooks::lint::run_lint_hook;
use claude_hooks::logging::init_tracing;
use claude_hooks::{HooksConfig, LintCli, SystemCommandRunner};

fn main() {
    let cli = LintCli::parse();
    init_tracing(cli.debug);

    let config = HooksConfig::load();

    let exit_code = run_lint_hook(
        cli.mode(),
        io::stdin().lock(),
        &SystemCommandRunner,
        &config.lint,
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(exit_code);
}

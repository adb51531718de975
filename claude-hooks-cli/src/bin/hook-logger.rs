//! `hook-logger` - append a Claude Code hook event to a JSON-Lines file.
//!
//! Exit codes:
//! - 0: Event logged (or storage fault ignored by policy)
//! - 1: Storage fault under the `fail` policy

use std::io;

use clap::Parser;

use claude_hooks::logger::{resolve_policy, run_logger_hook};
use claude_hooks::logging::init_tracing;
use claude_hooks::{HooksConfig, LoggerCli};

fn main() {
    let cli = LoggerCli::parse();
    init_tracing(cli.debug);

    let config = HooksConfig::load();
    let policy = resolve_policy(cli.on_error, &config.logger);

    let exit_code = run_logger_hook(
        &cli.log_file,
        policy,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    std::process::exit(exit_code);
}

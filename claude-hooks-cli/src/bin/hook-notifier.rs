//! `hook-notifier` - show a desktop notification for a Claude Code hook event.
//!
//! Always exits 0: a notification that cannot be shown is reported on
//! stderr, never to the calling host as a failure.

use std::io;

use clap::Parser;

use claude_hooks::logging::init_tracing;
use claude_hooks::notifier::run_notifier_hook;
use claude_hooks::{
    HooksConfig, NotificationOverrides, NotifierCli, ProcessTableResolver, SystemCommandRunner,
};

fn main() {
    let cli = NotifierCli::parse();
    init_tracing(cli.debug);

    let config = HooksConfig::load();
    let runner = SystemCommandRunner;

    let exit_code = run_notifier_hook(
        &NotificationOverrides::from(&cli),
        io::stdin().lock(),
        &runner,
        ProcessTableResolver::new(&runner),
        &config.notifier,
        &mut io::stderr(),
    );
    std::process::exit(exit_code);
}

//! `hook-notifier`: show a desktop notification for the stdin event.
//!
//! This hook never fails its caller: every problem ends in either a
//! fallback notification or a message on stderr, and the exit code is 0.

use std::io::{Read, Write};

use claude_hooks_common::{
    CommandRunner, NotificationOverrides, NotificationRequest, Notifier, NotifierConfig,
    TerminalResolver,
};

use crate::cli::NotifierCli;
use crate::EXIT_SUCCESS;

impl From<&NotifierCli> for NotificationOverrides {
    fn from(cli: &NotifierCli) -> Self {
        Self {
            title: cli.title.clone(),
            message: cli.message.clone(),
        }
    }
}

/// Run the notifier hook and return its exit code (always 0).
pub fn run_notifier_hook<R, E, C, T>(
    overrides: &NotificationOverrides,
    stdin: R,
    runner: &C,
    resolver: T,
    config: &NotifierConfig,
    stderr: &mut E,
) -> i32
where
    R: Read,
    E: Write,
    C: CommandRunner,
    T: TerminalResolver,
{
    let request = NotificationRequest::resolve(overrides, stdin, &config.product);
    tracing::debug!(title = %request.title, message = %request.message, "Dispatching notification");

    let notifier = Notifier::new(runner, resolver, config);
    if let Err(e) = notifier.notify(&request) {
        let _ = writeln!(stderr, "Failed to show notification: {}", e);
    }
    EXIT_SUCCESS
}

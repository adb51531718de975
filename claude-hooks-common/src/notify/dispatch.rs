//! Notification delivery.
//!
//! The primary tool (`terminal-notifier`) is tried first. When it is missing
//! or exits non-zero, the scripting host (`osascript`) displays the
//! notification instead. Title and message are untrusted: they reach the
//! script as `argv` items of an `on run argv` handler and are never spliced
//! into script or shell text.

use crate::config::NotifierConfig;
use crate::error::HookError;
use crate::notify::request::NotificationRequest;
use crate::notify::terminal::{parent_pid, TerminalResolver};
use crate::process::CommandRunner;

/// Script lines for the fallback; `argv` is (title, message, sound).
const FALLBACK_SCRIPT: [&str; 3] = [
    "on run argv",
    "display notification (item 2 of argv) with title (item 1 of argv) sound name (item 3 of argv)",
    "end run",
];

/// Which mechanism delivered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Primary,
    Fallback,
}

/// Dispatches notifications through external programs.
pub struct Notifier<'a, R: CommandRunner, T: TerminalResolver> {
    runner: &'a R,
    resolver: T,
    config: &'a NotifierConfig,
}

impl<'a, R: CommandRunner, T: TerminalResolver> Notifier<'a, R, T> {
    pub fn new(runner: &'a R, resolver: T, config: &'a NotifierConfig) -> Self {
        Self {
            runner,
            resolver,
            config,
        }
    }

    /// Bundle id to activate when the notification is clicked.
    pub fn activation_target(&self) -> String {
        parent_pid()
            .and_then(|pid| self.resolver.resolve(pid))
            .map(|app| app.bundle_id().to_string())
            .unwrap_or_else(|| self.config.default_bundle_id.clone())
    }

    /// Show `request`, trying the primary tool and then the fallback.
    ///
    /// Returns an error only when both mechanisms failed.
    pub fn notify(&self, request: &NotificationRequest) -> Result<Delivery, HookError> {
        let target = self.activation_target();
        let primary = &self.config.primary_tool;

        match self
            .runner
            .run(primary, &primary_args(request, &self.config.sound, &target))
        {
            Ok(output) if output.success() => {
                tracing::debug!(tool = %primary, target = %target, "Notification delivered");
                return Ok(Delivery::Primary);
            }
            Ok(output) => {
                tracing::debug!("{} failed with {}; falling back", primary, output.status_text())
            }
            Err(e) => tracing::debug!("{}; falling back", e),
        }

        let fallback = &self.config.fallback_tool;
        let output = self
            .runner
            .run(fallback, &fallback_args(request, &self.config.sound))?;
        if output.success() {
            tracing::debug!(tool = %fallback, "Notification delivered");
            Ok(Delivery::Fallback)
        } else {
            Err(HookError::CommandFailed {
                program: fallback.clone(),
                status: output.status_text(),
            })
        }
    }
}

/// Arguments for `terminal-notifier`.
pub fn primary_args(request: &NotificationRequest, sound: &str, target: &str) -> Vec<String> {
    vec![
        "-title".to_string(),
        request.title.clone(),
        "-message".to_string(),
        request.message.clone(),
        "-sound".to_string(),
        sound.to_string(),
        "-activate".to_string(),
        target.to_string(),
    ]
}

/// Arguments for `osascript`: the fixed script, then the untrusted values.
pub fn fallback_args(request: &NotificationRequest, sound: &str) -> Vec<String> {
    let mut args = Vec::with_capacity(FALLBACK_SCRIPT.len() * 2 + 3);
    for line in FALLBACK_SCRIPT {
        args.push("-e".to_string());
        args.push(line.to_string());
    }
    args.push(request.title.clone());
    args.push(request.message.clone());
    args.push(sound.to_string());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::terminal::TerminalApp;
    use crate::process::CommandOutput;
    use crate::testing::ScriptedRunner;

    fn request() -> NotificationRequest {
        NotificationRequest::new("Claude Code: Bash", "Command: ls | Status: ok")
    }

    fn kitty(_pid: u32) -> Option<TerminalApp> {
        Some(TerminalApp::Kitty)
    }

    fn unknown(_pid: u32) -> Option<TerminalApp> {
        None
    }

    #[cfg(unix)]
    #[test]
    fn test_primary_tool_used_when_available() {
        let config = NotifierConfig::default();
        let runner = ScriptedRunner::new().respond("terminal-notifier", CommandOutput::exited(0));
        let notifier = Notifier::new(&runner, kitty, &config);

        assert_eq!(notifier.notify(&request()).unwrap(), Delivery::Primary);
        assert!(runner.calls_to("osascript").is_empty());

        let calls = runner.calls_to("terminal-notifier");
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].args,
            vec![
                "-title",
                "Claude Code: Bash",
                "-message",
                "Command: ls | Status: ok",
                "-sound",
                "default",
                "-activate",
                "net.kovidgoyal.kitty",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unknown_terminal_uses_default_target() {
        let config = NotifierConfig::default();
        let runner = ScriptedRunner::new();
        let notifier = Notifier::new(&runner, unknown, &config);
        assert_eq!(notifier.activation_target(), "org.alacritty");
    }

    #[test]
    fn test_missing_primary_falls_back() {
        let config = NotifierConfig::default();
        let runner = ScriptedRunner::new().respond("osascript", CommandOutput::exited(0));
        let notifier = Notifier::new(&runner, unknown, &config);

        assert_eq!(notifier.notify(&request()).unwrap(), Delivery::Fallback);
        assert_eq!(runner.calls_to("terminal-notifier").len(), 1);
        assert_eq!(runner.calls_to("osascript").len(), 1);
    }

    #[test]
    fn test_failing_primary_falls_back() {
        let config = NotifierConfig::default();
        let runner = ScriptedRunner::new()
            .respond("terminal-notifier", CommandOutput::exited(1))
            .respond("osascript", CommandOutput::exited(0));
        let notifier = Notifier::new(&runner, unknown, &config);

        assert_eq!(notifier.notify(&request()).unwrap(), Delivery::Fallback);
    }

    #[test]
    fn test_both_failing_is_an_error() {
        let config = NotifierConfig::default();
        let runner = ScriptedRunner::new().respond("osascript", CommandOutput::exited(1));
        let notifier = Notifier::new(&runner, unknown, &config);

        let err = notifier.notify(&request()).unwrap_err();
        assert!(matches!(err, HookError::CommandFailed { ref program, .. } if program == "osascript"));
    }

    #[test]
    fn test_fallback_passes_values_as_arguments() {
        let hostile = NotificationRequest::new(
            "\" & do shell script \"rm -rf ~\" & \"",
            "it's $(whoami) `id` \\\"",
        );
        let args = fallback_args(&hostile, "default");

        // The script text is fixed regardless of the values.
        let script: Vec<&str> = args
            .iter()
            .skip(1)
            .step_by(2)
            .take(FALLBACK_SCRIPT.len())
            .map(String::as_str)
            .collect();
        assert_eq!(script, FALLBACK_SCRIPT.to_vec());

        // The values follow verbatim as separate arguments.
        let tail = &args[FALLBACK_SCRIPT.len() * 2..];
        assert_eq!(tail[0], hostile.title);
        assert_eq!(tail[1], hostile.message);
        assert_eq!(tail[2], "default");
    }
}

//! Terminal application detection.
//!
//! Notifications carry an activation target so clicking one focuses the
//! terminal that ran the hook. The terminal is recognized from the parent
//! process's command name.

use crate::process::CommandRunner;

/// A terminal application the notifier knows how to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalApp {
    Alacritty,
    ITerm2,
    AppleTerminal,
    Kitty,
    WezTerm,
}

impl TerminalApp {
    /// The macOS bundle identifier used as activation target.
    pub fn bundle_id(self) -> &'static str {
        match self {
            TerminalApp::Alacritty => "org.alacritty",
            TerminalApp::ITerm2 => "com.googlecode.iterm2",
            TerminalApp::AppleTerminal => "com.apple.Terminal",
            TerminalApp::Kitty => "net.kovidgoyal.kitty",
            TerminalApp::WezTerm => "com.github.wez.wezterm",
        }
    }
}

/// Process-name substrings and the terminal each identifies, checked in order.
pub static TERMINAL_PATTERNS: &[(&str, TerminalApp)] = &[
    ("alacritty", TerminalApp::Alacritty),
    ("iterm", TerminalApp::ITerm2),
    ("iterm2", TerminalApp::ITerm2),
    ("terminal", TerminalApp::AppleTerminal),
    ("kitty", TerminalApp::Kitty),
    ("wezterm", TerminalApp::WezTerm),
];

/// Match a process command name against [`TERMINAL_PATTERNS`], ignoring case.
pub fn match_process_name(name: &str) -> Option<TerminalApp> {
    let name = name.to_lowercase();
    TERMINAL_PATTERNS
        .iter()
        .find(|(pattern, _)| name.contains(pattern))
        .map(|(_, app)| *app)
}

/// Identifies the terminal behind a process id.
pub trait TerminalResolver {
    /// The recognized terminal for `parent_pid`, or `None` if unknown.
    fn resolve(&self, parent_pid: u32) -> Option<TerminalApp>;
}

impl<F> TerminalResolver for F
where
    F: Fn(u32) -> Option<TerminalApp>,
{
    fn resolve(&self, parent_pid: u32) -> Option<TerminalApp> {
        self(parent_pid)
    }
}

/// Resolves the terminal with `ps -p <pid> -o comm=`.
#[derive(Debug)]
pub struct ProcessTableResolver<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> ProcessTableResolver<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> TerminalResolver for ProcessTableResolver<'_, R> {
    fn resolve(&self, parent_pid: u32) -> Option<TerminalApp> {
        let args = [
            "-p".to_string(),
            parent_pid.to_string(),
            "-o".to_string(),
            "comm=".to_string(),
        ];

        match self.runner.run("ps", &args) {
            Ok(output) if output.success() => {
                let name = String::from_utf8_lossy(&output.stdout);
                let app = match_process_name(name.trim());
                tracing::debug!(process = %name.trim(), terminal = ?app, "Resolved parent process");
                app
            }
            Ok(output) => {
                tracing::debug!("ps failed with {}", output.status_text());
                None
            }
            Err(e) => {
                tracing::debug!("ps unavailable: {}", e);
                None
            }
        }
    }
}

/// The id of the process that launched this hook.
pub fn parent_pid() -> Option<u32> {
    #[cfg(unix)]
    {
        Some(std::os::unix::process::parent_id())
    }
    #[cfg(not(unix))]
    {
        None
    }
}

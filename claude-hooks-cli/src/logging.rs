//! Tracing setup shared by the hook binaries.
//!
//! Diagnostics always go to stderr: stdout belongs to the hook's result line.

use tracing_subscriber::EnvFilter;

/// Filter used with `--debug`.
const DEBUG_FILTER: &str = "claude_hooks=debug,claude_hooks_common=debug";

/// Build the filter: `--debug` wins, then `RUST_LOG`, then `warn`.
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(false);
        init_tracing(true);
    }
}

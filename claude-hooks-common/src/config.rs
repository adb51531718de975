//! Layered hook configuration using Figment.
//!
//! Sources, later overriding earlier:
//! 1. Built-in defaults
//! 2. TOML file at `$CLAUDE_HOOKS_CONFIG`, else `<config dir>/claude-hooks/config.toml`
//! 3. Environment variables prefixed `CLAUDE_HOOKS_`, nested with `__`
//!    (e.g. `CLAUDE_HOOKS_LINT__PROGRAM=ruff`)
//!
//! Command line flags are applied by the binaries on top of the result.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HookError;
use crate::event_log::WriteFailurePolicy;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CLAUDE_HOOKS_CONFIG";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CLAUDE_HOOKS_";

/// Settings for all three hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Event logger settings.
    pub logger: LoggerConfig,
    /// Notifier settings.
    pub notifier: NotifierConfig,
    /// Lint runner settings.
    pub lint: LintConfig,
}

/// Event logger settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// What to do when the log file cannot be written.
    pub on_error: WriteFailurePolicy,
}

/// Notifier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Product name used in derived titles ("<product>: <tool>").
    pub product: String,
    /// Sound name passed to both notification mechanisms.
    pub sound: String,
    /// Preferred notification program.
    pub primary_tool: String,
    /// Scripting program used when the primary one fails.
    pub fallback_tool: String,
    /// Activation target when the terminal cannot be detected.
    pub default_bundle_id: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            product: "Claude Code".to_string(),
            sound: "default".to_string(),
            primary_tool: "terminal-notifier".to_string(),
            fallback_tool: "osascript".to_string(),
            default_bundle_id: "org.alacritty".to_string(),
        }
    }
}

/// Lint runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Linter executable.
    pub program: String,
    /// Shown when the linter is not installed.
    pub install_hint: String,
    /// Recognized source extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            program: "ruff".to_string(),
            install_hint: "pip install ruff".to_string(),
            extensions: vec!["py".to_string()],
        }
    }
}

impl HooksConfig {
    /// Load configuration, falling back to defaults on any error.
    ///
    /// A broken file only produces a warning.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    /// Load configuration from all sources.
    pub fn try_load() -> Result<Self, HookError> {
        let path = Self::config_path();
        debug!(path = ?path, "Loading hook configuration");
        Self::figment(path)
            .extract()
            .map_err(|e| HookError::Config(e.to_string()))
    }

    /// The config file location, whether or not it exists.
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("claude-hooks").join("config.toml")),
        }
    }

    fn figment(path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(HooksConfig::default()));
        if let Some(path) = path {
            // A missing file contributes nothing.
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var(CONFIG_PATH_ENV);
        std::env::remove_var("CLAUDE_HOOKS_LINT__PROGRAM");
        std::env::remove_var("CLAUDE_HOOKS_LOGGER__ON_ERROR");
    }

    #[test]
    fn test_defaults() {
        let config = HooksConfig::default();
        assert_eq!(config.logger.on_error, WriteFailurePolicy::Fail);
        assert_eq!(config.notifier.product, "Claude Code");
        assert_eq!(config.notifier.primary_tool, "terminal-notifier");
        assert_eq!(config.notifier.fallback_tool, "osascript");
        assert_eq!(config.notifier.default_bundle_id, "org.alacritty");
        assert_eq!(config.lint.program, "ruff");
        assert_eq!(config.lint.extensions, vec!["py".to_string()]);
    }

    #[test]
    #[serial(env)]
    fn test_missing_file_gives_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        std::env::set_var(CONFIG_PATH_ENV, temp.path().join("absent.toml"));

        let config = HooksConfig::try_load().unwrap();

        clear_env();
        assert_eq!(config, HooksConfig::default());
    }

    #[test]
    #[serial(env)]
    fn test_file_overrides_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[logger]\non_error = \"ignore\"\n\n[lint]\nextensions = [\"py\", \"pyi\"]\n",
        )
        .unwrap();
        std::env::set_var(CONFIG_PATH_ENV, &path);

        let config = HooksConfig::try_load().unwrap();

        clear_env();
        assert_eq!(config.logger.on_error, WriteFailurePolicy::Ignore);
        assert_eq!(
            config.lint.extensions,
            vec!["py".to_string(), "pyi".to_string()]
        );
        assert_eq!(config.lint.program, "ruff");
    }

    #[test]
    #[serial(env)]
    fn test_env_overrides_file() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[lint]\nprogram = \"from-file\"\n").unwrap();
        std::env::set_var(CONFIG_PATH_ENV, &path);
        std::env::set_var("CLAUDE_HOOKS_LINT__PROGRAM", "from-env");

        let config = HooksConfig::try_load().unwrap();

        clear_env();
        assert_eq!(config.lint.program, "from-env");
    }

    #[test]
    #[serial(env)]
    fn test_broken_file_falls_back_to_defaults() {
        clear_env();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[logger]\non_error = \"explode\"\n").unwrap();
        std::env::set_var(CONFIG_PATH_ENV, &path);

        let strict = HooksConfig::try_load();
        let lenient = HooksConfig::load();

        clear_env();
        assert!(matches!(strict, Err(HookError::Config(_))));
        assert_eq!(lenient, HooksConfig::default());
    }
}

//! Startup configuration.
//!
//! Settings are resolved from defaults, then the environment, then
//! command-line flags, each layer overriding the previous one.

use std::path::PathBuf;

use crate::cli::CliOptions;
use crate::domain::ThemeMode;
use crate::error::{CalcpadError, CalcpadResult};

/// Environment variable selecting the initial theme (`light` / `dark`).
pub const THEME_ENV: &str = "CALCPAD_THEME";
/// Environment variable enabling file logging at the given path.
pub const LOG_FILE_ENV: &str = "CALCPAD_LOG_FILE";
/// Environment variable holding the `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "CALCPAD_LOG";

/// Configuration for launching the calculator.
///
/// # Example
///
/// ```
/// use calcpad::domain::ThemeMode;
/// use calcpad::startup::StartupConfig;
///
/// let config = StartupConfig::default().with_theme(ThemeMode::Dark);
/// assert_eq!(config.theme, ThemeMode::Dark);
/// assert!(config.log_file.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    /// Theme shown when the widget opens (default: light)
    pub theme: ThemeMode,
    /// Log destination; logging is disabled when unset
    pub log_file: Option<PathBuf>,
}

impl StartupConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    /// Enable logging to a file.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by `CALCPAD_THEME` and `CALCPAD_LOG_FILE`.
    pub fn from_env() -> CalcpadResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by the variables `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> CalcpadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(THEME_ENV).filter(|v| !v.trim().is_empty()) {
            config.theme = value
                .parse()
                .map_err(|_| CalcpadError::invalid_argument(THEME_ENV, value.clone()))?;
        }

        if let Some(path) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Apply command-line options on top of this config.
    pub fn merge_cli(mut self, options: &CliOptions) -> Self {
        if let Some(theme) = options.theme {
            self.theme = theme;
        }
        match &options.log {
            Some(Some(path)) => self.log_file = Some(path.clone()),
            // `--log` without a path: keep an env-provided path, else use the cache dir
            Some(None) if self.log_file.is_none() => self.log_file = default_log_path(),
            _ => {}
        }
        self
    }
}

/// `<cache dir>/calcpad/calcpad.log`, if the platform has a cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("calcpad").join("calcpad.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StartupConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StartupConfig::default());
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn test_env_overrides() {
        let config = StartupConfig::from_lookup(lookup_from(&[
            (THEME_ENV, "dark"),
            (LOG_FILE_ENV, "/tmp/calc.log"),
        ]))
        .unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/calc.log")));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config =
            StartupConfig::from_lookup(lookup_from(&[(THEME_ENV, "  "), (LOG_FILE_ENV, "")]))
                .unwrap();
        assert_eq!(config, StartupConfig::default());
    }

    #[test]
    fn test_invalid_env_theme_is_an_error() {
        let err = StartupConfig::from_lookup(lookup_from(&[(THEME_ENV, "sepia")])).unwrap_err();
        assert!(matches!(err, CalcpadError::InvalidArgument { ref flag, .. } if flag == THEME_ENV));
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = StartupConfig::default()
            .with_theme(ThemeMode::Dark)
            .with_log_file("/tmp/env.log");
        let options = CliOptions {
            theme: Some(ThemeMode::Light),
            log: Some(Some(PathBuf::from("/tmp/cli.log"))),
        };
        let config = env.merge_cli(&options);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/cli.log")));
    }

    #[test]
    fn test_bare_log_flag_keeps_env_path() {
        let env = StartupConfig::default().with_log_file("/tmp/env.log");
        let options = CliOptions {
            theme: None,
            log: Some(None),
        };
        assert_eq!(
            env.merge_cli(&options).log_file,
            Some(PathBuf::from("/tmp/env.log"))
        );
    }

    #[test]
    fn test_bare_log_flag_uses_default_path() {
        let options = CliOptions {
            theme: None,
            log: Some(None),
        };
        let config = StartupConfig::default().merge_cli(&options);
        assert_eq!(config.log_file, default_log_path());
    }

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("calcpad/calcpad.log"));
        }
    }
}

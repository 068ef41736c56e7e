//! Startup configuration from the process environment and CLI flags.

use calcpad::cli::{parse_args, CliCommand, CliOptions};
use calcpad::domain::ThemeMode;
use calcpad::error::{CalcpadError, ErrorCategory};
use calcpad::startup::{default_log_path, StartupConfig, LOG_FILE_ENV, THEME_ENV};
use serial_test::serial;
use std::path::PathBuf;

/// Remove both variables on drop so tests don't leak into each other.
struct EnvGuard;

impl EnvGuard {
    fn set(pairs: &[(&str, &str)]) -> Self {
        std::env::remove_var(THEME_ENV);
        std::env::remove_var(LOG_FILE_ENV);
        for (key, value) in pairs {
            std::env::set_var(key, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(THEME_ENV);
        std::env::remove_var(LOG_FILE_ENV);
    }
}

fn cli(args: &[&str]) -> CliOptions {
    let argv = std::iter::once("calcpad")
        .chain(args.iter().copied())
        .map(String::from);
    match parse_args(argv).unwrap() {
        CliCommand::RunTui(options) => options,
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    let _env = EnvGuard::set(&[]);
    let config = StartupConfig::from_env().unwrap();
    assert_eq!(config, StartupConfig::default());
    assert_eq!(config.theme, ThemeMode::Light);
}

#[test]
#[serial]
fn test_environment_sets_theme_and_log() {
    let _env = EnvGuard::set(&[(THEME_ENV, "dark"), (LOG_FILE_ENV, "/tmp/calcpad-test.log")]);
    let config = StartupConfig::from_env().unwrap();
    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/calcpad-test.log")));
}

#[test]
#[serial]
fn test_invalid_theme_in_environment_is_configuration_error() {
    let _env = EnvGuard::set(&[(THEME_ENV, "solarized")]);
    let err = StartupConfig::from_env().unwrap_err();
    assert!(matches!(err, CalcpadError::InvalidArgument { .. }));
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(err.user_message().contains("solarized"));
}

#[test]
#[serial]
fn test_cli_overrides_environment() {
    let _env = EnvGuard::set(&[(THEME_ENV, "dark"), (LOG_FILE_ENV, "/tmp/from-env.log")]);
    let config = StartupConfig::from_env()
        .unwrap()
        .merge_cli(&cli(&["--theme", "light", "--log", "/tmp/from-cli.log"]));
    assert_eq!(config.theme, ThemeMode::Light);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/from-cli.log")));
}

#[test]
#[serial]
fn test_bare_log_flag_keeps_environment_path() {
    let _env = EnvGuard::set(&[(LOG_FILE_ENV, "/tmp/from-env.log")]);
    let config = StartupConfig::from_env().unwrap().merge_cli(&cli(&["--log"]));
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/from-env.log")));
}

#[test]
#[serial]
fn test_bare_log_flag_falls_back_to_cache_dir() {
    let _env = EnvGuard::set(&[]);
    let config = StartupConfig::from_env().unwrap().merge_cli(&cli(&["--log"]));
    assert_eq!(config.log_file, default_log_path());
}

#[test]
fn test_invalid_theme_flag_is_rejected() {
    let argv = ["calcpad", "--theme", "neon"].into_iter().map(String::from);
    let err = parse_args(argv).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

//! Startup: configuration resolution and logging setup.
//!
//! - [`config`] - [`StartupConfig`] built from defaults, environment and flags
//! - [`logging`] - File-backed `tracing` subscriber
//!
//! # Usage
//!
//! ```ignore
//! use calcpad::startup::{init_logging, StartupConfig};
//!
//! let config = StartupConfig::from_env()?.merge_cli(&options);
//! init_logging(config.log_file.as_deref())?;
//! ```

pub mod config;
pub mod logging;

pub use config::{default_log_path, StartupConfig, LOG_FILE_ENV, LOG_FILTER_ENV, THEME_ENV};
pub use logging::{init_logging, open_log_file};

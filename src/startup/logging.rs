//! File logging.
//!
//! The widget owns stdout while it runs, so `tracing` output is written to a
//! file instead. Without a configured file no subscriber is installed and
//! all events are discarded.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::LOG_FILTER_ENV;
use crate::error::{CalcpadError, CalcpadResult};

/// Filter used when `CALCPAD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global subscriber writing to `log_file`.
///
/// Returns `Ok(false)` when `log_file` is `None` (logging disabled).
pub fn init_logging(log_file: Option<&Path>) -> CalcpadResult<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CalcpadError::LoggerInstall(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> CalcpadResult<File> {
    let log_err = |source| CalcpadError::LogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(log_err)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_err)
}

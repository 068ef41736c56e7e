//! The unified shell error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::category::ErrorCategory;

/// Errors raised by the terminal application around the calculator.
#[derive(Debug, Error)]
pub enum CalcpadError {
    /// Raw mode, alternate screen or backend creation failed
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// Generic I/O failure while drawing or reading events
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The log file could not be created or opened
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed
    #[error("failed to install logger: {0}")]
    LoggerInstall(String),

    /// A command-line flag or environment variable had an unusable value
    #[error("invalid value '{value}' for {flag}")]
    InvalidArgument { flag: String, value: String },
}

impl CalcpadError {
    /// Build an [`CalcpadError::InvalidArgument`].
    pub fn invalid_argument(flag: impl Into<String>, value: impl Into<String>) -> Self {
        CalcpadError::InvalidArgument {
            flag: flag.into(),
            value: value.into(),
        }
    }

    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcpadError::TerminalInit(_) => ErrorCategory::Terminal,
            CalcpadError::Io(_) | CalcpadError::LogFile { .. } => ErrorCategory::System,
            CalcpadError::LoggerInstall(_) | CalcpadError::InvalidArgument { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Message suitable for printing to the user after the terminal has
    /// been restored.
    pub fn user_message(&self) -> String {
        match self {
            CalcpadError::TerminalInit(_) => {
                "Could not take over the terminal. Is this an interactive terminal?".to_string()
            }
            CalcpadError::Io(e) => format!("Terminal I/O failed: {}", e),
            CalcpadError::LogFile { path, .. } => format!(
                "Cannot write the log file '{}'. Check the directory exists and is writable.",
                path.display()
            ),
            CalcpadError::LoggerInstall(_) => "Logging was already initialized.".to_string(),
            CalcpadError::InvalidArgument { flag, value } => match flag.as_str() {
                "--theme" | "CALCPAD_THEME" => {
                    format!("Unknown theme '{}' for {}. Use 'light' or 'dark'.", value, flag)
                }
                _ => format!("Invalid value '{}' for {}.", value, flag),
            },
        }
    }
}

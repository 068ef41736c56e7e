//! Error categories for handling decisions.

use std::fmt;

/// High-level classification of shell errors.
///
/// The calculator core never fails; every error in this crate comes from the
/// surrounding terminal application and falls into one of these groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Terminal setup, drawing or teardown
    Terminal,
    /// OS and filesystem problems
    System,
    /// Invalid command-line flags or environment settings
    Configuration,
}

impl ErrorCategory {
    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Display theme selection.
//!
//! The theme is a two-valued presentation setting owned by the application
//! shell. It travels through the action type so the keypad can request a
//! change, but the calculator reducer never stores it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark widget palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    #[serde(rename = "light-mode")]
    Light,
    #[serde(rename = "dark-mode")]
    Dark,
}

impl ThemeMode {
    /// Wire name used by the dispatch contract (`light-mode` / `dark-mode`).
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light-mode",
            ThemeMode::Dark => "dark-mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    /// Accepts both the short (`dark`) and wire (`dark-mode`) spellings,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "light-mode" => Ok(ThemeMode::Light),
            "dark" | "dark-mode" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

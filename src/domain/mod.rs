//! Domain objects shared between the calculator core and the shell.
//!
//! - [`ThemeMode`] - Light/dark display setting, held outside the reducer

pub mod theme;

pub use theme::ThemeMode;

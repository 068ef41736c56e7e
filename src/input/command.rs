//! Command definitions for keyboard input handling.
//!
//! Calculator input comes from the mouse; the keyboard only controls the
//! session itself.

/// Commands that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Quit the application (Ctrl+C, q, Esc)
    Quit,
    /// Clear the terminal and draw everything again (Ctrl+L)
    Redraw,
}

impl Command {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::Redraw => "redraw",
        }
    }
}

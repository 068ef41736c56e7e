//! Application state for the calculator widget.
//!
//! [`App`] owns the single [`CalculatorState`] value and replaces it on every
//! dispatched action. The display theme is kept next to it, outside the
//! reducer.

use crate::calculator::{reduce, Action, CalculatorState};
use crate::domain::ThemeMode;
use crate::startup::StartupConfig;
use crate::ui::interaction::{handle_click_action, HitAreaRegistry};

/// Default terminal width before the first resize event.
const DEFAULT_WIDTH: u16 = 80;
/// Default terminal height before the first resize event.
const DEFAULT_HEIGHT: u16 = 24;

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    state: CalculatorState,
    theme: ThemeMode,
    /// Clickable regions registered by the last render
    pub hit_areas: HitAreaRegistry,
    /// Set when the event loop should exit
    pub should_quit: bool,
    terminal_width: u16,
    terminal_height: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Empty calculator with the light theme.
    pub fn new() -> Self {
        Self {
            state: CalculatorState::default(),
            theme: ThemeMode::default(),
            hit_areas: HitAreaRegistry::new(),
            should_quit: false,
            terminal_width: DEFAULT_WIDTH,
            terminal_height: DEFAULT_HEIGHT,
        }
    }

    /// Empty calculator using the configured theme.
    pub fn with_config(config: &StartupConfig) -> Self {
        Self {
            theme: config.theme,
            ..Self::new()
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Run `action` through the reducer and keep the resulting state.
    ///
    /// A color-mode action also switches the theme; the reducer itself
    /// ignores it.
    pub fn dispatch(&mut self, action: Action) {
        if let Action::ColorMode(mode) = action {
            self.set_theme(mode);
        }

        let next = reduce(&self.state, action);
        if next == self.state {
            tracing::debug!(kind = action.kind(), ?action, "action left state unchanged");
        } else {
            tracing::debug!(
                kind = action.kind(),
                ?action,
                before = ?self.state,
                after = ?next,
                "state transition"
            );
        }
        self.state = next;
    }

    /// Switch the display theme.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        if self.theme != mode {
            tracing::info!(from = %self.theme, to = %mode, "theme changed");
        }
        self.theme = mode;
    }

    /// Handle a left click at a terminal cell.
    ///
    /// Returns true if the click landed on a registered area.
    pub fn handle_click(&mut self, x: u16, y: u16) -> bool {
        match self.hit_areas.hit_test(x, y) {
            Some(action) => {
                handle_click_action(self, action);
                true
            }
            None => false,
        }
    }

    /// Request exit from the event loop.
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }
}

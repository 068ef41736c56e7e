//! Terminal event handling.
//!
//! ```text
//! Mouse click -> HitAreaRegistry -> ClickAction -> App mutation
//! Key press   -> KeybindingConfig -> Command     -> App mutation
//! ```
//!
//! The calculator is driven by the mouse. Keys only quit or redraw.

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

use crate::app::App;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing visible changed
    None,
    /// Draw the next frame
    Redraw,
    /// Clear the terminal, then draw
    ClearAndRedraw,
}

/// Apply one terminal event to the app.
pub fn handle_event(app: &mut App, bindings: &KeybindingConfig, event: &Event) -> EventOutcome {
    match event {
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if app.handle_click(mouse_event.column, mouse_event.row) {
                    EventOutcome::Redraw
                } else {
                    EventOutcome::None
                }
            }
            MouseEventKind::Moved => {
                if app.hit_areas.update_hover(mouse_event.column, mouse_event.row) {
                    EventOutcome::Redraw
                } else {
                    EventOutcome::None
                }
            }
            _ => EventOutcome::None,
        },
        Event::Resize(width, height) => {
            app.update_terminal_dimensions(*width, *height);
            app.hit_areas.clear_hover();
            EventOutcome::Redraw
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => match bindings.lookup(key) {
            Some(command) => {
                tracing::debug!(command = command.name(), "key command");
                execute_command(app, command)
            }
            None => EventOutcome::None,
        },
        Event::FocusLost => {
            if app.hit_areas.clear_hover() {
                EventOutcome::Redraw
            } else {
                EventOutcome::None
            }
        }
        _ => EventOutcome::None,
    }
}

fn execute_command(app: &mut App, command: Command) -> EventOutcome {
    match command {
        Command::Quit => {
            app.quit();
            EventOutcome::None
        }
        Command::Redraw => EventOutcome::ClearAndRedraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::interaction::ClickAction;
    use crate::calculator::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app_with_key() -> App {
        let mut app = App::new();
        app.hit_areas.register(
            Rect::new(10, 10, 7, 3),
            ClickAction::Dispatch(Action::AddDigit('9')),
        );
        app
    }

    #[test]
    fn test_left_click_dispatches() {
        let mut app = app_with_key();
        let bindings = KeybindingConfig::new();
        let outcome = handle_event(
            &mut app,
            &bindings,
            &mouse(MouseEventKind::Down(MouseButton::Left), 12, 11),
        );
        assert_eq!(outcome, EventOutcome::Redraw);
        assert_eq!(app.state().current_operand(), Some("9"));
    }

    #[test]
    fn test_click_outside_keys_is_ignored() {
        let mut app = app_with_key();
        let bindings = KeybindingConfig::new();
        let outcome = handle_event(
            &mut app,
            &bindings,
            &mouse(MouseEventKind::Down(MouseButton::Left), 0, 0),
        );
        assert_eq!(outcome, EventOutcome::None);
        assert!(app.state().is_empty());
    }

    #[test]
    fn test_right_click_is_ignored() {
        let mut app = app_with_key();
        let bindings = KeybindingConfig::new();
        let outcome = handle_event(
            &mut app,
            &bindings,
            &mouse(MouseEventKind::Down(MouseButton::Right), 12, 11),
        );
        assert_eq!(outcome, EventOutcome::None);
        assert!(app.state().is_empty());
    }

    #[test]
    fn test_hover_redraws_only_on_change() {
        let mut app = app_with_key();
        let bindings = KeybindingConfig::new();
        let moved = mouse(MouseEventKind::Moved, 11, 11);
        assert_eq!(handle_event(&mut app, &bindings, &moved), EventOutcome::Redraw);
        assert_eq!(handle_event(&mut app, &bindings, &moved), EventOutcome::None);
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut app = App::new();
        let bindings = KeybindingConfig::new();
        let outcome = handle_event(&mut app, &bindings, &Event::Resize(120, 40));
        assert_eq!(outcome, EventOutcome::Redraw);
        assert_eq!(app.terminal_width(), 120);
        assert_eq!(app.terminal_height(), 40);
    }

    #[test]
    fn test_q_quits() {
        let mut app = App::new();
        let bindings = KeybindingConfig::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        handle_event(&mut app, &bindings, &event);
        assert!(app.should_quit);
    }

    #[test]
    fn test_digit_key_does_nothing() {
        let mut app = App::new();
        let bindings = KeybindingConfig::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE));
        assert_eq!(handle_event(&mut app, &bindings, &event), EventOutcome::None);
        assert!(app.state().is_empty());
    }

    #[test]
    fn test_ctrl_l_clears_and_redraws() {
        let mut app = App::new();
        let bindings = KeybindingConfig::new();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert_eq!(
            handle_event(&mut app, &bindings, &event),
            EventOutcome::ClearAndRedraw
        );
    }
}

//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{press, rendered_app};
//!
//! let mut app = rendered_app();
//! press(&mut app, &["1", "+", "2", "="]);
//! assert_eq!(app.state().current_operand(), Some("3"));
//! ```

#![allow(dead_code)]

use calcpad::app::App;
use calcpad::calculator::{reduce, Action, CalculatorState};
use calcpad::ui::{self, CardLayout, KEYPAD};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Terminal size used by rendering tests (tall keys).
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 25;

/// Fold `actions` over the empty state.
pub fn run_actions(actions: &[Action]) -> CalculatorState {
    actions
        .iter()
        .fold(CalculatorState::default(), |state, action| {
            reduce(&state, *action)
        })
}

/// Render `app` into a fresh test terminal and return the buffer.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| ui::render(f, app))
        .expect("render succeeds");
    terminal.backend().buffer().clone()
}

/// A fresh app that has been rendered once so its hit areas are populated.
pub fn rendered_app() -> App {
    let mut app = App::new();
    render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);
    app
}

/// The card layout used by [`render_app`] at the default test size.
pub fn test_layout() -> CardLayout {
    CardLayout::compute(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT)).expect("card fits")
}

/// Center cell of the key with the given label.
pub fn key_center(label: &str) -> (u16, u16) {
    let layout = test_layout();
    for (row, keys) in KEYPAD.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            if key.label == label {
                let rect = layout.key_rect(row as u16, col as u16);
                return (rect.x + rect.width / 2, rect.y + rect.height / 2);
            }
        }
    }
    panic!("no key labelled {:?}", label);
}

/// Click each key by label, re-rendering between clicks like the event loop.
pub fn press(app: &mut App, labels: &[&str]) {
    for label in labels {
        let (x, y) = key_center(label);
        assert!(app.handle_click(x, y), "click on {:?} missed", label);
        render_app(app, TEST_WIDTH, TEST_HEIGHT);
    }
}

/// Flatten a buffer into one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

//! The calculator keypad and theme toggle.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::CardLayout;
use super::theme::{Palette, COLOR_ACCENT, COLOR_OPERATOR, COLOR_TOGGLE_INACTIVE};
use crate::calculator::{Action, Operator};
use crate::domain::ThemeMode;

/// Text color group of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTone {
    Digit,
    Accent,
    Operator,
}

/// One keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub action: ClickAction,
    pub tone: KeyTone,
}

const fn digit(label: &'static str, value: char) -> Key {
    Key {
        label,
        action: ClickAction::Dispatch(Action::AddDigit(value)),
        tone: KeyTone::Digit,
    }
}

const fn operator(label: &'static str, op: Operator, tone: KeyTone) -> Key {
    Key {
        label,
        action: ClickAction::Dispatch(Action::ChooseOperation(op)),
        tone,
    }
}

/// Keypad rows, top to bottom.
///
/// `±` has no action bound.
pub const KEYPAD: [[Key; 4]; 5] = [
    [
        Key {
            label: "AC",
            action: ClickAction::Dispatch(Action::Clear),
            tone: KeyTone::Accent,
        },
        Key {
            label: "±",
            action: ClickAction::Inert,
            tone: KeyTone::Accent,
        },
        operator("%", Operator::Percent, KeyTone::Accent),
        operator("÷", Operator::Divide, KeyTone::Operator),
    ],
    [
        digit("7", '7'),
        digit("8", '8'),
        digit("9", '9'),
        operator("×", Operator::Multiply, KeyTone::Operator),
    ],
    [
        digit("4", '4'),
        digit("5", '5'),
        digit("6", '6'),
        operator("−", Operator::Subtract, KeyTone::Operator),
    ],
    [
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        operator("+", Operator::Add, KeyTone::Operator),
    ],
    [
        Key {
            label: "⌫",
            action: ClickAction::Dispatch(Action::DeleteDigit),
            tone: KeyTone::Digit,
        },
        digit("0", '0'),
        digit(".", '.'),
        Key {
            label: "=",
            action: ClickAction::Dispatch(Action::Evaluate),
            tone: KeyTone::Operator,
        },
    ],
];

/// Glyph drawn for an operator in the history line.
pub fn operator_glyph(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "−",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
        Operator::Percent => "%",
    }
}

/// Draw every key and register its hit area.
pub fn render_keypad(
    frame: &mut Frame,
    layout: &CardLayout,
    palette: &Palette,
    hit_areas: &mut HitAreaRegistry,
) {
    for (row, keys) in KEYPAD.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let rect = layout.key_rect(row as u16, col as u16);
            hit_areas.register(rect, key.action);
            render_key(frame, rect, key, layout.is_compact(), palette, hit_areas.is_hovered(rect));
        }
    }
}

fn render_key(
    frame: &mut Frame,
    rect: Rect,
    key: &Key,
    compact: bool,
    palette: &Palette,
    hovered: bool,
) {
    let fg = match key.tone {
        KeyTone::Digit => palette.text,
        KeyTone::Accent => COLOR_ACCENT,
        KeyTone::Operator => COLOR_OPERATOR,
    };
    let bg = if hovered {
        palette.key_hover_bg
    } else {
        palette.key_bg
    };
    let face = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);

    let label = Paragraph::new(key.label)
        .style(face)
        .alignment(Alignment::Center);

    if compact {
        frame.render_widget(label, rect);
    } else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.key_border).bg(bg))
            .style(Style::default().bg(bg));
        frame.render_widget(label.block(block), rect);
    }
}

/// Draw the sun/moon theme buttons and register their hit areas.
pub fn render_theme_toggle(
    frame: &mut Frame,
    layout: &CardLayout,
    theme: ThemeMode,
    palette: &Palette,
    hit_areas: &mut HitAreaRegistry,
) {
    for (rect, glyph, mode) in [
        (layout.sun, "☀", ThemeMode::Light),
        (layout.moon, "☾", ThemeMode::Dark),
    ] {
        hit_areas.register(rect, ClickAction::SetTheme(mode));

        let fg = if theme == mode {
            palette.toggle_active
        } else {
            COLOR_TOGGLE_INACTIVE
        };
        let mut style = Style::default().fg(fg).bg(palette.background);
        if hit_areas.is_hovered(rect) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        frame.render_widget(
            Paragraph::new(glyph).style(style).alignment(Alignment::Center),
            rect,
        );
    }
}

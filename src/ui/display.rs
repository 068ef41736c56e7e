//! The result display: history line and current operand.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::keypad::operator_glyph;
use super::layout::CardLayout;
use super::theme::Palette;
use crate::calculator::{format_operand, CalculatorState};

/// History line text: `previous glyph consumed`, skipping absent parts.
pub fn history_text(state: &CalculatorState) -> String {
    let previous = format_operand(state.previous_operand());
    let icon = state.icon.map(operator_glyph);
    let consumed = format_operand(state.curr_prev_operand());

    [previous.as_deref(), icon, consumed.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current line text; empty when nothing renders.
pub fn current_text(state: &CalculatorState) -> String {
    format_operand(state.current_operand()).unwrap_or_default()
}

/// Keep the rightmost part of `text` that fits in `width` columns, marking
/// a cut with a leading `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    format!("…{}", &text[start..])
}

/// Draw both display lines, right-aligned.
pub fn render_display(
    frame: &mut Frame,
    layout: &CardLayout,
    state: &CalculatorState,
    palette: &Palette,
) {
    // One column of padding on the right
    let history_width = layout.history.width.saturating_sub(1) as usize;
    let current_width = layout.current.width.saturating_sub(1) as usize;

    let history = Paragraph::new(format!("{} ", fit_to_width(&history_text(state), history_width)))
        .style(Style::default().fg(palette.dim).bg(palette.background))
        .alignment(Alignment::Right);
    frame.render_widget(history, layout.history);

    let current = Paragraph::new(format!("{} ", fit_to_width(&current_text(state), current_width)))
        .style(
            Style::default()
                .fg(palette.text)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Right);
    frame.render_widget(current, layout.current);
}

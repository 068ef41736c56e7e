//! UI rendering for the calculator card.
//!
//! Every frame rebuilds the hit area registry: each clickable element
//! registers its rectangle while it is drawn, so mouse handling always
//! matches what is on screen.

mod display;
pub mod interaction;
mod keypad;
mod layout;
mod theme;

pub use display::{current_text, fit_to_width, history_text};
pub use keypad::{operator_glyph, Key, KeyTone, KEYPAD};
pub use layout::{card_height, CardLayout, CARD_WIDTH, COMPACT_KEY_HEIGHT, TALL_KEY_HEIGHT};
pub use theme::{Palette, COLOR_ACCENT, COLOR_OPERATOR, COLOR_TOGGLE_INACTIVE};

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

const TITLE: &str = " calcpad ";

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole widget and refresh the app's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let palette = Palette::for_mode(app.theme());

    app.hit_areas.clear();
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let Some(layout) = CardLayout::compute(area) else {
        render_too_small(frame, area, &palette);
        return;
    };

    let card = Block::default()
        .title(TITLE)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background).fg(palette.text));
    frame.render_widget(card, layout.card);

    let theme = app.theme();
    keypad::render_theme_toggle(frame, &layout, theme, &palette, &mut app.hit_areas);
    display::render_display(frame, &layout, app.state(), &palette);
    keypad::render_keypad(frame, &layout, &palette, &mut app.hit_areas);
}

fn render_too_small(frame: &mut Frame, area: Rect, palette: &Palette) {
    let notice = format!(
        "Terminal too small: need {}x{}",
        CARD_WIDTH,
        card_height(COMPACT_KEY_HEIGHT)
    );
    let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1).intersection(area);
    frame.render_widget(
        Paragraph::new(notice)
            .style(Style::default().fg(palette.dim).bg(palette.background))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        line,
    );
}

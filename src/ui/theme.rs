//! Color palettes for the light and dark widget themes.

use ratatui::style::Color;

use crate::domain::ThemeMode;

// ============================================================================
// Key Colors (shared by both themes)
// ============================================================================

/// Clear / percent / sign keys
pub const COLOR_ACCENT: Color = Color::Rgb(37, 237, 201);

/// Arithmetic operator and equals keys
pub const COLOR_OPERATOR: Color = Color::Rgb(243, 122, 120);

/// Theme button that is not selected
pub const COLOR_TOGGLE_INACTIVE: Color = Color::Rgb(113, 115, 121);

// ============================================================================
// Palettes
// ============================================================================

/// Colors that change with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen and card background
    pub background: Color,
    /// Card border
    pub border: Color,
    /// Digits and the current operand
    pub text: Color,
    /// History line
    pub dim: Color,
    /// Key face
    pub key_bg: Color,
    /// Key face under the pointer
    pub key_hover_bg: Color,
    /// Key outline in the tall layout
    pub key_border: Color,
    /// Selected theme button
    pub toggle_active: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(255, 255, 255),
    border: Color::Rgb(220, 220, 224),
    text: Color::Rgb(20, 20, 24),
    dim: Color::Rgb(113, 115, 121),
    key_bg: Color::Rgb(247, 247, 247),
    key_hover_bg: Color::Rgb(230, 230, 234),
    key_border: Color::Rgb(225, 225, 229),
    toggle_active: Color::Rgb(0, 0, 0),
};

const DARK: Palette = Palette {
    background: Color::Rgb(34, 37, 45),
    border: Color::Rgb(60, 63, 72),
    text: Color::Rgb(255, 255, 255),
    dim: Color::Rgb(160, 162, 168),
    key_bg: Color::Rgb(41, 45, 54),
    key_hover_bg: Color::Rgb(58, 62, 74),
    key_border: Color::Rgb(52, 56, 66),
    toggle_active: Color::Rgb(255, 255, 255),
};

impl Palette {
    /// Palette for a theme.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

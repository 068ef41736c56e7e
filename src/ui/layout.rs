//! Card geometry.
//!
//! The widget is a fixed-width card centered in the terminal. Keys are
//! three rows tall when the terminal has room and collapse to one row
//! otherwise.
//!
//! ```text
//! ╭────────── calcpad ─────────╮
//! │ ☀   ☾                      │  theme toggle
//! │                   8 − 3    │  history line
//! │                       5    │  current line
//! │                            │
//! │  AC    ±     %     ÷       │  keypad, 5 rows x 4 columns
//! ╰────────────────────────────╯
//! ```

use ratatui::layout::Rect;

/// Columns per key.
pub const KEY_WIDTH: u16 = 7;
/// Keys per keypad row.
pub const KEYPAD_COLUMNS: u16 = 4;
/// Keypad rows.
pub const KEYPAD_ROWS: u16 = 5;
/// Key height with room for a border.
pub const TALL_KEY_HEIGHT: u16 = 3;
/// Key height in short terminals.
pub const COMPACT_KEY_HEIGHT: u16 = 1;

/// Toggle row, history line, current line, spacer.
const HEADER_ROWS: u16 = 4;
/// Left + right (or top + bottom) card border.
const BORDER: u16 = 2;

/// Total card width.
pub const CARD_WIDTH: u16 = KEY_WIDTH * KEYPAD_COLUMNS + BORDER;

/// Total card height for a given key height.
pub const fn card_height(key_height: u16) -> u16 {
    BORDER + HEADER_ROWS + KEYPAD_ROWS * key_height
}

/// Resolved positions of every part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Outer card rectangle (including border)
    pub card: Rect,
    /// Light theme button
    pub sun: Rect,
    /// Dark theme button
    pub moon: Rect,
    /// History line: previous operand, operator glyph, consumed operand
    pub history: Rect,
    /// Current operand line
    pub current: Rect,
    /// Height of each key
    pub key_height: u16,
    keypad_origin: (u16, u16),
}

impl CardLayout {
    /// Fit the card into `area`, or `None` if the area is too small even for
    /// compact keys.
    pub fn compute(area: Rect) -> Option<Self> {
        if area.width < CARD_WIDTH {
            return None;
        }
        let key_height = if area.height >= card_height(TALL_KEY_HEIGHT) {
            TALL_KEY_HEIGHT
        } else if area.height >= card_height(COMPACT_KEY_HEIGHT) {
            COMPACT_KEY_HEIGHT
        } else {
            return None;
        };

        let height = card_height(key_height);
        let card = Rect::new(
            area.x + (area.width - CARD_WIDTH) / 2,
            area.y + (area.height - height) / 2,
            CARD_WIDTH,
            height,
        );
        let inner_x = card.x + 1;
        let inner_y = card.y + 1;
        let inner_width = card.width - BORDER;

        Some(Self {
            card,
            sun: Rect::new(inner_x, inner_y, 3, 1),
            moon: Rect::new(inner_x + 4, inner_y, 3, 1),
            history: Rect::new(inner_x, inner_y + 1, inner_width, 1),
            current: Rect::new(inner_x, inner_y + 2, inner_width, 1),
            key_height,
            keypad_origin: (inner_x, inner_y + HEADER_ROWS),
        })
    }

    /// Rectangle of the key at `row`, `col` (zero-based).
    pub fn key_rect(&self, row: u16, col: u16) -> Rect {
        let (x, y) = self.keypad_origin;
        Rect::new(
            x + col * KEY_WIDTH,
            y + row * self.key_height,
            KEY_WIDTH,
            self.key_height,
        )
    }

    /// Whether keys are drawn one row tall.
    pub fn is_compact(&self) -> bool {
        self.key_height == COMPACT_KEY_HEIGHT
    }
}

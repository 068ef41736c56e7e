//! Hit areas for mouse-driven input.
//!
//! Components register hit areas while rendering, and the event loop queries
//! the registry to decide what a click does. The registry is rebuilt every
//! frame; the pointer position survives across frames so hover feedback can
//! be drawn during the next render.

use ratatui::layout::Rect;

use crate::calculator::Action;
use crate::domain::ThemeMode;

/// What clicking a hit area does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Dispatch a calculator action
    Dispatch(Action),
    /// Switch the display theme
    SetTheme(ThemeMode),
    /// A key that is drawn but bound to nothing
    Inert,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of the hit areas drawn in the current frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas (later = on top)
    areas: Vec<HitArea>,
    /// Last known pointer position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render.
    ///
    /// The pointer position is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority for overlapping regions.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action)
    }

    /// Record the pointer position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered().map(|area| area.rect);
        self.pointer = Some((x, y));
        let after = self.hovered().map(|area| area.rect);
        before != after
    }

    /// Forget the pointer position (e.g. after a resize).
    ///
    /// Returns true if an area was hovered.
    pub fn clear_hover(&mut self) -> bool {
        let was_hovering = self.is_hovering();
        self.pointer = None;
        was_hovering
    }

    /// Whether the pointer is over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        match self.pointer {
            Some((x, y)) => HitArea::new(rect, ClickAction::Inert).contains(x, y),
            None => false,
        }
    }

    /// Whether the pointer is over any registered area.
    pub fn is_hovering(&self) -> bool {
        self.hovered().is_some()
    }

    /// The area under the pointer, if any.
    pub fn hovered(&self) -> Option<&HitArea> {
        let (x, y) = self.pointer?;
        self.find_index(x, y).map(|i| &self.areas[i])
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// All registered areas in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::Inert);

        assert!(area.contains(10, 10)); // Top-left corner
        assert!(area.contains(29, 19)); // Bottom-right corner
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), ClickAction::Inert);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::Dispatch(Action::Clear));
        registry.register(make_rect(20, 0, 10, 10), ClickAction::Dispatch(Action::Evaluate));

        assert_eq!(registry.hit_test(5, 5), Some(ClickAction::Dispatch(Action::Clear)));
        assert_eq!(registry.hit_test(25, 5), Some(ClickAction::Dispatch(Action::Evaluate)));
        assert_eq!(registry.hit_test(15, 5), None);
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 20, 20), ClickAction::Inert);
        registry.register(make_rect(5, 5, 10, 10), ClickAction::SetTheme(ThemeMode::Dark));

        assert_eq!(registry.hit_test(10, 10), Some(ClickAction::SetTheme(ThemeMode::Dark)));
        assert_eq!(registry.hit_test(2, 2), Some(ClickAction::Inert));
    }

    #[test]
    fn test_clear_keeps_pointer() {
        let mut registry = HitAreaRegistry::new();
        let rect = make_rect(0, 0, 10, 10);
        registry.register(rect, ClickAction::Inert);
        registry.update_hover(5, 5);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_hovering());
        assert!(registry.is_hovered(rect));

        registry.register(rect, ClickAction::Inert);
        assert!(registry.is_hovering());
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::Inert);
        registry.register(make_rect(20, 0, 10, 10), ClickAction::Inert);

        assert!(registry.update_hover(5, 5));
        assert!(!registry.update_hover(8, 8));
        assert!(registry.update_hover(25, 5));
        assert!(registry.update_hover(100, 100));
        assert!(!registry.update_hover(200, 200));
    }

    #[test]
    fn test_clear_hover() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::Inert);
        registry.update_hover(1, 1);

        assert!(registry.clear_hover());
        assert!(!registry.clear_hover());
    }
}

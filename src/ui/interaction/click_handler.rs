//! Click action handler.
//!
//! Translates actions found by the hit area registry into App mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Apply a click action to the app.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    match action {
        ClickAction::Dispatch(calc_action) => {
            tracing::debug!(kind = calc_action.kind(), "Click: dispatch");
            app.dispatch(calc_action);
        }
        ClickAction::SetTheme(mode) => {
            tracing::debug!(theme = %mode, "Click: theme button");
            app.set_theme(mode);
        }
        ClickAction::Inert => {
            tracing::warn!("Click: key has no action bound");
        }
    }
}

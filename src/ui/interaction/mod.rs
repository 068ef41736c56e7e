//! Mouse interaction: hit areas registered while rendering, and the handler
//! that applies a clicked area's action.

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};

//! Prelude module for convenient imports.
//!
//! ```ignore
//! use calcpad::prelude::*;
//! ```

// Application
pub use crate::app::App;

// Calculator core
pub use crate::calculator::{
    dispatch, evaluate, format_operand, reduce, Action, ActionMessage, CalculatorState, Operator,
};

// Domain
pub use crate::domain::ThemeMode;

// Errors
pub use crate::error::{CalcpadError, CalcpadResult};

// UI
pub use crate::ui::interaction::{ClickAction, HitAreaRegistry};
pub use crate::ui::render;

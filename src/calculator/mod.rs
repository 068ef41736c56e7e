//! Calculator core: state, actions, reducer, evaluator and display
//! formatting.
//!
//! Everything in this module is pure. The shell owns a single
//! [`CalculatorState`] and replaces it with the result of [`reduce`] for
//! every dispatched [`Action`]:
//!
//! ```
//! use calcpad::calculator::{reduce, Action, CalculatorState, Operator};
//!
//! let state = [
//!     Action::AddDigit('8'),
//!     Action::ChooseOperation(Operator::Subtract),
//!     Action::AddDigit('3'),
//!     Action::Evaluate,
//! ]
//! .into_iter()
//! .fold(CalculatorState::default(), |state, action| reduce(&state, action));
//!
//! assert_eq!(state.current_operand(), Some("5"));
//! ```

pub mod action;
mod evaluate;
mod format;
mod operator;
mod reducer;
mod state;

pub use action::{Action, ActionMessage, ActionPayload};
pub use evaluate::evaluate;
pub use format::format_operand;
pub use operator::Operator;
pub use reducer::{dispatch, reduce};
pub use state::CalculatorState;

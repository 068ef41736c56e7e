//! Calculator state value.

use serde::Serialize;

use super::operator::Operator;

/// Complete calculator state.
///
/// Treated as an immutable value: every transition builds a new state. The
/// default value is both the initial and the cleared state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorState {
    /// Raw text of the operand being typed (never grouped)
    pub current_operand: Option<String>,
    /// Operand captured before the operator, or the running total
    pub previous_operand: Option<String>,
    /// Pending binary operator
    pub operator: Option<Operator>,
    /// Operator whose glyph is shown in the history line
    pub icon: Option<Operator>,
    /// Operand consumed by the last evaluation, kept for display
    pub curr_prev_operand: Option<String>,
    /// When set, the next digit starts a new operand
    pub overwrite: bool,
}

impl CalculatorState {
    /// The empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this is the empty state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn current_operand(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn curr_prev_operand(&self) -> Option<&str> {
        self.curr_prev_operand.as_deref()
    }
}

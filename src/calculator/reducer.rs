//! The calculator state machine.
//!
//! [`reduce`] maps a state and an action to the next state. It never fails:
//! an action that does not apply to the current state returns that state
//! unchanged.

use super::action::{Action, ActionMessage};
use super::evaluate::evaluate;
use super::operator::Operator;
use super::state::CalculatorState;

/// Compute the state that follows `state` after `action`.
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, digit),
        Action::ChooseOperation(op) => choose_operation(state, op),
        Action::Clear => CalculatorState::default(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
        Action::ColorMode(_) => state.clone(),
    }
}

/// Apply a wire message. Messages that do not describe a valid action leave
/// the state unchanged.
pub fn dispatch(state: &CalculatorState, message: &ActionMessage) -> CalculatorState {
    match message.to_action() {
        Some(action) => reduce(state, action),
        None => state.clone(),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !(digit.is_ascii_digit() || digit == '.') {
        return state.clone();
    }

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            previous_operand: None,
            operator: None,
            icon: None,
            curr_prev_operand: None,
            overwrite: false,
        };
    }

    let current = state.current_operand().unwrap_or("");

    if digit == '0' && current == "0" {
        return state.clone();
    }
    // A number cannot start with a bare decimal point.
    if digit == '.' && current.is_empty() {
        return state.clone();
    }
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    let mut operand = String::with_capacity(current.len() + 1);
    operand.push_str(current);
    operand.push(digit);

    CalculatorState {
        current_operand: Some(operand),
        ..state.clone()
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: if remaining.is_empty() {
            None
        } else {
            Some(remaining.to_string())
        },
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operator) -> CalculatorState {
    if state.current_operand.is_none() && state.previous_operand.is_none() {
        return state.clone();
    }

    if state.previous_operand.is_none() {
        return CalculatorState {
            previous_operand: state.current_operand.clone(),
            current_operand: None,
            operator: Some(op),
            icon: Some(op),
            ..state.clone()
        };
    }

    if state.operator.is_some() {
        return CalculatorState {
            operator: Some(op),
            icon: Some(op),
            ..state.clone()
        };
    }

    // Both operands present with nothing pending: fold them into a running
    // total. The evaluator sees the absent operator and yields its sentinel.
    CalculatorState {
        previous_operand: Some(evaluate(
            state.current_operand(),
            state.previous_operand(),
            state.operator,
        )),
        current_operand: None,
        operator: Some(op),
        icon: Some(op),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(current), Some(previous), Some(op)) = (
        state.current_operand(),
        state.previous_operand(),
        state.operator,
    ) else {
        return state.clone();
    };

    // Rebuilt from scratch: the operator is consumed by the evaluation.
    CalculatorState {
        current_operand: Some(evaluate(Some(current), Some(previous), Some(op))),
        previous_operand: Some(previous.to_string()),
        operator: None,
        icon: state.icon,
        curr_prev_operand: Some(current.to_string()),
        overwrite: true,
    }
}

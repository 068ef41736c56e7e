//! Actions accepted by the reducer and their wire representation.

use serde::{Deserialize, Serialize};

use super::operator::Operator;
use crate::domain::ThemeMode;

/// Wire names of the action kinds.
pub mod kind {
    pub const ADD_DIGIT: &str = "add-digit";
    pub const CHOOSE_OPERATION: &str = "choose-operation";
    pub const CLEAR: &str = "clear";
    pub const DELETE_DIGIT: &str = "delete-digit";
    pub const EVALUATE: &str = "evaluate";
    pub const COLOR_MODE: &str = "color-mode";
}

/// A user action dispatched by the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a digit or `.` to the operand being typed
    AddDigit(char),
    /// Pick the pending binary operator
    ChooseOperation(Operator),
    /// Reset to the empty state
    Clear,
    /// Remove the last typed character
    DeleteDigit,
    /// Compute the pending expression
    Evaluate,
    /// Theme switch; handled by the shell, ignored by the reducer
    ColorMode(ThemeMode),
}

impl Action {
    /// Wire name of this action's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddDigit(_) => kind::ADD_DIGIT,
            Action::ChooseOperation(_) => kind::CHOOSE_OPERATION,
            Action::Clear => kind::CLEAR,
            Action::DeleteDigit => kind::DELETE_DIGIT,
            Action::Evaluate => kind::EVALUATE,
            Action::ColorMode(_) => kind::COLOR_MODE,
        }
    }
}

/// Loosely-typed `{ "type": .., "payload": { .. } }` message, as produced by
/// an external UI.
///
/// Every payload field is optional; [`ActionMessage::to_action`] decides
/// whether the message describes a valid [`Action`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

/// Payload fields of an [`ActionMessage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    /// Digit or `.` for `add-digit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Operator symbol for `choose-operation`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Display icon token sent alongside `operation`. Accepted and ignored;
    /// the glyph is derived from the operator when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Theme name for `color-mode`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ActionMessage {
    /// Build a message with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: ActionPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Parse a message from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Convert to a typed action.
    ///
    /// Returns `None` for unknown kinds and for payloads that do not fit the
    /// kind (missing fields, multi-character digit values, unknown operator
    /// symbols or theme names).
    pub fn to_action(&self) -> Option<Action> {
        let payload = self.payload.as_ref();
        match self.kind.as_str() {
            kind::ADD_DIGIT => {
                let value = payload?.value.as_deref()?;
                let mut chars = value.chars();
                let digit = chars.next()?;
                if chars.next().is_some() || !(digit.is_ascii_digit() || digit == '.') {
                    return None;
                }
                Some(Action::AddDigit(digit))
            }
            kind::CHOOSE_OPERATION => {
                let symbol = payload?.operation.as_deref()?;
                Operator::from_symbol(symbol).map(Action::ChooseOperation)
            }
            kind::CLEAR => Some(Action::Clear),
            kind::DELETE_DIGIT => Some(Action::DeleteDigit),
            kind::EVALUATE => Some(Action::Evaluate),
            kind::COLOR_MODE => {
                let mode = payload?.mode.as_deref()?;
                mode.parse().ok().map(Action::ColorMode)
            }
            _ => None,
        }
    }
}

impl From<Action> for ActionMessage {
    fn from(action: Action) -> Self {
        let message = ActionMessage::new(action.kind());
        match action {
            Action::AddDigit(digit) => message.with_payload(ActionPayload {
                value: Some(digit.to_string()),
                ..Default::default()
            }),
            Action::ChooseOperation(op) => message.with_payload(ActionPayload {
                operation: Some(op.symbol().to_string()),
                ..Default::default()
            }),
            Action::ColorMode(mode) => message.with_payload(ActionPayload {
                mode: Some(mode.as_str().to_string()),
                ..Default::default()
            }),
            Action::Clear | Action::DeleteDigit | Action::Evaluate => message,
        }
    }
}

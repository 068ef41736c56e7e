//! Arithmetic over the two pending operands.
//!
//! Operands are parsed as `f64` and the result is written back with the
//! default float formatting, so rounding artifacts such as
//! `0.30000000000000004` are kept as-is. Failures never surface as errors:
//! unparseable operands and operators without an arithmetic rule produce
//! the empty string, and division by zero follows IEEE semantics.

use super::operator::Operator;

/// Evaluate `previous <operator> current`.
///
/// Addition and multiplication are symmetric. Subtraction and division use
/// `previous` (the operand typed first) as the minuend/dividend and
/// `current` as the subtrahend/divisor, so `8 - 3` yields `"5"`.
///
/// Returns the empty string when either operand is absent or does not parse
/// to a number, or when the operator is absent or [`Operator::Percent`].
pub fn evaluate(current: Option<&str>, previous: Option<&str>, operator: Option<Operator>) -> String {
    let (Some(curr), Some(prev)) = (parse_operand(current), parse_operand(previous)) else {
        return String::new();
    };

    let result = match operator {
        Some(Operator::Add) => curr + prev,
        Some(Operator::Subtract) => prev - curr,
        Some(Operator::Multiply) => curr * prev,
        Some(Operator::Divide) => prev / curr,
        Some(Operator::Percent) | None => return String::new(),
    };

    format_result(result)
}

/// Locale-invariant parse. NaN counts as a parse failure.
fn parse_operand(text: Option<&str>) -> Option<f64> {
    let value: f64 = text?.trim().parse().ok()?;
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

fn format_result(value: f64) -> String {
    // -0 is written as plain 0
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

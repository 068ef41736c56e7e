//! Display formatting for operands.
//!
//! Operands are stored as the raw typed text; grouping is applied only when
//! a value is drawn.

/// Digit-group separator (en-US).
const GROUP_SEPARATOR: char = ',';

/// Format an operand for display.
///
/// Whole numbers are rendered with thousands separators (`"1234567"` ->
/// `"1,234,567"`, leading zeros dropped). Operands with a fractional part,
/// including a bare trailing decimal point, render as `None` and the line
/// stays blank. An absent operand also renders as `None`.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    match operand.split_once('.') {
        Some(_) => None,
        None => Some(format_integer(operand)),
    }
}

/// Render a fraction-free operand with digit grouping.
///
/// Plain digit strings are grouped exactly. Anything else (evaluation
/// results such as `inf` or `NaN`) goes through a float parse: infinities
/// render as `∞`, and text that is not a number renders as `NaN`. Empty text
/// renders as `0`.
fn format_integer(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let significant = digits.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };
        let grouped = group_digits(significant);
        return if negative && significant != "0" {
            format!("-{}", grouped)
        } else {
            grouped
        };
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_infinite() => {
            if value.is_sign_negative() {
                "-∞".to_string()
            } else {
                "∞".to_string()
            }
        }
        Ok(value) if value.is_finite() => {
            let grouped = group_digits(&value.abs().round().to_string());
            if value.round() < 0.0 {
                format!("-{}", grouped)
            } else {
                grouped
            }
        }
        _ => "NaN".to_string(),
    }
}

/// Insert a separator every three digits from the right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(len + (len - 1) / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result
}

//! Strict two-operand arithmetic tool.
//!
//! Accepts exactly `number operator number` with the four basic operators —
//! no expression trees, no chaining. Anything looser falls through to the
//! model, which keeps the trigger unambiguous.

use std::sync::LazyLock;

use regex::Regex;

/// Defined answer for division by zero. Returned as the tool result, never
/// raised as an error.
pub const DIVISION_BY_ZERO: &str = "Bir sayı sıfıra bölünemez.";

static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+(?:[.,]\d+)?)\s*([+\-*/])\s*(-?\d+(?:[.,]\d+)?)\s*$")
        .expect("valid arithmetic pattern")
});

/// Evaluate a message as a strict two-operand expression.
///
/// Returns `None` when the message is not exactly one expression. Results
/// are rounded to two decimals; whole results print without a fraction, so
/// `3*7` answers "İşlemin sonucu: 21".
pub fn try_evaluate(message: &str) -> Option<String> {
    let caps = EXPRESSION.captures(message)?;

    let lhs = parse_operand(caps.get(1)?.as_str())?;
    let operator = caps.get(2)?.as_str();
    let rhs = parse_operand(caps.get(3)?.as_str())?;

    let value = match operator {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" => {
            if rhs == 0.0 {
                return Some(DIVISION_BY_ZERO.to_owned());
            }
            lhs / rhs
        }
        _ => return None,
    };

    let rounded = (value * 100.0).round() / 100.0;
    Some(format!("İşlemin sonucu: {rounded}"))
}

/// Parse an operand, accepting both decimal separators.
fn parse_operand(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse().ok()
}

//! Number parsing and rendering for numeric answers.
//!
//! Answers are rendered with the shortest decimal representation that
//! round-trips the `f64` value: no thousands separators, no trailing zeros,
//! no exponent. Negative zero renders as `0`, infinities as `Infinity` /
//! `-Infinity`.

use super::error::DomainError;

/// Parse one trimmed numeric token
///
/// Only finite values are numbers here: `NaN`, `inf` and `infinity` are
/// rejected even though `f64::from_str` accepts them.
pub fn parse_number(token: &str) -> Result<f64, DomainError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DomainError::InvalidNumber(token.to_string()))
}

/// Render a numeric answer
pub fn render_number(value: f64) -> String {
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    // f64's Display impl never uses exponent notation and omits ".0"
    format!("{}", value)
}

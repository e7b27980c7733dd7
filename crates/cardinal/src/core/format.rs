//! Locale-independent number rendering for operand descriptions and the display

/// Maximum number of fractional digits kept when rendering a value
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Renders a value with at most [`MAX_FRACTION_DIGITS`] fractional digits.
///
/// Trailing zeros and a dangling decimal point are trimmed, and at least one
/// integer digit is always present (`0.5`, never `.5`). Values that round to
/// zero render as `0` regardless of sign. Non-finite values render as `∞`,
/// `-∞` and `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

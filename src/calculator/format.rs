//! Number formatting for calculator results.

/// Magnitude at or above which results switch to exponential notation.
const EXPONENTIAL_UPPER: f64 = 1e9;

/// Non-zero magnitude below which results switch to exponential notation.
const EXPONENTIAL_LOWER: f64 = 1e-9;

/// Exponential bounds for plain (unformatted) rendering.
const PLAIN_EXPONENTIAL_UPPER: f64 = 1e21;
const PLAIN_EXPONENTIAL_LOWER: f64 = 1e-6;

const SEPARATOR: char = ',';

/// Format a computed result for the display.
///
/// - Very large or very small magnitudes use exponential notation with six
///   fractional digits (`1.234568e+9`).
/// - Integers get thousand separators (`1,234,567`).
/// - Anything else is rounded to ten decimals with trailing zeros stripped.
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude >= EXPONENTIAL_UPPER || (magnitude > 0.0 && magnitude < EXPONENTIAL_LOWER) {
        format_exponential(value)
    } else if value.fract() == 0.0 {
        format_with_separators(value as i64)
    } else {
        trim_decimal(&format!("{:.10}", value))
    }
}

/// Render with six fractional digits and an explicitly signed exponent.
fn format_exponential(value: f64) -> String {
    signed_exponent(format!("{:.6e}", value))
}

/// Insert `+` before a non-negative exponent: `1e9` becomes `1e+9`.
fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Strip trailing zeros, then a dangling decimal point.
pub(crate) fn trim_decimal(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }

    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an integer with thousand separators.
fn format_with_separators(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let head = digits.len() % 3;

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            out.push(SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Remove thousand separators from a display string.
pub(crate) fn strip_separators(display: &str) -> String {
    display.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Plain number rendering: shortest round-trip digits, switching to
/// exponential notation below `1e-6` or at `1e21` and above.
pub fn format_plain(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= PLAIN_EXPONENTIAL_UPPER
        || (magnitude > 0.0 && magnitude < PLAIN_EXPONENTIAL_LOWER)
    {
        signed_exponent(format!("{:e}", value))
    } else {
        value.to_string()
    }
}

/// Parse a display string back into a number.
///
/// Accepts grouping separators, exponential notation and a trailing decimal
/// point. Returns `None` for the error sentinel or anything else unparseable.
pub fn parse_number(display: &str) -> Option<f64> {
    let cleaned = strip_separators(display);
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

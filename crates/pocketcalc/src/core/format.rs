//! Number formatting for the calculator display and converter results
//!
//! `format_general` follows C's `%g` with six significant digits.
//! `format_display` renders integral values as integer literals first.

/// Significant digits used by [`format_general`]
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Largest magnitude rendered through the integer path of [`format_display`]
const MAX_INTEGER_DISPLAY: f64 = 9.0e18;

/// Formats a value for the calculator display.
///
/// Integral values render without a decimal point. Negative zero renders
/// as `"0"`. Everything else goes through [`format_general`].
#[must_use]
pub fn format_display(value: f64) -> String {
    if value % 1.0 == 0.0 && value.abs() < MAX_INTEGER_DISPLAY {
        #[allow(clippy::cast_possible_truncation)]
        let integer = value as i64;
        return integer.to_string();
    }
    format_general(value)
}

/// Formats a value the way C's `%g` does with six significant digits.
///
/// Trailing zeros are stripped. Exponents outside `-4..6` switch to
/// scientific notation with a signed, two-digit exponent (`1e+06`).
#[must_use]
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let precision = SIGNIFICANT_DIGITS - 1;
    let scientific = format!("{value:.precision$e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    #[allow(clippy::cast_possible_wrap)]
    let max_exponent = SIGNIFICANT_DIGITS as i32;
    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    #[allow(clippy::cast_sign_loss)]
    let decimals = (max_exponent - 1 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros after a decimal point, and the point itself
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

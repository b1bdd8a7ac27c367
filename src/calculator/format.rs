//! Number text handling for the calculator display.
//!
//! Operands live as text while they are typed, so the calculator needs to
//! move between text and `f64` in a predictable way:
//! - [`parse_number`] reads the longest numeric prefix, like `parseFloat`
//! - [`number_to_text`] renders a value the way a browser prints a number
//! - [`display_text`] shortens over-long operands for a 12-character display

use lazy_static::lazy_static;
use regex::Regex;

/// Longest operand text shown verbatim.
pub const MAX_DISPLAY_CHARS: usize = 12;

/// Magnitude from which long operands switch to exponential notation.
const EXPONENTIAL_THRESHOLD: f64 = 1e12;

/// Significant digits kept when a long operand is re-rendered.
const DISPLAY_PRECISION: usize = 12;

/// Fractional digits of the exponential rendering.
const EXPONENTIAL_DIGITS: usize = 6;

/// Enough `{:e}` precision to print any `f64` exactly.
const EXACT_DIGITS: usize = 800;

lazy_static! {
    /// Numeric prefix: optional sign, then `Infinity` or a decimal numeral
    /// with an optional exponent. `Infinity` appears when an overflowed
    /// result is parsed back from the operand text.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Text without a numeric prefix (including
/// a bare `"-"`) yields `NaN`.
pub fn parse_number(text: &str) -> f64 {
    let Some(found) = NUMERIC_PREFIX.find(text.trim_start()) else {
        return f64::NAN;
    };

    let prefix = found.as_str();
    if prefix.ends_with("Infinity") {
        return if prefix.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    prefix.parse().unwrap_or(f64::NAN)
}

/// Render `value` with the shortest digits that round-trip.
///
/// Plain decimal notation is used while the decimal point sits between
/// 6 places left of the first digit and 21 places right of it; anything
/// further out uses exponential notation (`1e-7`, `1.5e+21`). Negative zero
/// prints as `"0"`.
pub fn number_to_text(value: f64) -> String {
    if let Some(special) = non_finite_text(value) {
        return special;
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = split_scientific(&format!("{:e}", value.abs()));
    let sign = if value < 0.0 { "-" } else { "" };
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        format!("{}e{}", dotted_mantissa(&digits), signed_exponent(exponent))
    };

    format!("{}{}", sign, body)
}

/// Render `value` with `precision` significant digits.
///
/// Fixed notation is used for decimal exponents in `-6..precision`,
/// exponential notation otherwise. Trailing zeros are kept.
pub fn to_precision(value: f64, precision: usize) -> String {
    if let Some(special) = non_finite_text(value) {
        return special;
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if precision == 1 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(precision - 1))
        };
    }

    let (digits, exponent) = round_half_up(value, precision);
    let sign = if value < 0.0 { "-" } else { "" };

    let body = if exponent < -6 || exponent >= precision as i32 {
        format!("{}e{}", dotted_mantissa(&digits), signed_exponent(exponent))
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if int_len < digits.len() {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        } else {
            digits
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    };

    format!("{}{}", sign, body)
}

/// Render `value` in exponential notation with `fraction_digits` digits
/// after the point, e.g. `1.234568e+12`.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if let Some(special) = non_finite_text(value) {
        return special;
    }

    let (digits, exponent) = round_half_up(value, fraction_digits + 1);
    let sign = if value < 0.0 { "-" } else { "" };

    format!(
        "{}{}e{}",
        sign,
        dotted_mantissa(&digits),
        signed_exponent(exponent)
    )
}

/// Text shown for an operand: verbatim when it fits, otherwise re-rendered
/// from its numeric value.
pub fn display_text(operand: &str) -> String {
    if operand.chars().count() <= MAX_DISPLAY_CHARS {
        return operand.to_string();
    }

    let value = parse_number(operand);
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        to_exponential(value, EXPONENTIAL_DIGITS)
    } else {
        to_precision(value, DISPLAY_PRECISION)
    }
}

fn non_finite_text(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Split Rust's `{:e}` output (`"1.2345e3"`) into its digit string
/// (`"12345"`) and decimal exponent (`3`).
fn split_scientific(scientific: &str) -> (String, i32) {
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific, "0"));
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Round `|value|` to `significant` digits, breaking exact ties upward.
///
/// Returns the digit string and the decimal exponent of its first digit.
/// Rust's own `{:.*e}` breaks ties to even, which would print
/// `1000000500000` as `1.000000e+12` instead of `1.000001e+12`.
fn round_half_up(value: f64, significant: usize) -> (String, i32) {
    let significant = significant.max(1);
    let (exact, mut exponent) =
        split_scientific(&format!("{:.*e}", EXACT_DIGITS, value.abs()));
    let exact = exact.as_bytes();

    let mut digits: Vec<u8> = exact[..significant.min(exact.len())].to_vec();
    if exact.get(significant).is_some_and(|d| *d >= b'5') {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
            digits.pop();
            exponent += 1;
        }
    }

    (digits.into_iter().map(char::from).collect(), exponent)
}

fn dotted_mantissa(digits: &str) -> String {
    if digits.len() > 1 {
        format!("{}.{}", &digits[..1], &digits[1..])
    } else {
        digits.to_string()
    }
}

fn signed_exponent(exponent: i32) -> String {
    if exponent < 0 {
        format!("-{}", -exponent)
    } else {
        format!("+{}", exponent)
    }
}

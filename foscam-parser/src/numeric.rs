//! Lossless numeric coercion for leaf text.
//!
//! A leaf becomes a number only when the number prints back as exactly the
//! same text. Printing follows the ECMAScript Number-to-String rules, which
//! is the canonical form the camera firmware and its web clients agree on:
//! shortest round-trip digits, plain notation for decimal exponents in
//! `[-6, 21)` and `d.ddde±x` otherwise.

use crate::value::Value;

/// Format a finite or non-finite `f64` in canonical text form.
///
/// ```rust
/// use foscam_parser::numeric::format_number;
///
/// assert_eq!(format_number(999999999999.0), "999999999999");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(0.000001), "0.000001");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3"
    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => (scientific.as_str(), "0"),
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let point = exponent + 1;

    if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let e = point - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, e.abs())
        }
    }
}

/// Parse `text` as a number if, and only if, doing so is lossless.
///
/// Returns `None` for anything that is not numeric, that overflows to an
/// infinite magnitude, or whose canonical form differs from `text`
/// (`"01"`, `"1.0"`, `"+1"`, `"1e21"`, `"-0"`, surrounding whitespace).
pub fn round_trip_number(text: &str) -> Option<f64> {
    let n: f64 = text.parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    (format_number(n) == text).then_some(n)
}

/// Turn leaf text into a canonical leaf value.
pub fn coerce_leaf(text: &str) -> Value {
    match round_trip_number(text) {
        Some(n) => Value::Number(n),
        None => Value::Text(text.to_string()),
    }
}

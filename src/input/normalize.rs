//! Raw text to field value conversion.
//!
//! Parsing is lenient in the way browser number inputs are: leading
//! whitespace is skipped and the longest numeric prefix wins. Anything that
//! does not yield a finite, non-negative number becomes 0, which the
//! validation gate later reports as unset.

use tracing::debug;

use crate::models::NumericField;

/// Normalize raw text for a numeric field.
///
/// Age comes back as a whole number; weight and height keep their decimals.
pub fn normalize(field: NumericField, raw: &str) -> f64 {
    match field {
        NumericField::Age => f64::from(normalize_age(raw)),
        NumericField::Weight | NumericField::Height => normalize_decimal(raw),
    }
}

/// Normalize raw text into whole years. The fractional part is discarded.
pub fn normalize_age(raw: &str) -> u32 {
    if raw.is_empty() {
        return 0;
    }

    let cleaned = strip_leading_zeros(raw);
    match parse_int_prefix(cleaned) {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        Some(_) => 0,
        None => {
            debug!(raw, "malformed age text, using 0");
            0
        }
    }
}

/// Normalize raw text into a non-negative decimal (weight or height).
pub fn normalize_decimal(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }

    let cleaned = strip_leading_zeros(raw);
    match parse_float_prefix(cleaned) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        Some(_) => 0.0,
        None => {
            debug!(raw, "malformed decimal text, using 0");
            0.0
        }
    }
}

/// Drop leading zeros that precede another digit.
///
/// "007" becomes "7" and "000" becomes "0"; a zero followed by anything
/// other than a digit ("0.5") is kept.
pub fn strip_leading_zeros(raw: &str) -> &str {
    let zeros = raw.bytes().take_while(|&b| b == b'0').count();
    if zeros == 0 {
        return raw;
    }

    let followed_by_digit = raw.as_bytes().get(zeros).is_some_and(u8::is_ascii_digit);
    if followed_by_digit {
        &raw[zeros..]
    } else {
        &raw[zeros - 1..]
    }
}

/// Parse an optionally signed run of decimal digits at the start of `s`.
///
/// Returns `None` when no digits are present. Magnitudes beyond `i64`
/// saturate.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = split_sign(s);

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the longest floating point literal at the start of `s`.
///
/// Accepts `[+-]digits[.digits][e[+-]digits]` and `[+-]Infinity`.
/// Returns `None` when no number is present.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, body) = split_sign(s);

    if body.starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let bytes = body.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_len;

    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_len > 0 || frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    if int_len == 0 && frac_len == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let magnitude: f64 = body[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

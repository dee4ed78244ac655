//! Plain decimal literals.
//!
//! Range bounds and increments are exact decimals. Only plain notation is
//! accepted (`12`, `-0.25`, `.5`, `3.`); exponents, `inf` and `NaN` are not.
//! Formatting never uses exponent notation and keeps exactly the scale the
//! arithmetic produced, so `0.10` plus `0.05` prints as `0.15`.

use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Returns true if `text` is a plain decimal literal: optional sign, digits,
/// optional fractional part, at least one digit overall.
pub fn is_plain_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && all_digits(frac_part) && !(int_part.is_empty() && frac_part.is_empty())
}

/// Parse a plain decimal literal into an exact value.
///
/// Returns `None` for anything [`is_plain_literal`] rejects.
pub fn parse_plain(text: &str) -> Option<BigDecimal> {
    if !is_plain_literal(text) {
        return None;
    }

    // Normalise the two shorthand forms the literal grammar allows
    let (sign, unsigned) = match text.as_bytes()[0] {
        b'+' | b'-' => text.split_at(1),
        _ => ("", text),
    };
    let mut normalised = String::with_capacity(text.len() + 1);
    normalised.push_str(sign);
    if unsigned.starts_with('.') {
        normalised.push('0');
    }
    normalised.push_str(unsigned.strip_suffix('.').unwrap_or(unsigned));

    BigDecimal::from_str(&normalised).ok()
}

/// Format a decimal in plain notation, never with an exponent.
pub fn to_plain(value: &BigDecimal) -> String {
    value.to_plain_string()
}

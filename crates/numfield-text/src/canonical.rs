#![forbid(unsafe_code)]

//! Canonical form: ASCII digits with `.` as the only decimal point and no
//! grouping separators.

use numfield_core::Symbols;

/// Convert a displayed string into canonical form.
///
/// Every thousands symbol is dropped and the first decimal symbol becomes
/// `.`. Later decimal symbols are copied through unchanged; callers reject
/// such input before it gets here.
#[must_use]
pub fn canonicalize(text: &str, symbols: Symbols) -> String {
    let mut out = String::with_capacity(text.len());
    let mut seen_decimal = false;
    for ch in text.chars() {
        if ch == symbols.thousands {
            continue;
        }
        if ch == symbols.decimal && !seen_decimal {
            seen_decimal = true;
            out.push(Symbols::CANONICAL_DECIMAL);
        } else {
            out.push(ch);
        }
    }
    out
}

/// First char of `text` that is neither an ASCII digit nor one of `symbols`.
#[must_use]
pub fn find_disallowed(text: &str, symbols: Symbols) -> Option<char> {
    text.chars()
        .find(|&ch| !ch.is_ascii_digit() && ch != symbols.decimal && ch != symbols.thousands)
}

/// Numeric value of a canonical string.
///
/// `"1."` is 1 and `".5"` is 0.5. Returns `None` for the empty string, a lone
/// point, or anything that is not digits with at most one point.
#[must_use]
pub fn parse_canonical(canonical: &str) -> Option<f64> {
    let mut points = 0;
    let mut digits = 0;
    for ch in canonical.chars() {
        match ch {
            '0'..='9' => digits += 1,
            Symbols::CANONICAL_DECIMAL => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    canonical.parse().ok()
}

#![forbid(unsafe_code)]

//! Digit grouping for display.

use numfield_core::Symbols;

/// Render a canonical string with the display symbols.
///
/// The integer part gets a thousands symbol every three digits counted from
/// the right. The fractional part is copied verbatim after the decimal
/// symbol. A trailing point survives, so `"1."` renders as `"1,"` while the
/// user is still typing the fraction.
#[must_use]
pub fn format(canonical: &str, symbols: Symbols) -> String {
    let (integer, fraction) = match canonical.split_once(Symbols::CANONICAL_DECIMAL) {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (canonical, None),
    };

    let digits = integer.chars().count();
    let separators = digits.saturating_sub(1) / 3;
    let mut out = String::with_capacity(
        canonical.len() + separators * symbols.thousands.len_utf8() + symbols.decimal.len_utf8(),
    );
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(symbols.thousands);
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push(symbols.decimal);
        out.push_str(fraction);
    }
    out
}

/// Render a number for display, as set programmatically.
///
/// Returns `None` for negative or non-finite values, which a field cannot show.
#[must_use]
pub fn format_number(value: f64, symbols: Symbols) -> Option<String> {
    if !value.is_finite() || (value.is_sign_negative() && value != 0.0) {
        return None;
    }
    // `-0.0` prints as "-0".
    let canonical = if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    };
    Some(format(&canonical, symbols))
}

/// Char offset of the first decimal symbol in a displayed string.
#[must_use]
pub fn decimal_position(text: &str, symbols: Symbols) -> Option<usize> {
    text.chars().position(|ch| ch == symbols.decimal)
}

/// Number of thousands symbols in the integer part of a displayed string.
#[must_use]
pub fn count_separators(text: &str, symbols: Symbols) -> usize {
    text.chars()
        .take_while(|&ch| ch != symbols.decimal)
        .filter(|&ch| ch == symbols.thousands)
        .count()
}

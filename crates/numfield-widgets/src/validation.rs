#![forbid(unsafe_code)]

//! Value rules for a numeric field.
//!
//! [`validate`] reports the first rule a canonical value breaks. Whether that
//! blocks the edit is up to [`FieldError::blocks_commit`]: mode and fraction
//! errors always do, bound errors only under [`RangePolicy::Blocking`].
//!
//! [`RangePolicy::Blocking`]: numfield_core::RangePolicy::Blocking

use numfield_core::{FieldError, NumFieldOptions, NumericMode, Symbols};
use numfield_text::parse_canonical;

/// Decimal and thousands symbols must differ, and neither may be a digit.
pub fn validate_symbols(symbols: Symbols) -> Result<(), FieldError> {
    if symbols.is_ambiguous() {
        return Err(FieldError::AmbiguousSymbols {
            symbol: symbols.decimal,
        });
    }
    match symbols.digit_symbol() {
        Some(symbol) => Err(FieldError::DigitSymbol { symbol }),
        None => Ok(()),
    }
}

/// Check a canonical value against mode and bounds.
///
/// In integer mode any decimal point is a fraction, even `"12."` or
/// `"12.0"`. Other values that do not parse (`""`) only get the mode check.
/// When both bounds are violated, which needs `min > max`, the upper bound
/// is reported.
#[must_use]
pub fn validate(canonical: &str, options: &NumFieldOptions) -> Option<FieldError> {
    let Some(mode) = options.mode else {
        return Some(FieldError::ModeNotSelected);
    };
    if mode == NumericMode::Integer && canonical.contains(Symbols::CANONICAL_DECIMAL) {
        return Some(FieldError::FractionalNotAllowed);
    }
    let value = parse_canonical(canonical)?;

    if let Some(max) = options.max_value
        && value > max
    {
        return Some(FieldError::AboveMaximum { max });
    }
    if let Some(min) = options.min_value
        && value < min
    {
        return Some(FieldError::BelowMinimum { min });
    }
    None
}

/// A typed decimal symbol is legal once, and only in decimal mode.
///
/// `next` is the raw text including the new symbol.
pub fn validate_decimal_insertion(
    next: &str,
    mode: NumericMode,
    symbols: Symbols,
) -> Result<(), FieldError> {
    if mode == NumericMode::Integer {
        return Err(FieldError::DecimalSymbolNotAllowed);
    }
    if next.chars().filter(|&ch| ch == symbols.decimal).count() > 1 {
        return Err(FieldError::DecimalSymbolNotAllowed);
    }
    Ok(())
}

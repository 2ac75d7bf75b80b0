#![forbid(unsafe_code)]

//! Field-local error taxonomy.
//!
//! Every error is recoverable and user-visible. Each kind carries a stable
//! code for i18n lookup next to its default English message.

use std::fmt;

use crate::config::RangePolicy;

/// Error code for a field without a numeric mode.
pub const ERROR_CODE_MODE_NOT_SELECTED: &str = "mode_not_selected";
/// Error code for identical decimal and thousands symbols.
pub const ERROR_CODE_AMBIGUOUS_SYMBOLS: &str = "ambiguous_symbols";
/// Error code for a symbol that is an ASCII digit.
pub const ERROR_CODE_DIGIT_SYMBOL: &str = "digit_symbol";
/// Error code for a character that is neither a digit nor a symbol.
pub const ERROR_CODE_DISALLOWED_CHARACTER: &str = "disallowed_character";
/// Error code for a decimal symbol typed where none may go.
pub const ERROR_CODE_DECIMAL_NOT_ALLOWED: &str = "decimal_not_allowed";
/// Error code for a fractional value in integer mode.
pub const ERROR_CODE_FRACTIONAL_NOT_ALLOWED: &str = "fractional_not_allowed";
/// Error code for a value under the lower bound.
pub const ERROR_CODE_BELOW_MINIMUM: &str = "below_minimum";
/// Error code for a value over the upper bound.
pub const ERROR_CODE_ABOVE_MAXIMUM: &str = "above_maximum";

/// Why an edit was refused or flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// No numeric mode is configured.
    ModeNotSelected,
    /// Decimal and thousands symbols are the same character.
    AmbiguousSymbols { symbol: char },
    /// A configured symbol is an ASCII digit and would be read as one.
    DigitSymbol { symbol: char },
    /// The typed character is neither a digit nor a configured symbol.
    DisallowedCharacter { ch: char },
    /// Decimal symbol typed in integer mode or a second time.
    DecimalSymbolNotAllowed,
    /// Integer mode and the value has a nonzero fractional part.
    FractionalNotAllowed,
    /// Value is under the configured minimum.
    BelowMinimum { min: f64 },
    /// Value is over the configured maximum.
    AboveMaximum { max: f64 },
}

impl FieldError {
    /// Stable identifier for programmatic handling and i18n.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ModeNotSelected => ERROR_CODE_MODE_NOT_SELECTED,
            Self::AmbiguousSymbols { .. } => ERROR_CODE_AMBIGUOUS_SYMBOLS,
            Self::DigitSymbol { .. } => ERROR_CODE_DIGIT_SYMBOL,
            Self::DisallowedCharacter { .. } => ERROR_CODE_DISALLOWED_CHARACTER,
            Self::DecimalSymbolNotAllowed => ERROR_CODE_DECIMAL_NOT_ALLOWED,
            Self::FractionalNotAllowed => ERROR_CODE_FRACTIONAL_NOT_ALLOWED,
            Self::BelowMinimum { .. } => ERROR_CODE_BELOW_MINIMUM,
            Self::AboveMaximum { .. } => ERROR_CODE_ABOVE_MAXIMUM,
        }
    }

    /// `true` for the bound errors, whose effect depends on [`RangePolicy`].
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::BelowMinimum { .. } | Self::AboveMaximum { .. })
    }

    /// Whether this error prevents the edit from being committed.
    #[must_use]
    pub const fn blocks_commit(&self, policy: RangePolicy) -> bool {
        !self.is_range() || matches!(policy, RangePolicy::Blocking)
    }

    /// Default English message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeNotSelected => f.write_str("select decimal or integer mode"),
            Self::AmbiguousSymbols { symbol } => write!(
                f,
                "decimal and thousands symbols must differ (both are {symbol:?})"
            ),
            Self::DigitSymbol { symbol } => {
                write!(f, "symbol {symbol:?} must not be a digit")
            }
            Self::DisallowedCharacter { ch } => write!(f, "character {ch:?} is not allowed"),
            Self::DecimalSymbolNotAllowed => f.write_str("decimal symbol is not allowed here"),
            Self::FractionalNotAllowed => {
                f.write_str("fractional part is not allowed in integer mode")
            }
            Self::BelowMinimum { min } => write!(f, "value must be at least {min}"),
            Self::AboveMaximum { max } => write!(f, "value must be at most {max}"),
        }
    }
}

impl std::error::Error for FieldError {}

#![forbid(unsafe_code)]

//! Field configuration: numeric mode, symbols, bounds and range policy.
//!
//! Options are built with `with_*` builder methods, or read from the
//! environment with [`NumFieldOptions::from_env`]:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `NUMFIELD_MODE` | `integer` or `decimal` |
//! | `NUMFIELD_DECIMAL_SYMBOL` | single character, default `,` |
//! | `NUMFIELD_THOUSANDS_SYMBOL` | single character, default `.` |
//! | `NUMFIELD_MIN` / `NUMFIELD_MAX` | optional bounds |
//! | `NUMFIELD_RANGE_POLICY` | `advisory` or `blocking` |
//!
//! # Example
//!
//! ```
//! use numfield_core::{NumFieldOptions, NumericMode};
//!
//! let options = NumFieldOptions::new()
//!     .with_mode(NumericMode::Decimal)
//!     .with_thousands_symbol(' ')
//!     .with_max_value(1_000.0);
//! assert_eq!(options.symbols.decimal, ',');
//! assert_eq!(options.symbols.thousands, ' ');
//! ```

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the numeric mode.
pub const ENV_MODE: &str = "NUMFIELD_MODE";
/// Environment variable overriding the decimal symbol.
pub const ENV_DECIMAL_SYMBOL: &str = "NUMFIELD_DECIMAL_SYMBOL";
/// Environment variable overriding the thousands symbol.
pub const ENV_THOUSANDS_SYMBOL: &str = "NUMFIELD_THOUSANDS_SYMBOL";
/// Environment variable for the lower bound.
pub const ENV_MIN: &str = "NUMFIELD_MIN";
/// Environment variable for the upper bound.
pub const ENV_MAX: &str = "NUMFIELD_MAX";
/// Environment variable selecting the range policy.
pub const ENV_RANGE_POLICY: &str = "NUMFIELD_RANGE_POLICY";

/// Whether the field accepts a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumericMode {
    /// Whole numbers only; the decimal symbol is rejected.
    Integer,
    /// Whole numbers with an optional fractional part.
    Decimal,
}

impl NumericMode {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for NumericMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Self::Integer),
            "decimal" | "dec" => Ok(Self::Decimal),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// What a range violation does to the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RangePolicy {
    /// Out-of-range values are committed and the error is only reported.
    #[default]
    Advisory,
    /// Out-of-range values are rejected like any other invalid edit.
    Blocking,
}

impl FromStr for RangePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "blocking" => Ok(Self::Blocking),
            _ => Err(ConfigError::InvalidRangePolicy(s.to_string())),
        }
    }
}

/// The decimal and thousands symbols used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbols {
    /// Separates the integer part from the fractional part.
    pub decimal: char,
    /// Groups integer digits by three.
    pub thousands: char,
}

impl Symbols {
    /// The decimal point of the canonical form.
    pub const CANONICAL_DECIMAL: char = '.';

    /// Create a symbol pair.
    #[must_use]
    pub const fn new(decimal: char, thousands: char) -> Self {
        Self { decimal, thousands }
    }

    /// `true` when both symbols are the same character, which makes a
    /// displayed string impossible to read back.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        self.decimal == self.thousands
    }

    /// The first symbol that is an ASCII digit, decimal symbol first.
    #[must_use]
    pub const fn digit_symbol(self) -> Option<char> {
        if self.decimal.is_ascii_digit() {
            Some(self.decimal)
        } else if self.thousands.is_ascii_digit() {
            Some(self.thousands)
        } else {
            None
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new(',', '.')
    }
}

/// Options record for one numeric field.
///
/// `mode` has no default: a field without a mode refuses every edit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumFieldOptions {
    /// Integer or decimal input.
    pub mode: Option<NumericMode>,
    /// Display symbols.
    pub symbols: Symbols,
    /// Inclusive lower bound.
    pub min_value: Option<f64>,
    /// Inclusive upper bound.
    pub max_value: Option<f64>,
    /// Whether bound violations block the edit.
    pub range_policy: RangePolicy,
}

impl NumFieldOptions {
    /// Options with default symbols and no mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numeric mode (builder).
    #[must_use]
    pub fn with_mode(mut self, mode: NumericMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the decimal symbol (builder).
    #[must_use]
    pub fn with_decimal_symbol(mut self, symbol: char) -> Self {
        self.symbols.decimal = symbol;
        self
    }

    /// Set the thousands symbol (builder).
    #[must_use]
    pub fn with_thousands_symbol(mut self, symbol: char) -> Self {
        self.symbols.thousands = symbol;
        self
    }

    /// Set both symbols (builder).
    #[must_use]
    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the lower bound (builder).
    #[must_use]
    pub fn with_min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Set the upper bound (builder).
    #[must_use]
    pub fn with_max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Set the range policy (builder).
    #[must_use]
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Read options from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read options through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(mode) = non_empty(lookup(ENV_MODE)) {
            options.mode = Some(mode.parse()?);
        }
        if let Some(raw) = lookup(ENV_DECIMAL_SYMBOL) {
            options.symbols.decimal = parse_symbol(ENV_DECIMAL_SYMBOL, &raw)?;
        }
        if let Some(raw) = lookup(ENV_THOUSANDS_SYMBOL) {
            options.symbols.thousands = parse_symbol(ENV_THOUSANDS_SYMBOL, &raw)?;
        }
        if let Some(raw) = non_empty(lookup(ENV_MIN)) {
            options.min_value = Some(parse_bound(ENV_MIN, &raw)?);
        }
        if let Some(raw) = non_empty(lookup(ENV_MAX)) {
            options.max_value = Some(parse_bound(ENV_MAX, &raw)?);
        }
        if let Some(raw) = non_empty(lookup(ENV_RANGE_POLICY)) {
            options.range_policy = raw.parse()?;
        }
        Ok(options)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// Symbols are not trimmed: a space is a valid thousands symbol.
fn parse_symbol(variable: &'static str, raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if !symbol.is_ascii_digit() => Ok(symbol),
        _ => Err(ConfigError::InvalidSymbol {
            variable,
            value: raw.to_string(),
        }),
    }
}

fn parse_bound(variable: &'static str, raw: &str) -> Result<f64, ConfigError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConfigError::InvalidBound {
            variable,
            value: raw.to_string(),
        }),
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Mode is neither `integer` nor `decimal`.
    InvalidMode(String),
    /// Range policy is neither `advisory` nor `blocking`.
    InvalidRangePolicy(String),
    /// A symbol must be exactly one non-digit character.
    InvalidSymbol {
        variable: &'static str,
        value: String,
    },
    /// A bound must be a finite number.
    InvalidBound {
        variable: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode(value) => {
                write!(f, "invalid mode {value:?}: expected \"integer\" or \"decimal\"")
            }
            Self::InvalidRangePolicy(value) => write!(
                f,
                "invalid range policy {value:?}: expected \"advisory\" or \"blocking\""
            ),
            Self::InvalidSymbol { variable, value } => {
                write!(f, "{variable}: {value:?} is not a single non-digit character")
            }
            Self::InvalidBound { variable, value } => {
                write!(f, "{variable}: {value:?} is not a finite number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

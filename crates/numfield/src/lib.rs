#![forbid(unsafe_code)]

//! Numfield public facade crate.
//!
//! Re-exports the field options, the formatting helpers and the
//! [`NumericInput`] controller, and offers a prelude for day-to-day use.
//!
//! ```
//! use numfield::prelude::*;
//!
//! let mut input = NumericInput::new(NumFieldOptions::new().with_mode(NumericMode::Decimal));
//! let view = input.on_raw_change("1234,5", 6);
//! assert_eq!(view.displayed_text, "1.234,5");
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use numfield_core::{
    ConfigError, FieldError, NumFieldOptions, NumericMode, RangePolicy, RawChange, Symbols,
};

// --- Text re-exports -------------------------------------------------------

pub use numfield_text::{canonicalize, format, format_number, parse_canonical};

// --- Widget re-exports -----------------------------------------------------

pub use numfield_widgets::{
    EditOutcome, EditPhase, EditSurface, FieldView, NumericInput, ValueChange,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for numfield APIs.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Options could not be read from the environment.
    Config(ConfigError),
    /// The field refused a value.
    Field(FieldError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Field(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FieldError> for Error {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

/// Standard result type for numfield APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a controller from `NUMFIELD_*` environment variables.
pub fn input_from_env() -> Result<NumericInput> {
    Ok(NumericInput::new(NumFieldOptions::from_env()?))
}

/// Build a controller from `NUMFIELD_*` variables and show `value` in it.
pub fn input_from_env_with_value(value: f64) -> Result<NumericInput> {
    let mut input = input_from_env()?;
    input.set_value(value)?;
    Ok(input)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        EditOutcome, EditSurface, Error, FieldError, FieldView, NumFieldOptions, NumericInput,
        NumericMode, RangePolicy, RawChange, Result, Symbols,
    };

    pub use crate::{core, text, widgets};
}

pub use numfield_core as core;
pub use numfield_text as text;
pub use numfield_widgets as widgets;

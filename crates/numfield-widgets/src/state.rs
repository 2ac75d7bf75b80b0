#![forbid(unsafe_code)]

//! Per-field state.

use numfield_core::{FieldError, Symbols};

/// The state one field carries between keystrokes.
///
/// `displayed` always uses `last_symbols`; the hot-swap reconciler keeps
/// `last_symbols` in step with the configured symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub(crate) displayed: String,
    pub(crate) last_symbols: Symbols,
    pub(crate) error: Option<FieldError>,
}

impl FieldState {
    /// Empty state rendered with `symbols`.
    #[must_use]
    pub fn new(symbols: Symbols) -> Self {
        Self {
            displayed: String::new(),
            last_symbols: symbols,
            error: None,
        }
    }

    /// State showing `displayed`, which must already use `symbols`.
    #[must_use]
    pub fn with_displayed(symbols: Symbols, displayed: impl Into<String>) -> Self {
        Self {
            displayed: displayed.into(),
            ..Self::new(symbols)
        }
    }

    /// Text currently shown.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Symbols `displayed` is written with.
    pub fn last_symbols(&self) -> Symbols {
        self.last_symbols
    }

    /// Error currently shown, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new(Symbols::default())
    }
}

#![forbid(unsafe_code)]

//! Numeric input controller for text widgets.
//!
//! [`NumericInput`] sits between a text widget and the user: the widget
//! reports every raw change, the controller decides what the field should
//! show and where the caret goes, and the widget renders that verbatim.

pub mod caret;
pub mod numeric_input;
pub mod reconcile;
pub mod state;
pub mod validation;

pub use caret::{CaretRule, remap_caret};
pub use numeric_input::{ChangeCallback, EditOutcome, EditPhase, NumericInput, ValueChange};
pub use reconcile::{reconcile_symbols, substitute_symbols};
pub use state::FieldState;
pub use validation::{validate, validate_decimal_insertion, validate_symbols};

use numfield_core::FieldError;

/// The rendering side of a field.
///
/// The controller drives a surface in three phases per edit, always in this
/// order: [`commit_value`](Self::commit_value), then
/// [`run_validation`](Self::run_validation), then
/// [`set_caret`](Self::set_caret). A caret offset is only meaningful against
/// text the surface already holds.
pub trait EditSurface {
    /// Replace the rendered text.
    fn commit_value(&mut self, text: &str);

    /// Show or clear the field error.
    fn run_validation(&mut self, error: Option<&FieldError>);

    /// Move the caret, in chars.
    fn set_caret(&mut self, offset: usize);
}

/// Everything a widget needs to render the field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldView {
    /// Text to display.
    pub displayed_text: String,
    /// Caret offset in `displayed_text`, in chars.
    pub caret_offset_after_edit: usize,
    /// Whether an error is showing.
    pub has_error: bool,
    /// Message for the showing error.
    pub error_message: Option<String>,
}

impl EditSurface for FieldView {
    fn commit_value(&mut self, text: &str) {
        self.displayed_text.clear();
        self.displayed_text.push_str(text);
    }

    fn run_validation(&mut self, error: Option<&FieldError>) {
        self.has_error = error.is_some();
        self.error_message = error.map(FieldError::message);
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret_offset_after_edit = offset;
    }
}

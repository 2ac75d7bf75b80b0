#![forbid(unsafe_code)]

//! Numeric input controller.
//!
//! Every raw change from the widget runs through the same pipeline:
//!
//! 1. symbol check and hot-swap reconciliation
//! 2. empty text shortcut
//! 3. diff against the shown text and classification of the keystroke
//! 4. canonicalization, blocking validation, regrouping
//! 5. caret remapping
//!
//! The result reaches the widget through an [`EditSurface`] in three fixed
//! phases: value, validation, caret.
//!
//! # Example
//!
//! ```
//! use numfield_core::{NumFieldOptions, NumericMode};
//! use numfield_widgets::NumericInput;
//!
//! let mut input = NumericInput::new(NumFieldOptions::new().with_mode(NumericMode::Integer));
//! let view = input.on_raw_change("1234", 4);
//! assert_eq!(view.displayed_text, "1.234");
//! assert_eq!(view.caret_offset_after_edit, 5);
//! assert!(!view.has_error);
//! ```

use std::fmt;

use numfield_core::{
    FieldError, NumFieldOptions, NumericMode, RawChange, debug, debug_span, trace,
};
use numfield_text::{
    EditClass, EditKind, canonicalize, char_len, classify, diff, find_disallowed, format,
    format_number, parse_canonical,
};

use crate::caret::{CaretRule, remap_caret};
use crate::reconcile::reconcile_symbols;
use crate::state::FieldState;
use crate::validation::{validate, validate_decimal_insertion, validate_symbols};
use crate::{EditSurface, FieldView};

/// Callback invoked after each committed value change.
pub type ChangeCallback = Box<dyn Fn(&ValueChange) + Send + Sync>;

/// A committed value, as passed to the change callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    /// Text now shown.
    pub displayed: String,
    /// Canonical form of `displayed`.
    pub canonical: String,
    /// Parsed value, `None` for an empty or point-only field.
    pub value: Option<f64>,
}

/// Where the controller is in handling one raw change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditPhase {
    /// Waiting for the next raw change.
    Idle,
    /// A raw change is being processed.
    Editing,
    /// The edit was applied.
    Committed,
    /// The edit was refused and the previous text restored.
    Rejected,
}

/// What a raw change did to the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// New text committed.
    Committed,
    /// The widget was emptied.
    Cleared,
    /// The raw text matched the shown text.
    Unchanged,
    /// The edit was refused.
    Rejected(FieldError),
}

impl EditOutcome {
    /// Terminal phase of the edit.
    #[must_use]
    pub const fn phase(&self) -> EditPhase {
        match self {
            Self::Rejected(_) => EditPhase::Rejected,
            Self::Committed | Self::Cleared | Self::Unchanged => EditPhase::Committed,
        }
    }

    /// `true` when the edit was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// An edit that passed every blocking rule.
struct Staged {
    displayed: String,
    caret: usize,
    outcome: EditOutcome,
}

/// A refused edit and where the caret goes back to.
struct Rejection {
    error: FieldError,
    caret: usize,
}

/// A numeric text field controller.
///
/// Owns the shown text, the remembered symbols and the current error of one
/// field. Options are read-only to the pipeline and can be replaced at any
/// time with [`set_options`](Self::set_options).
pub struct NumericInput {
    options: NumFieldOptions,
    state: FieldState,
    /// Caret offset in chars.
    caret: usize,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericInput")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("caret", &self.caret)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        Self::new(NumFieldOptions::default())
    }
}

impl NumericInput {
    /// Create an empty field.
    pub fn new(options: NumFieldOptions) -> Self {
        Self {
            state: FieldState::new(options.symbols),
            options,
            caret: 0,
            on_change: None,
        }
    }

    // --- Builder methods ---

    /// Start with a programmatic value (builder).
    ///
    /// A value the field refuses leaves it empty with the error shown.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        // The refusal is kept in the field error.
        let _ = self.set_value(value);
        self
    }

    /// Set the change callback (builder).
    #[must_use]
    pub fn with_on_change(mut self, f: impl Fn(&ValueChange) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // --- Accessors ---

    /// Current options.
    pub fn options(&self) -> &NumFieldOptions {
        &self.options
    }

    /// Per-field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Text currently shown.
    pub fn displayed(&self) -> &str {
        &self.state.displayed
    }

    /// Caret offset in chars.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Error currently shown, if any.
    pub fn error(&self) -> Option<&FieldError> {
        self.state.error.as_ref()
    }

    /// Shown text in canonical form.
    pub fn canonical_value(&self) -> String {
        canonicalize(&self.state.displayed, self.state.last_symbols)
    }

    /// Shown text as a number.
    pub fn value(&self) -> Option<f64> {
        parse_canonical(&self.canonical_value())
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> FieldView {
        FieldView {
            displayed_text: self.state.displayed.clone(),
            caret_offset_after_edit: self.caret,
            has_error: self.state.error.is_some(),
            error_message: self.state.error.as_ref().map(FieldError::message),
        }
    }

    // --- Configuration ---

    /// Replace the options.
    ///
    /// New symbols are applied to the shown text right away; the returned
    /// view must be rendered before the next raw change so the widget text
    /// matches. Ambiguous symbols keep the old text and show the error.
    pub fn set_options(&mut self, options: NumFieldOptions) -> FieldView {
        self.options = options;
        let reconciled = validate_symbols(options.symbols)
            .and_then(|()| reconcile_symbols(&mut self.state, options.symbols, "").map(drop));
        self.state.error = match reconciled {
            Ok(()) => self.current_error(),
            Err(error) => Some(error),
        };
        self.caret = self.caret.min(char_len(&self.state.displayed));
        self.view()
    }

    // --- Programmatic edits ---

    /// Show `value`, formatted with the current symbols.
    ///
    /// The value goes through the same blocking rules as typed input. On
    /// refusal the text is kept and the error is shown and returned.
    pub fn set_value(&mut self, value: f64) -> Result<(), FieldError> {
        let symbols = self.options.symbols;
        let staged = validate_symbols(symbols)
            .and_then(|()| reconcile_symbols(&mut self.state, symbols, "").map(drop))
            .and_then(|()| {
                format_number(value, symbols).ok_or_else(|| {
                    let shown = value.to_string();
                    let ch = shown
                        .chars()
                        .find(|ch| !ch.is_ascii_digit() && *ch != '.')
                        .unwrap_or('-');
                    FieldError::DisallowedCharacter { ch }
                })
            })
            .and_then(|displayed| {
                let canonical = canonicalize(&displayed, symbols);
                match self.blocking_error(&canonical) {
                    Some(error) => Err(error),
                    None => Ok(displayed),
                }
            });

        match staged {
            Ok(displayed) => {
                let changed = displayed != self.state.displayed;
                self.caret = char_len(&displayed);
                self.state.displayed = displayed;
                self.state.error = self.current_error();
                if changed {
                    self.notify_change();
                }
                Ok(())
            }
            Err(error) => {
                self.state.error = Some(error);
                Err(error)
            }
        }
    }

    /// Empty the field and clear its error.
    pub fn clear(&mut self) {
        let changed = !self.state.displayed.is_empty();
        self.state.displayed.clear();
        self.state.error = None;
        self.caret = 0;
        if changed {
            self.notify_change();
        }
    }

    // --- Event handling ---

    /// Handle a raw change and return what to render.
    pub fn on_raw_change(&mut self, raw: &str, caret: usize) -> FieldView {
        let mut view = self.view();
        self.dispatch(raw, caret, &mut view);
        view
    }

    /// Handle a [`RawChange`] event and return what to render.
    pub fn handle_event(&mut self, event: &RawChange) -> FieldView {
        self.on_raw_change(&event.text, event.caret)
    }

    /// Handle a raw change, driving `surface` through the three commit phases.
    ///
    /// A refused edit still runs all three phases: the previous text is
    /// committed again, the error is shown and the caret is put back.
    pub fn dispatch<S: EditSurface + ?Sized>(
        &mut self,
        raw: &str,
        caret: usize,
        surface: &mut S,
    ) -> EditOutcome {
        let span = debug_span!("numeric_input.dispatch", raw_len = raw.len(), caret);
        let _guard = span.enter();
        trace!(from = ?EditPhase::Idle, to = ?EditPhase::Editing, "edit phase");

        let outcome = match self.stage(raw, caret) {
            Ok(staged) => {
                let changed = staged.displayed != self.state.displayed;
                self.commit_value(staged.displayed, surface);
                self.run_validation(None, surface);
                self.set_caret(staged.caret, surface);
                if changed {
                    self.notify_change();
                }
                staged.outcome
            }
            Err(rejection) => {
                let restored = self.state.displayed.clone();
                self.commit_value(restored, surface);
                self.run_validation(Some(rejection.error), surface);
                self.set_caret(rejection.caret, surface);
                EditOutcome::Rejected(rejection.error)
            }
        };

        debug!(
            outcome = ?outcome,
            displayed = %self.state.displayed,
            caret = self.caret,
            "edit finished"
        );
        trace!(from = ?outcome.phase(), to = ?EditPhase::Idle, "edit phase");
        outcome
    }

    // --- Pipeline ---

    fn stage(&mut self, raw: &str, caret: usize) -> Result<Staged, Rejection> {
        let symbols = self.options.symbols;
        // Symbol substitution is char for char, so lengths survive reconciliation.
        let kind = match char_len(raw).cmp(&char_len(&self.state.displayed)) {
            std::cmp::Ordering::Less => EditKind::Deletion,
            std::cmp::Ordering::Equal if raw == self.state.displayed => EditKind::NoOp,
            _ => EditKind::Insertion,
        };
        let reject = |state: &FieldState, error: FieldError| Rejection {
            error,
            caret: remap_caret(
                &state.displayed,
                &state.displayed,
                caret,
                CaretRule::Rejected { kind },
                symbols,
            ),
        };

        if let Err(error) = validate_symbols(symbols) {
            return Err(reject(&self.state, error));
        }
        let raw = match reconcile_symbols(&mut self.state, symbols, raw) {
            Ok(raw) => raw,
            Err(error) => return Err(reject(&self.state, error)),
        };

        if raw.is_empty() {
            return Ok(Staged {
                displayed: String::new(),
                caret: 0,
                outcome: EditOutcome::Cleared,
            });
        }
        let Some(mode) = self.options.mode else {
            return Err(reject(&self.state, FieldError::ModeNotSelected));
        };

        let prev = self.state.displayed.as_str();
        let edit = diff(prev, &raw);
        let rule = match classify(&edit, symbols) {
            EditClass::NoOp => {
                return Ok(Staged {
                    displayed: prev.to_string(),
                    caret: caret.min(char_len(prev)),
                    outcome: EditOutcome::Unchanged,
                });
            }
            EditClass::Disallowed(ch) => {
                return Err(reject(&self.state, FieldError::DisallowedCharacter { ch }));
            }
            EditClass::DecimalInsertion => {
                if let Err(error) = validate_decimal_insertion(&raw, mode, symbols) {
                    return Err(reject(&self.state, error));
                }
                CaretRule::DecimalInserted
            }
            EditClass::DecimalDeletion => CaretRule::DecimalRemoved,
            EditClass::Digit | EditClass::SeparatorDeletion => CaretRule::Digit {
                index: edit.index().unwrap_or(0),
                mode,
            },
        };

        // Multi-char edits can smuggle in more than the diffed char.
        if let Some(ch) = find_disallowed(&raw, symbols) {
            return Err(reject(&self.state, FieldError::DisallowedCharacter { ch }));
        }
        let decimals = raw.chars().filter(|&ch| ch == symbols.decimal).count();
        if decimals > 1 {
            return Err(reject(&self.state, FieldError::DecimalSymbolNotAllowed));
        }
        // A deletion may leave a stale decimal behind; validation flags it.
        if mode == NumericMode::Integer && decimals > 0 && kind != EditKind::Deletion {
            return Err(reject(&self.state, FieldError::DecimalSymbolNotAllowed));
        }

        let canonical = canonicalize(&raw, symbols);
        if let Some(error) = self.blocking_error(&canonical) {
            return Err(reject(&self.state, error));
        }
        let displayed = format(&canonical, symbols);
        let caret = remap_caret(prev, &displayed, caret, rule, symbols);
        Ok(Staged {
            displayed,
            caret,
            outcome: EditOutcome::Committed,
        })
    }

    /// Phase 1: commit the new text.
    fn commit_value<S: EditSurface + ?Sized>(&mut self, displayed: String, surface: &mut S) {
        self.state.displayed = displayed;
        surface.commit_value(&self.state.displayed);
    }

    /// Phase 2: validate the committed text, or report the refusal.
    fn run_validation<S: EditSurface + ?Sized>(
        &mut self,
        refusal: Option<FieldError>,
        surface: &mut S,
    ) {
        self.state.error = refusal.or_else(|| self.current_error());
        surface.run_validation(self.state.error.as_ref());
    }

    /// Phase 3: place the caret.
    fn set_caret<S: EditSurface + ?Sized>(&mut self, caret: usize, surface: &mut S) {
        self.caret = caret;
        surface.set_caret(caret);
    }

    fn blocking_error(&self, canonical: &str) -> Option<FieldError> {
        let policy = self.options.range_policy;
        validate(canonical, &self.options).filter(|error| error.blocks_commit(policy))
    }

    // An empty field has nothing to flag.
    fn current_error(&self) -> Option<FieldError> {
        if self.state.displayed.is_empty() {
            None
        } else {
            validate(&self.canonical_value(), &self.options)
        }
    }

    fn notify_change(&self) {
        if let Some(ref callback) = self.on_change {
            let canonical = self.canonical_value();
            let value = parse_canonical(&canonical);
            callback(&ValueChange {
                displayed: self.state.displayed.clone(),
                canonical,
                value,
            });
        }
    }
}

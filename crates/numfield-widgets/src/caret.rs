#![forbid(unsafe_code)]

//! Caret remapping after reformatting.
//!
//! The formatter adds and removes thousands symbols, so the caret offset the
//! widget reported no longer points where the user was typing. All caret
//! arithmetic of the controller lives here:
//!
//! | Rule | Edit | Caret |
//! |---|---|---|
//! | [`DecimalInserted`](CaretRule::DecimalInserted) | decimal typed, none before | just after the decimal symbol |
//! | [`DecimalRemoved`](CaretRule::DecimalRemoved) | decimal deleted | ±1 if the integer part gained/lost a separator |
//! | [`Digit`](CaretRule::Digit) | digit or separator edit | ±1 with the separator count, fixed left of a decimal |
//! | [`Rejected`](CaretRule::Rejected) | refused edit | undo the provisional keystroke |
//!
//! Offsets are in chars and always clamped to the new text.

use std::cmp::Ordering;

use numfield_core::{NumericMode, Symbols};
use numfield_text::{EditKind, char_len, count_separators, decimal_position};

/// Which caret rule applies to an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretRule {
    /// The decimal symbol was typed into text without one.
    DecimalInserted,
    /// The decimal symbol was deleted.
    DecimalRemoved,
    /// A digit changed at char `index`; `mode` is the field's numeric mode.
    Digit { index: usize, mode: NumericMode },
    /// The edit was refused; `kind` is what the widget provisionally did.
    Rejected { kind: EditKind },
}

/// Compute the caret offset in `new` after an edit of `prev`.
///
/// `caret_before` is the offset the widget reported with the raw change.
#[must_use]
pub fn remap_caret(
    prev: &str,
    new: &str,
    caret_before: usize,
    rule: CaretRule,
    symbols: Symbols,
) -> usize {
    let caret = match rule {
        CaretRule::DecimalInserted => match decimal_position(new, symbols) {
            Some(position) => position + 1,
            None => caret_before,
        },
        CaretRule::DecimalRemoved => shift_by_separators(prev, new, caret_before, symbols),
        CaretRule::Digit { index, mode } => {
            // Strictly left: an edit right at the decimal symbol shifts.
            let left_of_decimal = mode == NumericMode::Decimal
                && decimal_position(prev, symbols).is_some_and(|position| index < position);
            if left_of_decimal {
                caret_before
            } else {
                shift_by_separators(prev, new, caret_before, symbols)
            }
        }
        CaretRule::Rejected { kind } => match kind {
            EditKind::Deletion => caret_before + 1,
            EditKind::Insertion | EditKind::NoOp => caret_before.saturating_sub(1),
        },
    };
    caret.min(char_len(new))
}

// A separator appearing or vanishing left of the caret moves the caret one
// position with it.
fn shift_by_separators(prev: &str, new: &str, caret: usize, symbols: Symbols) -> usize {
    match count_separators(new, symbols).cmp(&count_separators(prev, symbols)) {
        Ordering::Less => caret.saturating_sub(1),
        Ordering::Equal => caret,
        Ordering::Greater => caret + 1,
    }
}

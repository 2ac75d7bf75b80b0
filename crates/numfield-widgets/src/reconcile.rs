#![forbid(unsafe_code)]

//! Symbol hot-swap.
//!
//! When the configured symbols change while the field has content, both the
//! stored text and the incoming raw text still use the old ones. They are
//! rewritten before diffing so the classifier never compares stale symbols.

use std::borrow::Cow;

use numfield_core::{FieldError, Symbols, debug, warn};

use crate::state::FieldState;

/// Rewrite every `from` symbol in `text` to the matching `to` symbol.
///
/// Both symbols are mapped in one pass, so swapping `.` and `,` works.
#[must_use]
pub fn substitute_symbols(text: &str, from: Symbols, to: Symbols) -> String {
    text.chars()
        .map(|ch| {
            if ch == from.thousands {
                to.thousands
            } else if ch == from.decimal {
                to.decimal
            } else {
                ch
            }
        })
        .collect()
}

/// Bring `state` and `raw` in line with `symbols`.
///
/// No-op when the symbols are unchanged. Ambiguous new symbols leave `state`
/// untouched and return [`FieldError::AmbiguousSymbols`].
pub fn reconcile_symbols<'a>(
    state: &mut FieldState,
    symbols: Symbols,
    raw: &'a str,
) -> Result<Cow<'a, str>, FieldError> {
    let previous = state.last_symbols;
    if previous == symbols {
        return Ok(Cow::Borrowed(raw));
    }
    if symbols.is_ambiguous() {
        warn!(symbol = ?symbols.decimal, "refusing ambiguous symbol swap");
        return Err(FieldError::AmbiguousSymbols {
            symbol: symbols.decimal,
        });
    }

    debug!(
        from_decimal = ?previous.decimal,
        from_thousands = ?previous.thousands,
        to_decimal = ?symbols.decimal,
        to_thousands = ?symbols.thousands,
        "symbols swapped"
    );
    state.displayed = substitute_symbols(&state.displayed, previous, symbols);
    state.last_symbols = symbols;
    Ok(Cow::Owned(substitute_symbols(raw, previous, symbols)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EU: Symbols = Symbols::new(',', '.');

    #[test]
    fn unchanged_symbols_borrow() {
        let mut state = FieldState::with_displayed(EU, "1.234");
        let raw = reconcile_symbols(&mut state, EU, "1.2345").unwrap();
        assert!(matches!(raw, Cow::Borrowed("1.2345")));
        assert_eq!(state.displayed(), "1.234");
    }

    #[test]
    fn thousands_swap_rewrites_both() {
        let mut state = FieldState::with_displayed(EU, "1.234");
        let space = Symbols::new(',', ' ');
        let raw = reconcile_symbols(&mut state, space, "1.2345").unwrap();
        assert_eq!(raw, "1 2345");
        assert_eq!(state.displayed(), "1 234");
        assert_eq!(state.last_symbols(), space);
    }

    #[test]
    fn full_swap_is_single_pass() {
        let mut state = FieldState::with_displayed(EU, "1.234.567,89");
        let us = Symbols::new('.', ',');
        reconcile_symbols(&mut state, us, "").unwrap();
        assert_eq!(state.displayed(), "1,234,567.89");
    }

    #[test]
    fn ambiguous_swap_leaves_state() {
        let mut state = FieldState::with_displayed(EU, "1.234,5");
        let err = reconcile_symbols(&mut state, Symbols::new(',', ','), "1.234,56").unwrap_err();
        assert_eq!(err, FieldError::AmbiguousSymbols { symbol: ',' });
        assert_eq!(state.displayed(), "1.234,5");
        assert_eq!(state.last_symbols(), EU);
    }

    #[test]
    fn substitution_keeps_other_chars() {
        assert_eq!(
            substitute_symbols("1.2a3,4", EU, Symbols::new('.', '\'')),
            "1'2a3.4"
        );
    }
}

#![forbid(unsafe_code)]

//! Text primitives for numeric fields.
//!
//! Everything here is a pure function over strings and a [`Symbols`] pair:
//! - [`canonicalize`] - display string to canonical form (`.` point, no grouping)
//! - [`format`] - canonical form to grouped display string
//! - [`diff`] / [`classify`] - what the last keystroke did
//!
//! # Example
//! ```
//! use numfield_core::Symbols;
//! use numfield_text::{canonicalize, format};
//!
//! let symbols = Symbols::new(',', '.');
//! assert_eq!(format("1234567.25", symbols), "1.234.567,25");
//! assert_eq!(canonicalize("1.234.567,25", symbols), "1234567.25");
//! ```

pub mod canonical;
pub mod diff;
pub mod grouping;

pub use canonical::{canonicalize, find_disallowed, parse_canonical};
pub use diff::{Diff, EditClass, EditKind, classify, diff};
pub use grouping::{count_separators, decimal_position, format, format_number};
pub use numfield_core::Symbols;

/// Number of chars in `text`. Caret offsets and diff indices use this unit.
#[inline]
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#![forbid(unsafe_code)]

//! Edit inference: what did the last keystroke change?
//!
//! The widget only reports the text before and after a keystroke. [`diff`]
//! aligns the two from the left and reports the first char where they part.
//! [`classify`] maps that char onto the edit paths of the field controller.

use numfield_core::Symbols;

/// Direction of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// The new text is at least as long as the old one.
    Insertion,
    /// The new text is shorter.
    Deletion,
    /// Nothing changed.
    NoOp,
}

/// First divergence between two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diff {
    /// `ch` is the char at `index` in the new text.
    Insertion { ch: char, index: usize },
    /// `ch` is the char at `index` in the old text, i.e. the removed one.
    Deletion { ch: char, index: usize },
    /// Both strings are equal.
    NoOp,
}

impl Diff {
    /// Char index of the first divergence.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match *self {
            Self::Insertion { index, .. } | Self::Deletion { index, .. } => Some(index),
            Self::NoOp => None,
        }
    }

    /// The differing char, taken from the longer string.
    #[must_use]
    pub const fn ch(&self) -> Option<char> {
        match *self {
            Self::Insertion { ch, .. } | Self::Deletion { ch, .. } => Some(ch),
            Self::NoOp => None,
        }
    }

    /// Direction of the edit.
    #[must_use]
    pub const fn kind(&self) -> EditKind {
        match self {
            Self::Insertion { .. } => EditKind::Insertion,
            Self::Deletion { .. } => EditKind::Deletion,
            Self::NoOp => EditKind::NoOp,
        }
    }
}

/// Find the first char where `prev` and `next` differ.
///
/// The reported char comes from the longer string, or from `next` when both
/// have the same length (a replacement). If one string is a prefix of the
/// other, the index is the length of the shorter one.
#[must_use]
pub fn diff(prev: &str, next: &str) -> Diff {
    if prev == next {
        return Diff::NoOp;
    }
    let index = prev
        .chars()
        .zip(next.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let prev_len = prev.chars().count();
    let next_len = next.chars().count();

    let (longer, deletion) = if next_len >= prev_len {
        (next, false)
    } else {
        (prev, true)
    };
    match longer.chars().nth(index) {
        Some(ch) if deletion => Diff::Deletion { ch, index },
        Some(ch) => Diff::Insertion { ch, index },
        None => Diff::NoOp,
    }
}

/// The edit path a keystroke takes through the field controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditClass {
    /// A digit was typed or removed.
    Digit,
    /// A thousands symbol vanished; handled as a digit deletion.
    SeparatorDeletion,
    /// The decimal symbol was typed.
    DecimalInsertion,
    /// The decimal symbol was removed.
    DecimalDeletion,
    /// Anything else; the char is reported back to the user.
    Disallowed(char),
    /// Nothing changed.
    NoOp,
}

/// Map a diff onto an edit path.
///
/// Typing a thousands symbol is disallowed: separators only ever come from
/// the formatter.
#[must_use]
pub fn classify(diff: &Diff, symbols: Symbols) -> EditClass {
    match *diff {
        Diff::NoOp => EditClass::NoOp,
        Diff::Insertion { ch, .. } | Diff::Deletion { ch, .. } if ch.is_ascii_digit() => {
            EditClass::Digit
        }
        Diff::Insertion { ch, .. } if ch == symbols.decimal => EditClass::DecimalInsertion,
        Diff::Deletion { ch, .. } if ch == symbols.decimal => EditClass::DecimalDeletion,
        Diff::Deletion { ch, .. } if ch == symbols.thousands => EditClass::SeparatorDeletion,
        Diff::Insertion { ch, .. } | Diff::Deletion { ch, .. } => EditClass::Disallowed(ch),
    }
}

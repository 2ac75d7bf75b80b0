#![forbid(unsafe_code)]

//! Raw change events delivered by the text widget.

/// One keystroke as reported by the widget.
///
/// `text` is the widget's content after the keystroke and before any
/// reformatting. `caret` is the caret offset the widget reports with it, in
/// `char`s, so for an insertion it sits just after the typed character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawChange {
    /// Widget text including the provisional keystroke.
    pub text: String,
    /// Caret offset in `text`, in chars.
    pub caret: usize,
}

impl RawChange {
    /// Create a raw change event.
    #[must_use]
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        Self {
            text: text.into(),
            caret,
        }
    }

    /// Event for typing `ch` at char offset `at` of `displayed`.
    #[must_use]
    pub fn insert(displayed: &str, at: usize, ch: char) -> Self {
        let mut text = String::with_capacity(displayed.len() + ch.len_utf8());
        let mut inserted = false;
        for (i, existing) in displayed.chars().enumerate() {
            if i == at {
                text.push(ch);
                inserted = true;
            }
            text.push(existing);
        }
        if !inserted {
            text.push(ch);
        }
        let caret = at.min(displayed.chars().count()) + 1;
        Self { text, caret }
    }

    /// Event for a backspace with the caret at char offset `at` of `displayed`.
    ///
    /// A backspace at offset zero leaves the text untouched.
    #[must_use]
    pub fn backspace(displayed: &str, at: usize) -> Self {
        if at == 0 {
            return Self::new(displayed, 0);
        }
        let text = displayed
            .chars()
            .enumerate()
            .filter(|(i, _)| *i + 1 != at)
            .map(|(_, ch)| ch)
            .collect();
        Self {
            text,
            caret: at - 1,
        }
    }

    /// `true` when the widget was cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_end() {
        let event = RawChange::insert("123", 3, '4');
        assert_eq!(event.text, "1234");
        assert_eq!(event.caret, 4);
    }

    #[test]
    fn insert_mid() {
        let event = RawChange::insert("1.234", 1, '9');
        assert_eq!(event.text, "19.234");
        assert_eq!(event.caret, 2);
    }

    #[test]
    fn insert_clamps_offset() {
        let event = RawChange::insert("12", 10, '3');
        assert_eq!(event.text, "123");
        assert_eq!(event.caret, 3);
    }

    #[test]
    fn backspace_removes_char_before_caret() {
        let event = RawChange::backspace("1.234", 5);
        assert_eq!(event.text, "1.23");
        assert_eq!(event.caret, 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let event = RawChange::backspace("12", 0);
        assert_eq!(event.text, "12");
        assert_eq!(event.caret, 0);
    }

    #[test]
    fn multibyte_symbols_count_as_one() {
        let event = RawChange::insert("1\u{a0}234", 5, '5');
        assert_eq!(event.text, "1\u{a0}2345");
        assert_eq!(event.caret, 6);
    }
}

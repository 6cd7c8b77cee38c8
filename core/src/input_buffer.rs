//! Buffer for the word currently being typed.
//!
//! Input only ever grows or shrinks at the end, so the buffer keeps no
//! separate cursor. Completion replaces the whole word at once.

/// The in-progress word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Create a new empty input buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Get the raw input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes) in the buffer.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Delete the last character (backspace).
    /// Returns the removed character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the whole word, e.g. with a chosen completion.
    pub fn replace(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Take the text out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// The text as the index expects it: lowercase.
    pub fn query(&self) -> String {
        self.text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pop() {
        let mut buf = InputBuffer::new();
        buf.push('c');
        buf.push('a');
        assert_eq!(buf.text(), "ca");

        assert_eq!(buf.pop(), Some('a'));
        assert_eq!(buf.pop(), Some('c'));
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut buf = InputBuffer::new();
        buf.push('é');
        buf.push('t');
        assert_eq!(buf.char_count(), 2);
        assert_eq!(buf.pop(), Some('t'));
        assert_eq!(buf.pop(), Some('é'));
    }

    #[test]
    fn test_replace_take_and_query() {
        let mut buf = InputBuffer::new();
        buf.replace("CaR");
        assert_eq!(buf.query(), "car");
        assert_eq!(buf.text(), "CaR");

        assert_eq!(buf.take(), "CaR");
        assert!(buf.is_empty());
    }
}

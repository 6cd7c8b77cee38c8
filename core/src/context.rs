//! Display context for front-ends.
//!
//! The `EditorContext` struct is a plain data container. After calling
//! `process_key()` on an editor, a front-end reads these fields to redraw.

use std::time::Duration;

/// Everything a front-end needs to draw the editor state.
///
/// # Fields
///
/// - `line_text`: committed sentence plus the word being typed
/// - `word_len`: length of the word being typed, in characters
/// - `candidates`: suggestions on display (empty unless choosing)
/// - `more_candidates`: the index had matches beyond those shown
/// - `auxiliary_text`: status message for the last key (may be empty)
/// - `commit_text`: the final sentence, set once when input ends
/// - `lookup_time`: duration of the last suggestion lookup
#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    pub line_text: String,

    pub word_len: usize,

    pub candidates: Vec<String>,

    pub more_candidates: bool,

    pub auxiliary_text: String,

    pub commit_text: String,

    pub lookup_time: Option<Duration>,
}

impl EditorContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-key state (candidates, auxiliary text, timing).
    /// Does NOT clear commit_text (the front-end should consume it first).
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.more_candidates = false;
        self.auxiliary_text.clear();
        self.lookup_time = None;
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if a suggestion list is on display.
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_commit() {
        let mut context = EditorContext::new();
        context.candidates = vec!["a".to_string()];
        context.auxiliary_text = "x".to_string();
        context.commit_text = "done".to_string();
        context.lookup_time = Some(Duration::from_micros(3));

        context.clear();

        assert!(!context.has_candidates());
        assert!(context.auxiliary_text.is_empty());
        assert!(context.lookup_time.is_none());
        assert!(context.has_commit());
        assert_eq!(context.take_commit(), "done");
        assert!(!context.has_commit());
    }
}

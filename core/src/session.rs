//! Editor session state.
//!
//! The `EditorSession` struct combines the sentence typed so far, the word
//! being typed and the suggestions on display into one value that lives across
//! key events.

use crate::candidate::CandidateList;
use crate::context::EditorContext;
use crate::input_buffer::InputBuffer;

/// Current input mode of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys edit the current word
    #[default]
    Typing,
    /// A suggestion list is on display and the next key picks or cancels
    Choosing,
    /// The sentence was committed; no further input is accepted
    Finished,
}

/// Session state for one sentence.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Words committed with Space, each followed by a single space
    sentence: String,

    /// The word being typed
    word: InputBuffer,

    /// Suggestions on display (Choosing mode only)
    candidates: CandidateList,

    mode: InputMode,
}

impl EditorSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn word(&self) -> &InputBuffer {
        &self.word
    }

    pub fn word_mut(&mut self) -> &mut InputBuffer {
        &mut self.word
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Move the current word into the sentence followed by a space.
    pub fn commit_word(&mut self) {
        let word = self.word.take();
        self.sentence.push_str(&word);
        self.sentence.push(' ');
    }

    /// Show `candidates` and switch to Choosing.
    pub fn show_candidates(&mut self, candidates: CandidateList) {
        self.candidates = candidates;
        self.mode = InputMode::Choosing;
    }

    /// Hide the suggestion list and go back to Typing.
    pub fn dismiss_candidates(&mut self) {
        self.candidates.clear();
        self.mode = InputMode::Typing;
    }

    /// The full line as it should appear: sentence plus current word.
    pub fn line(&self) -> String {
        let mut line = String::with_capacity(self.sentence.len() + self.word.text().len());
        line.push_str(&self.sentence);
        line.push_str(self.word.text());
        line
    }

    /// Finish the sentence and return it.
    pub fn finish(&mut self) -> String {
        self.candidates.clear();
        self.mode = InputMode::Finished;
        self.line()
    }

    /// Clear all session state and return to Typing mode.
    pub fn clear(&mut self) {
        self.sentence.clear();
        self.word.clear();
        self.candidates.clear();
        self.mode = InputMode::Typing;
    }

    /// Sync session state to an EditorContext for display.
    pub fn sync_to_context(&self, context: &mut EditorContext) {
        context.line_text = self.line();
        context.word_len = self.word.char_count();
        context.candidates = self.candidates.candidates().to_vec();
        context.more_candidates = self.candidates.is_truncated();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = EditorSession::new();
        assert_eq!(session.mode(), InputMode::Typing);
        assert_eq!(session.sentence(), "");
        assert!(session.word().is_empty());
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn test_commit_word_builds_sentence() {
        let mut session = EditorSession::new();
        session.word_mut().replace("hello");
        session.commit_word();
        session.word_mut().replace("world");

        assert_eq!(session.sentence(), "hello ");
        assert_eq!(session.line(), "hello world");
    }

    #[test]
    fn test_commit_empty_word_keeps_spaces() {
        let mut session = EditorSession::new();
        session.commit_word();
        session.commit_word();
        assert_eq!(session.sentence(), "  ");
    }

    #[test]
    fn test_candidates_mode_transitions() {
        let mut session = EditorSession::new();
        session.show_candidates(CandidateList::from_matches(vec!["car".to_string()], 5));
        assert_eq!(session.mode(), InputMode::Choosing);

        session.dismiss_candidates();
        assert_eq!(session.mode(), InputMode::Typing);
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn test_finish_and_clear() {
        let mut session = EditorSession::new();
        session.word_mut().replace("the");
        session.commit_word();
        session.word_mut().replace("end");

        assert_eq!(session.finish(), "the end");
        assert_eq!(session.mode(), InputMode::Finished);

        session.clear();
        assert_eq!(session.mode(), InputMode::Typing);
        assert_eq!(session.line(), "");
    }

    #[test]
    fn test_sync_to_context() {
        let mut session = EditorSession::new();
        let mut context = EditorContext::new();
        session.word_mut().replace("ca");
        session.show_candidates(CandidateList::from_matches(
            vec!["car".to_string(), "cat".to_string()],
            1,
        ));

        session.sync_to_context(&mut context);

        assert_eq!(context.line_text, "ca");
        assert_eq!(context.word_len, 2);
        assert_eq!(context.candidates, vec!["car"]);
        assert!(context.more_candidates);
    }
}

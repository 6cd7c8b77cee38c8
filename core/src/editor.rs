//! Sentence editor with key event processing.
//!
//! The `Editor` wraps a shared [`PrefixIndex`] with session state, providing a
//! `process_key()` method that handles key events one at a time. The index is
//! only queried when the user presses one of the two trigger keys.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::candidate::CandidateList;
use crate::context::EditorContext;
use crate::session::{EditorSession, InputMode};
use crate::trie::PrefixIndex;
use crate::Config;

/// Key event types that the editor can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character input, including the trigger and selection keys
    Char(char),
    /// Space key (ends the current word)
    Space,
    /// Backspace key
    Backspace,
    /// Enter/Return key (ends the sentence)
    Enter,
    /// Escape key (cancels a suggestion list)
    Escape,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key changed the editor state
    Handled,
    /// Key had no effect
    Ignored,
    /// The sentence is complete; read it from `context().commit_text`
    Finished,
}

/// Interactive sentence editor.
pub struct Editor {
    index: Arc<PrefixIndex>,

    config: Config,

    session: EditorSession,

    context: EditorContext,
}

impl Editor {
    /// Create a new editor over the given index.
    pub fn new(index: Arc<PrefixIndex>, config: Config) -> Self {
        Self {
            index,
            config,
            session: EditorSession::new(),
            context: EditorContext::new(),
        }
    }

    /// Get a reference to the context for reading editor state.
    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut EditorContext {
        &mut self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Reset the editor to start a new sentence.
    pub fn reset(&mut self) {
        self.session.clear();
        self.context = EditorContext::new();
    }

    /// Process a key event and update editor state.
    ///
    /// After calling this, a front-end should read `context()` to redraw.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        self.context.clear();

        let result = match self.session.mode() {
            InputMode::Typing => self.process_typing(key),
            InputMode::Choosing => self.process_choice(key),
            InputMode::Finished => KeyResult::Ignored,
        };

        self.session.sync_to_context(&mut self.context);
        result
    }

    fn process_typing(&mut self, key: KeyEvent) -> KeyResult {
        match key {
            KeyEvent::Char(ch) if ch == self.config.complete_key => {
                self.complete_word();
                KeyResult::Handled
            }
            KeyEvent::Char(ch) if ch == self.config.suggest_key => {
                self.suggest_words();
                KeyResult::Handled
            }
            KeyEvent::Char(ch) => {
                self.session.word_mut().push(ch);
                KeyResult::Handled
            }
            KeyEvent::Space => {
                self.session.commit_word();
                KeyResult::Handled
            }
            KeyEvent::Backspace => match self.session.word_mut().pop() {
                Some(_) => KeyResult::Handled,
                None => KeyResult::Ignored,
            },
            KeyEvent::Enter => {
                let sentence = self.session.finish();
                debug!(sentence = %sentence, "sentence finished");
                self.context.commit_text = sentence;
                KeyResult::Finished
            }
            KeyEvent::Escape => KeyResult::Ignored,
        }
    }

    fn process_choice(&mut self, key: KeyEvent) -> KeyResult {
        let chosen = match key {
            KeyEvent::Char(ch) => self
                .config
                .selection_key_index(ch)
                .and_then(|index| self.session.candidates().select_by_index(index))
                .map(str::to_string),
            _ => None,
        };

        match chosen {
            Some(word) => {
                debug!(word = %word, "suggestion chosen");
                self.session.word_mut().replace(&word);
            }
            None => {
                debug!(?key, "suggestion list cancelled");
            }
        }
        self.session.dismiss_candidates();
        KeyResult::Handled
    }

    /// Replace the current word with its first completion, if there is one.
    fn complete_word(&mut self) {
        let query = self.session.word().query();
        match self.index.complete(&query) {
            Some(word) => {
                debug!(prefix = %query, completion = %word, "completed word");
                self.session.word_mut().replace(&word);
            }
            None => {
                debug!(prefix = %query, "no completion");
                self.context.auxiliary_text = "No completion found.".to_string();
            }
        }
    }

    /// Look up suggestions for the current word and show them for selection.
    fn suggest_words(&mut self) {
        let query = self.session.word().query();

        let start = Instant::now();
        let matches = self.index.completions(&query);
        let candidates = CandidateList::from_matches(matches, self.config.suggestion_limit());
        let elapsed = start.elapsed();

        debug!(
            prefix = %query,
            shown = candidates.len(),
            micros = elapsed.as_micros() as u64,
            "suggestion lookup"
        );
        if self.config.show_timing {
            self.context.lookup_time = Some(elapsed);
        }

        if candidates.is_empty() {
            self.context.auxiliary_text = "No suggestions found.".to_string();
        } else {
            self.session.show_candidates(candidates);
        }
    }
}

//! Console front-end for the sentence editor.
//!
//! The console stays in its normal line-buffered mode. Keys arrive one line at
//! a time: a newline that ends a non-empty line only hands that line's keys to
//! the editor, while an empty line is the Enter that finishes the sentence.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::debug;
use wordcomplete_core::{Config, Editor, EditorContext, KeyEvent, KeyResult};

/// Decodes console input into editor key events.
pub struct KeyReader<R> {
    reader: R,
    pending: VecDeque<char>,
    eof: bool,
}

impl<R: BufRead> KeyReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            eof: false,
        }
    }

    /// True while keys from the last line are still queued.
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|&ch| map_char(ch).is_some())
    }

    /// Next key, or `None` once input is exhausted.
    ///
    /// End of input is reported once as `Enter` so an unfinished sentence is
    /// still committed.
    pub fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Some(ch) = self.pending.pop_front() {
                match map_char(ch) {
                    Some(key) => return Ok(Some(key)),
                    None => continue,
                }
            }
            if self.eof {
                return Ok(None);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                self.eof = true;
                return Ok(Some(KeyEvent::Enter));
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                return Ok(Some(KeyEvent::Enter));
            }
            self.pending.extend(line.chars());
        }
    }
}

fn map_char(ch: char) -> Option<KeyEvent> {
    match ch {
        '\x7f' | '\x08' => Some(KeyEvent::Backspace),
        '\x1b' => Some(KeyEvent::Escape),
        ' ' | '\t' => Some(KeyEvent::Space),
        c if c.is_control() => None,
        c => Some(KeyEvent::Char(c)),
    }
}

/// Writes editor state to the console.
pub struct Renderer<W> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, config: &Config) -> io::Result<()> {
        writeln!(
            self.out,
            "Start typing your sentence (press '{}' to auto-complete the current word, '{}' for suggestions, and Enter on an empty line to finish):",
            config.complete_key, config.suggest_key
        )
    }

    /// Prompt followed by the line so far; the cursor stays at its end.
    pub fn line(&mut self, prompt: &str, context: &EditorContext) -> io::Result<()> {
        write!(self.out, "{}{}", prompt, context.line_text)?;
        self.out.flush()
    }

    pub fn status(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    pub fn timing(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "Time taken to find suggestions: {} microseconds.",
            elapsed.as_micros()
        )
    }

    pub fn candidates(&mut self, context: &EditorContext, config: &Config) -> io::Result<()> {
        writeln!(self.out, "Suggestions:")?;
        let keys: Vec<char> = config.get_select_keys().chars().collect();
        for (key, word) in keys.iter().zip(&context.candidates) {
            writeln!(self.out, "{}. {}", key, word)?;
        }
        if context.more_candidates {
            writeln!(self.out, "...")?;
        }

        let shown = context.candidates.len().min(keys.len());
        match (keys.first(), shown.checked_sub(1).and_then(|last| keys.get(last))) {
            (Some(first), Some(last)) if shown > 1 => write!(
                self.out,
                "Choose a suggestion ({}-{}) or press any other key to cancel: ",
                first, last
            )?,
            _ => write!(
                self.out,
                "Choose a suggestion ({}) or press any other key to cancel: ",
                keys.first().copied().unwrap_or('1')
            )?,
        }
        self.out.flush()
    }

    pub fn finished(&mut self, sentence: &str) -> io::Result<()> {
        writeln!(self.out, "Final sentence: {}", sentence)?;
        self.out.flush()
    }
}

/// Drive `editor` with keys from `keys` until the sentence is finished.
///
/// Returns the final sentence.
pub fn run_session<R: BufRead, W: Write>(
    editor: &mut Editor,
    keys: &mut KeyReader<R>,
    renderer: &mut Renderer<W>,
    prompt: &str,
) -> io::Result<String> {
    renderer.banner(editor.config())?;
    renderer.line(prompt, editor.context())?;

    while let Some(key) = keys.next_key()? {
        if editor.process_key(key) == KeyResult::Finished {
            let sentence = editor.context_mut().take_commit();
            renderer.finished(&sentence)?;
            return Ok(sentence);
        }

        let context = editor.context();
        if let Some(elapsed) = context.lookup_time {
            renderer.timing(elapsed)?;
        }
        if !context.auxiliary_text.is_empty() {
            renderer.status(&context.auxiliary_text)?;
        }
        if context.has_candidates() {
            renderer.candidates(context, editor.config())?;
        } else if !keys.has_pending() {
            renderer.line(prompt, context)?;
        }
    }

    debug!("input ended without a finishing key");
    Ok(editor.session().line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect_keys(input: &str) -> Vec<KeyEvent> {
        let mut reader = KeyReader::new(Cursor::new(input.to_string()));
        let mut keys = Vec::new();
        while let Some(key) = reader.next_key().unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_line_keys_and_empty_line_enter() {
        let keys = collect_keys("a b\n\n");
        assert_eq!(
            keys,
            vec![
                KeyEvent::Char('a'),
                KeyEvent::Space,
                KeyEvent::Char('b'),
                KeyEvent::Enter,
                KeyEvent::Enter,
            ]
        );
    }

    #[test]
    fn test_control_characters() {
        let keys = collect_keys("x\x7f\x1b\r\n");
        assert_eq!(
            keys,
            vec![
                KeyEvent::Char('x'),
                KeyEvent::Backspace,
                KeyEvent::Escape,
                KeyEvent::Enter,
            ]
        );
    }

    #[test]
    fn test_eof_is_single_enter() {
        assert_eq!(collect_keys(""), vec![KeyEvent::Enter]);
        assert_eq!(collect_keys("é"), vec![KeyEvent::Char('é'), KeyEvent::Enter]);
    }

    #[test]
    fn test_has_pending() {
        let mut reader = KeyReader::new(Cursor::new("ab\n"));
        assert!(!reader.has_pending());
        reader.next_key().unwrap();
        assert!(reader.has_pending());
        reader.next_key().unwrap();
        assert!(!reader.has_pending());
    }

    #[test]
    fn test_candidate_prompt_uses_select_keys() {
        let mut renderer = Renderer::new(Vec::new());
        let mut context = EditorContext::new();
        context.candidates = vec!["car".to_string(), "cart".to_string()];

        renderer.candidates(&context, &Config::default()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(out.contains("1. car\n2. cart\n"));
        assert!(out.ends_with("Choose a suggestion (1-2) or press any other key to cancel: "));
    }

    #[test]
    fn test_single_candidate_prompt() {
        let mut renderer = Renderer::new(Vec::new());
        let mut context = EditorContext::new();
        context.candidates = vec!["dog".to_string()];

        renderer.candidates(&context, &Config::default()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(out.ends_with("Choose a suggestion (1) or press any other key to cancel: "));
    }
}

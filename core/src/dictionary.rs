//! Dictionary loading.
//!
//! Word lists are plain text: any run of whitespace separates tokens, and
//! line breaks carry no meaning beyond that. Every token is normalized with
//! [`normalize_token`] before it reaches the [`PrefixIndex`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

use crate::trie::{InsertError, PrefixIndex};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("rejected word on line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: InsertError,
    },
}

/// What to do with a token the index refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the token, count it, keep going.
    #[default]
    SkipInvalid,
    /// Stop loading and return the error.
    Abort,
}

/// Counters reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Words that were new to the index
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Tokens rejected and skipped
    pub skipped: usize,
}

impl LoadStats {
    /// Total number of tokens seen.
    pub fn tokens(&self) -> usize {
        self.inserted + self.duplicates + self.skipped
    }

    fn merge(&mut self, other: LoadStats) {
        self.inserted += other.inserted;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
    }
}

/// Normalize a raw dictionary token: NFKC, then lowercase.
///
/// # Example
/// ```
/// use wordcomplete_core::dictionary::normalize_token;
///
/// assert_eq!(normalize_token("Hello"), "hello");
/// assert_eq!(normalize_token("ＣＡＴ"), "cat"); // full-width letters
/// ```
pub fn normalize_token(token: &str) -> String {
    token.nfkc().collect::<String>().to_lowercase()
}

/// Feeds whitespace-separated tokens into a [`PrefixIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryLoader {
    policy: LoadPolicy,
}

impl DictionaryLoader {
    pub fn new(policy: LoadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Load every token of `text`.
    pub fn load_str(&self, index: &mut PrefixIndex, text: &str) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        for (line_idx, line) in text.lines().enumerate() {
            stats.merge(self.load_line(index, line, line_idx + 1)?);
        }
        info!(
            inserted = stats.inserted,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "loaded dictionary text"
        );
        Ok(stats)
    }

    /// Load every token read from `reader`, line by line.
    pub fn load_reader<R: BufRead>(
        &self,
        index: &mut PrefixIndex,
        reader: R,
    ) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            stats.merge(self.load_line(index, &line, line_idx + 1)?);
        }
        info!(
            inserted = stats.inserted,
            duplicates = stats.duplicates,
            skipped = stats.skipped,
            "loaded dictionary stream"
        );
        Ok(stats)
    }

    /// Open `path` and load it.
    pub fn load_path<P: AsRef<Path>>(
        &self,
        index: &mut PrefixIndex,
        path: P,
    ) -> Result<LoadStats, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dictionary");
        let file = File::open(path)?;
        self.load_reader(index, BufReader::new(file))
    }

    fn load_line(
        &self,
        index: &mut PrefixIndex,
        line: &str,
        line_no: usize,
    ) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        for token in line.split_whitespace() {
            let word = normalize_token(token);
            match index.insert(&word) {
                Ok(true) => stats.inserted += 1,
                Ok(false) => stats.duplicates += 1,
                Err(source) => match self.policy {
                    LoadPolicy::SkipInvalid => {
                        warn!(line = line_no, token, error = %source, "skipping dictionary token");
                        stats.skipped += 1;
                    }
                    LoadPolicy::Abort => {
                        return Err(LoadError::Rejected {
                            line: line_no,
                            source,
                        })
                    }
                },
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Apple"), "apple");
        assert_eq!(normalize_token("ＡＢＣ"), "abc");
        assert_eq!(normalize_token("zebra"), "zebra");
    }

    #[test]
    fn test_load_str_counts() {
        let mut index = PrefixIndex::new();
        let loader = DictionaryLoader::default();

        let stats = loader
            .load_str(&mut index, "Cat car\n  CART dog\tcat\n\n")
            .unwrap();

        assert_eq!(
            stats,
            LoadStats {
                inserted: 4,
                duplicates: 1,
                skipped: 0,
            }
        );
        assert_eq!(index.all_with_prefix(""), vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn test_skip_invalid_continues() {
        let mut index = PrefixIndex::new();
        let loader = DictionaryLoader::new(LoadPolicy::SkipInvalid);

        let stats = loader
            .load_str(&mut index, "hello don't world\nx-ray 42 yes")
            .unwrap();

        assert_eq!(stats.inserted, 3);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.tokens(), 6);
        assert_eq!(index.all_with_prefix(""), vec!["hello", "world", "yes"]);
    }

    #[test]
    fn test_abort_reports_line() {
        let mut index = PrefixIndex::new();
        let loader = DictionaryLoader::new(LoadPolicy::Abort);

        let err = loader
            .load_str(&mut index, "alpha\nbeta\ngam.ma delta")
            .unwrap_err();

        match err {
            LoadError::Rejected { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, InsertError::InvalidSymbol { symbol: '.', .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(index.all_with_prefix(""), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_load_reader() {
        let mut index = PrefixIndex::new();
        let reader = Cursor::new("one two\nthree\n");

        let stats = DictionaryLoader::default()
            .load_reader(&mut index, reader)
            .unwrap();

        assert_eq!(stats.inserted, 3);
        assert!(index.contains("three"));
    }

    #[test]
    fn test_load_path_missing_file() {
        let mut index = PrefixIndex::new();
        let err = DictionaryLoader::default()
            .load_path(&mut index, "/nonexistent/words.txt")
            .unwrap_err();

        assert!(matches!(err, LoadError::Io(_)));
    }
}

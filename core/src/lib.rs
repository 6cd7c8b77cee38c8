//! wordcomplete-core
//!
//! Prefix index, dictionary loading and the interactive sentence editor used
//! by the `wordcomplete` front-end.
//!
//! Public API:
//! - `PrefixIndex` - Word set with sorted prefix enumeration and completion
//! - `DictionaryLoader` - Whitespace-separated word list loading
//! - `Editor` - Key-driven sentence editor with completion and suggestion keys
//! - `Config` - Configuration and key bindings
use serde::{Deserialize, Serialize};

pub mod trie;
pub use trie::{Completions, InsertError, PrefixIndex, TrieNode};

pub mod dictionary;
pub use dictionary::{normalize_token, DictionaryLoader, LoadError, LoadPolicy, LoadStats};

pub mod candidate;
pub use candidate::CandidateList;

pub mod context;
pub use context::EditorContext;

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod session;
pub use session::{EditorSession, InputMode};

pub mod editor;
pub use editor::{Editor, KeyEvent, KeyResult};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Editor and loader configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of suggestions shown for selection
    pub max_suggestions: usize,

    /// Key that replaces the current word with its first completion
    pub complete_key: char,

    /// Key that shows the suggestion list for the current word
    pub suggest_key: char,

    /// Keys for selecting suggestions (default: "12345")
    /// First char selects the 1st suggestion, etc.
    pub select_keys: String,

    /// Skip dictionary tokens the index rejects instead of aborting the load
    pub skip_invalid_words: bool,

    /// Report how long each suggestion lookup took
    pub show_timing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            complete_key: '/',
            suggest_key: '\\',
            select_keys: "12345".to_string(),
            skip_invalid_words: true,
            show_timing: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that key bindings do not collide and every suggestion can be chosen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.select_keys.is_empty() {
            return Err(ConfigError::Invalid("select_keys must not be empty".into()));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::Invalid("max_suggestions must be at least 1".into()));
        }
        let key_count = self.select_keys.chars().count();
        if self.max_suggestions > key_count {
            return Err(ConfigError::Invalid(format!(
                "max_suggestions is {} but select_keys has only {} keys",
                self.max_suggestions, key_count
            )));
        }
        if self.complete_key == self.suggest_key {
            return Err(ConfigError::Invalid(format!(
                "complete_key and suggest_key are both {:?}",
                self.complete_key
            )));
        }
        for key in [self.complete_key, self.suggest_key] {
            if key.is_whitespace() || key.is_ascii_lowercase() {
                return Err(ConfigError::Invalid(format!(
                    "trigger key {:?} would shadow word input",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Number of suggestions the editor shows.
    ///
    /// Never more than there are selection keys, and at least one.
    pub fn suggestion_limit(&self) -> usize {
        self.max_suggestions
            .min(self.select_keys.chars().count())
            .max(1)
    }

    /// The loader policy implied by `skip_invalid_words`.
    pub fn load_policy(&self) -> LoadPolicy {
        if self.skip_invalid_words {
            LoadPolicy::SkipInvalid
        } else {
            LoadPolicy::Abort
        }
    }

    // ========== Selection Keys Management ==========

    /// Set the selection keys string. An empty string is ignored.
    ///
    /// # Example
    /// ```
    /// # use wordcomplete_core::Config;
    /// let mut config = Config::default();
    /// config.set_select_keys("asdfg"); // Use home row keys
    /// assert_eq!(config.selection_key_index('d'), Some(2));
    /// ```
    pub fn set_select_keys(&mut self, keys: &str) {
        if !keys.is_empty() {
            self.select_keys = keys.to_string();
        }
    }

    /// Get the current selection keys.
    pub fn get_select_keys(&self) -> &str {
        &self.select_keys
    }

    /// Check if a character is a selection key and return its index (0-based).
    /// Returns None if the character is not a selection key.
    pub fn selection_key_index(&self, ch: char) -> Option<usize> {
        self.select_keys.chars().position(|c| c == ch)
    }
}

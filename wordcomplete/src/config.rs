//! Front-end configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All editor and loader options from `wordcomplete_core::Config` (flattened via serde)
//! - The dictionary file to load
//! - The prompt shown in front of the sentence
//!
//! # Example
//!
//! ```rust
//! use wordcomplete::AppConfig;
//!
//! let config = AppConfig::from_toml_str("dictionary = \"words.txt\"\nmax_suggestions = 3").unwrap();
//! assert_eq!(config.base().max_suggestions, 3);
//! ```
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordcomplete_core::{Config, ConfigError};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base configuration fields (keys, limits, loader policy)
    #[serde(flatten)]
    pub base: Config,

    /// Word list to load; the built-in demo list is used when unset
    pub dictionary: Option<PathBuf>,

    /// Text printed before the sentence being edited
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base: Config::default(),
            dictionary: None,
            prompt: "> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.base.validate()?;
        Ok(config)
    }

    /// Convert this config into the base config for use with `Editor::new()`
    pub fn into_base(self) -> Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut Config {
        &mut self.base
    }
}

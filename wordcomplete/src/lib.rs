//! wordcomplete
//!
//! Front-end for `wordcomplete-core`: builds the prefix index from a word list
//! (or a small built-in one) and runs the sentence editor on a console.

use std::sync::Arc;

use tracing::info;
use wordcomplete_core::{DictionaryLoader, Editor, LoadError, LoadStats, PrefixIndex};

pub mod commands;

pub mod config;
pub use config::AppConfig;

pub mod terminal;
pub use terminal::{run_session, KeyReader, Renderer};

pub use wordcomplete_core;

/// Word list used when no dictionary file is configured.
pub const DEMO_WORDS: &str = "\
a about after again all also an and any are as at back be because been before
but by call came can car card care cart case cat catch come could day did do
does dog done down each even first for from get give go good had has have he
help her here him his how i if in into is it its just know last like little
long look made make man many may me more most much must my new no not now of
off old on one only or other our out over people place put said same say see
she should so some still such take than that the their them then there these
they thing think this those time to two up us use very was way we well went
were what when where which while who will with word work would year you your";

/// An index together with where it came from and how loading went.
#[derive(Debug)]
pub struct LoadedIndex {
    pub index: PrefixIndex,
    pub stats: LoadStats,
    /// Dictionary path, or `"built-in"` for the demo list
    pub source: String,
}

/// Build the prefix index described by `config`.
///
/// Loads `config.dictionary` when set, otherwise the built-in demo list.
pub fn build_index(config: &AppConfig) -> Result<LoadedIndex, LoadError> {
    let loader = DictionaryLoader::new(config.base().load_policy());
    let mut index = PrefixIndex::new();

    let (stats, source) = match &config.dictionary {
        Some(path) => {
            let stats = loader.load_path(&mut index, path)?;
            (stats, path.display().to_string())
        }
        None => {
            let stats = loader.load_str(&mut index, DEMO_WORDS)?;
            (stats, "built-in".to_string())
        }
    };

    info!(
        source = %source,
        words = index.len(),
        nodes = index.node_count(),
        "prefix index ready"
    );
    Ok(LoadedIndex {
        index,
        stats,
        source,
    })
}

/// Create an editor over a freshly built index.
pub fn create_editor(config: &AppConfig) -> Result<Editor, LoadError> {
    let loaded = build_index(config)?;
    Ok(Editor::new(Arc::new(loaded.index), config.base().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_words_load_cleanly() {
        let loaded = build_index(&AppConfig::default()).unwrap();

        assert_eq!(loaded.source, "built-in");
        assert_eq!(loaded.stats.skipped, 0);
        assert!(loaded.index.contains("the"));
        assert_eq!(
            loaded.index.all_with_prefix("car"),
            vec!["car", "card", "care", "cart"]
        );
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let config = AppConfig {
            dictionary: Some("/nonexistent/words.txt".into()),
            ..AppConfig::default()
        };
        assert!(matches!(build_index(&config), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_create_editor_uses_config() {
        let mut config = AppConfig::default();
        config.base_mut().max_suggestions = 2;

        let editor = create_editor(&config).unwrap();
        assert_eq!(editor.config().max_suggestions, 2);
        assert!(editor.index().contains("word"));
    }
}

//! Configuration options carried by a trie.
//!
//! The options drive the analyzer used by
//! [`Trie::add_object`](crate::trie::Trie::add_object) and are serialized
//! together with the node graph.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Word restrictions and normalization flags for indexed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieOptions {
    /// Tokens dropped after normalization.
    pub forbidden_words: Vec<String>,

    /// Tokens with fewer characters than this are dropped.
    pub min_size: usize,

    /// Lowercase tokens before indexing.
    pub case_insensitive: bool,

    /// Strip accents and keep only `[0-9A-Za-z]`.
    pub only_alphanumerics: bool,
}

impl Default for TrieOptions {
    fn default() -> Self {
        TrieOptions {
            forbidden_words: Vec::new(),
            min_size: 0,
            case_insensitive: true,
            only_alphanumerics: true,
        }
    }
}

impl TrieOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let options: TrieOptions = serde_json::from_str(&content)?;
        log::debug!("loaded trie options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    /// Set the forbidden words.
    pub fn with_forbidden_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum token length, in characters.
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Enable or disable case folding.
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Enable or disable alphanumeric folding.
    pub fn only_alphanumerics(mut self, enabled: bool) -> Self {
        self.only_alphanumerics = enabled;
        self
    }
}

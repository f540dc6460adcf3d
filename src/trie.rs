//! The synonym-aware trie and its building blocks.
//!
//! - [`Trie`]: arena of nodes with insertion, lookup and sub-tree resolution
//! - [`SynonymTable`]: groups of interchangeable spellings
//! - [`ValueSet`]: values attached to terminal nodes
//! - [`TrieOptions`]: normalization settings carried by the trie

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod config;
pub mod engine;
pub mod node;
pub mod persist;
pub mod synonym;
pub mod values;

pub use config::TrieOptions;
pub use engine::Trie;
pub use node::{Edge, NodeId, TrieNode};
pub use synonym::SynonymTable;
pub use values::ValueSet;

/// How far a string matches the words of a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The string leaves the trie.
    None,
    /// The string is a prefix of at least one word.
    Partial,
    /// The string is a word.
    Perfect,
}

impl MatchType {
    /// Check whether the string matched at least partially.
    pub fn is_match(self) -> bool {
        self != MatchType::None
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchType::None => "NONE",
            MatchType::Partial => "PARTIAL",
            MatchType::Perfect => "PERFECT",
        };
        f.write_str(name)
    }
}

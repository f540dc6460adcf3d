//! # synotrie
//!
//! A synonym-aware prefix tree for indexing JSON documents by the words they
//! contain.
//!
//! ## Features
//!
//! - Synonym groups folded into the trie structure, so every spelling of a
//!   group reaches the same node
//! - Word classification as no match, prefix or whole word
//! - Breadth-first iteration of values ranked by proximity to one or more
//!   prefixes
//! - Compilation of a trie into an equivalent regular expression
//! - Document walking, text normalization and background stream ingestion
//! - JSON persistence and a command line interface
//!
//! ## Example
//!
//! ```
//! use synotrie::prelude::*;
//!
//! let mut trie = Trie::with_synonyms(vec![vec!["th", "t"]]).unwrap();
//! trie.insert_with_value("taste", 1);
//! trie.insert_with_value("testing", 2);
//!
//! assert_eq!(trie.lookup("thasthe"), MatchType::Perfect);
//! assert_eq!(trie.lookup("thes"), MatchType::Partial);
//!
//! let found: Vec<_> = trie
//!     .iter_values(IterateOptions::new().prefix("te"))
//!     .unwrap()
//!     .map(|m| *m.value)
//!     .collect();
//! assert_eq!(found, vec![2]);
//! ```

pub mod analysis;
pub mod ascii;
pub mod cli;
pub mod document;
pub mod error;
pub mod iterate;
pub mod pattern;
pub mod stream;
pub mod trie;

pub mod prelude {
    pub use crate::document::object_list_to_trie;
    pub use crate::document::object_ref::ObjectRef;
    pub use crate::error::{Result, SynotrieError};
    pub use crate::iterate::{IterateOptions, ProximityMatch};
    pub use crate::pattern::{MatchMode, TriePattern};
    pub use crate::stream::stream_to_trie;
    pub use crate::trie::{MatchType, SynonymTable, Trie, TrieOptions};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

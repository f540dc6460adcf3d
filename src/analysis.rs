//! Text analysis for synotrie.
//!
//! Strings are turned into indexable words by a tokenizer followed by a chain
//! of token filters. The chain used when indexing objects is derived from
//! [`TrieOptions`](crate::trie::config::TrieOptions):
//!
//! ```text
//! Text → SeparatorTokenizer → Lowercase → AsciiFolding → RemoveEmpty
//!      → Stop (forbidden words) → Unique → MinLength → Trie
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

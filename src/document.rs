//! Indexing of nested documents.
//!
//! A document is walked for its string leaves ([`walker::StringLeaves`]),
//! every leaf is analyzed in one pass with the trie's analyzer, and every
//! surviving token is inserted with the document as its value.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use synotrie::document::object_list_to_trie;
//! use synotrie::document::object_ref::ObjectRef;
//! use synotrie::iterate::IterateOptions;
//! use synotrie::trie::TrieOptions;
//!
//! let objects = vec![
//!     ObjectRef::new(json!({"field1": 1})),
//!     ObjectRef::new(json!({"field1": "some"})),
//!     ObjectRef::new(json!({"field1": "Thing"})),
//! ];
//!
//! let trie = object_list_to_trie(objects.clone(), Vec::<Vec<String>>::new(), TrieOptions::default())
//!     .unwrap();
//!
//! let found: Vec<_> = trie
//!     .iter_values(IterateOptions::new().prefix("thing"))
//!     .unwrap()
//!     .collect();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].value, &objects[2]);
//! ```

use std::hash::Hash;

use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::trie::{Trie, TrieOptions};

pub mod loader;
pub mod object_ref;
pub mod walker;

use walker::StringLeaves;

/// Analyze the string leaves of `object` as one text collection.
pub fn object_tokens<T>(object: &T, analyzer: &dyn Analyzer) -> Result<Vec<String>>
where
    T: StringLeaves + ?Sized,
{
    let leaves = object.string_leaves();
    if leaves.is_empty() {
        return Ok(Vec::new());
    }
    Ok(analyzer.analyze_all(&leaves)?.map(|token| token.text).collect())
}

/// Analyze several objects in parallel.
pub fn par_object_tokens<T>(objects: &[T], analyzer: &dyn Analyzer) -> Result<Vec<Vec<String>>>
where
    T: StringLeaves + Sync,
{
    objects
        .par_iter()
        .map(|object| object_tokens(object, analyzer))
        .collect()
}

impl<V: Clone + Eq + Hash> Trie<V> {
    /// Index `object` under every token of its string leaves.
    ///
    /// Returns the number of tokens inserted.
    pub fn add_object(&mut self, object: V) -> Result<usize>
    where
        V: StringLeaves,
    {
        let tokens = object_tokens(&object, self.analyzer())?;
        Ok(self.insert_tokens(&tokens, object))
    }

    /// Index the tokens of `object`, attaching `value` instead of the object.
    pub fn add_object_as<T>(&mut self, object: &T, value: V) -> Result<usize>
    where
        T: StringLeaves + ?Sized,
    {
        let tokens = object_tokens(object, self.analyzer())?;
        Ok(self.insert_tokens(&tokens, value))
    }

    /// Insert already analyzed tokens with one value.
    pub fn insert_tokens<S: AsRef<str>>(&mut self, tokens: &[S], value: V) -> usize {
        for token in tokens {
            self.insert_with_value(token.as_ref(), value.clone());
        }
        tokens.len()
    }
}

/// Build a trie indexing every object of `objects`.
pub fn object_list_to_trie<V, O, G, I, S>(
    objects: O,
    synonyms: G,
    options: TrieOptions,
) -> Result<Trie<V>>
where
    V: StringLeaves + Clone + Eq + Hash,
    O: IntoIterator<Item = V>,
    G: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut trie = Trie::with_config(synonyms, options)?;
    let mut tokens = 0;
    let mut count = 0;
    for object in objects {
        tokens += trie.add_object(object)?;
        count += 1;
    }
    log::debug!("indexed {} tokens from {} objects", tokens, count);
    Ok(trie)
}

/// Build a trie from `objects`, analyzing them in parallel.
///
/// Insertion stays sequential, in input order, so the result equals
/// [`object_list_to_trie`].
pub fn par_object_list_to_trie<V, G, I, S>(
    objects: &[V],
    synonyms: G,
    options: TrieOptions,
) -> Result<Trie<V>>
where
    V: StringLeaves + Clone + Eq + Hash + Sync,
    G: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut trie = Trie::with_config(synonyms, options)?;
    let analyzed = par_object_tokens(objects, trie.analyzer())?;

    let mut tokens = 0;
    for (object, object_tokens) in objects.iter().zip(&analyzed) {
        tokens += trie.insert_tokens(object_tokens, object.clone());
    }
    log::debug!(
        "indexed {} tokens from {} objects in parallel",
        tokens,
        objects.len()
    );
    Ok(trie)
}

//! Proximity-ranked iteration over the values of a trie.
//!
//! Each requested prefix is resolved to a node and its sub-tree is walked
//! breadth-first. The proximity of a value is the depth of the word carrying
//! it below the prefix node. With several prefixes only the values found
//! under every prefix are kept, and their proximity is the mean of the
//! per-prefix proximities.
//!
//! Sequences are lazy: nothing is traversed until the first element is
//! pulled, and dropping the iterator early needs no cleanup.
//!
//! # Examples
//!
//! ```
//! use synotrie::iterate::IterateOptions;
//! use synotrie::trie::Trie;
//!
//! let trie = Trie::from_pairs([
//!     ("testing", 1),
//!     ("taste", 2),
//!     ("tester", 4),
//!     ("test", 5),
//!     ("tastier", 5),
//!     ("tastening", 4),
//! ]);
//!
//! let mut merged: Vec<_> = trie
//!     .iter_values(IterateOptions::new().prefixes(["tes", "tas"]))
//!     .unwrap()
//!     .map(|m| (m.proximity, *m.value))
//!     .collect();
//! merged.sort_by(|a, b| a.partial_cmp(b).unwrap());
//!
//! assert_eq!(merged, vec![(2.5, 5), (4.5, 4)]);
//! ```

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::Result;
use crate::trie::Trie;
use crate::trie::node::NodeId;

mod bfs;
mod merge;
pub mod options;

use bfs::BreadthFirst;
use merge::{CandidateStream, Intersect};

pub use options::IterateOptions;

/// A value together with its distance from the requested prefixes.
#[derive(Debug, PartialEq)]
pub struct ProximityMatch<'a, V> {
    /// Depth below the prefix node, averaged over all prefixes.
    pub proximity: f64,
    /// The value attached to the word.
    pub value: &'a V,
}

impl<V> Clone for ProximityMatch<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ProximityMatch<'_, V> {}

/// Lazy sequence of [`ProximityMatch`]es.
pub struct ProximityIter<'a, V, K = V> {
    inner: Option<CandidateStream<'a, V, K>>,
}

impl<'a, V, K> ProximityIter<'a, V, K> {
    fn empty() -> Self {
        ProximityIter { inner: None }
    }
}

impl<'a, V, K> Iterator for ProximityIter<'a, V, K> {
    type Item = ProximityMatch<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.inner.as_mut()?.next()?;
        Some(ProximityMatch {
            proximity: candidate.proximity,
            value: candidate.value,
        })
    }
}

impl<V, K> fmt::Debug for ProximityIter<'_, V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityIter")
            .field("exhausted", &self.inner.is_none())
            .finish()
    }
}

impl<V> Trie<V> {
    /// Iterate values below the prefixes in `options`.
    ///
    /// If any prefix leaves the trie the sequence is empty. Prefixes that
    /// reach the same node are walked once.
    pub fn iter_values<'a, K>(
        &'a self,
        options: IterateOptions<'a, V, K>,
    ) -> Result<ProximityIter<'a, V, K>>
    where
        K: Eq + Hash + Clone + 'a,
    {
        let unique = options.effective_uniqueness()?;

        let mut starts: Vec<NodeId> = Vec::new();
        if options.requested_prefixes().is_empty() {
            starts.push(NodeId::ROOT);
        }
        for prefix in options.requested_prefixes() {
            let Some(id) = self.sub_trie(prefix) else {
                log::debug!("prefix {:?} is not in the trie; nothing to iterate", prefix);
                return Ok(ProximityIter::empty());
            };
            if !starts.contains(&id) {
                starts.push(id);
            }
        }

        let get_id = options.get_id;
        let mut streams = starts.into_iter().map(|start| {
            Box::new(BreadthFirst::new(self, start, unique, get_id.clone()))
                as CandidateStream<'a, V, K>
        });

        let Some(first) = streams.next() else {
            return Ok(ProximityIter::empty());
        };
        let merged = streams.fold(first, |acc, next| {
            Box::new(Intersect::new(acc, next)) as CandidateStream<'a, V, K>
        });

        Ok(ProximityIter {
            inner: Some(merged),
        })
    }

    /// Iterate every value below one prefix, repeated values included.
    pub fn iter_prefix<'a>(&'a self, prefix: &str) -> ProximityIter<'a, V, V>
    where
        V: Clone + Eq + Hash,
    {
        let Some(start) = self.sub_trie(prefix) else {
            return ProximityIter::empty();
        };
        let stream: CandidateStream<'a, V, V> = Box::new(BreadthFirst::new(
            self,
            start,
            false,
            Rc::new(|value: &V| value.clone()),
        ));
        ProximityIter {
            inner: Some(stream),
        }
    }
}

//! Intersection of candidate sequences with a running mean of proximities.

use std::hash::Hash;

use ahash::AHashMap;

use crate::iterate::bfs::Candidate;

pub(crate) type CandidateStream<'a, V, K> = Box<dyn Iterator<Item = Candidate<'a, V, K>> + 'a>;

/// Yields the candidates of `right` whose identity also appears in `left`.
///
/// Each match folds the right proximity into the left entry's running mean
/// and yields the updated entry. `left` is drained into an index on the first
/// pull.
pub(crate) struct Intersect<'a, V, K> {
    left: Option<CandidateStream<'a, V, K>>,
    right: CandidateStream<'a, V, K>,
    index: AHashMap<K, Candidate<'a, V, K>>,
}

impl<'a, V, K> Intersect<'a, V, K> {
    pub fn new(left: CandidateStream<'a, V, K>, right: CandidateStream<'a, V, K>) -> Self {
        Intersect {
            left: Some(left),
            right,
            index: AHashMap::new(),
        }
    }
}

impl<'a, V, K: Eq + Hash + Clone> Iterator for Intersect<'a, V, K> {
    type Item = Candidate<'a, V, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(left) = self.left.take() {
            for candidate in left {
                self.index.insert(candidate.id.clone(), candidate);
            }
        }

        loop {
            let candidate = self.right.next()?;
            if let Some(entry) = self.index.get_mut(&candidate.id) {
                entry.count += 1;
                entry.proximity += (candidate.proximity - entry.proximity) / f64::from(entry.count);
                return Some(entry.clone());
            }
        }
    }
}

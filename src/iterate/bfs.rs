//! Breadth-first candidate generation below one node.

use std::collections::VecDeque;
use std::hash::Hash;
use std::rc::Rc;
use std::slice;

use ahash::AHashSet;
use bit_vec::BitVec;

use crate::trie::Trie;
use crate::trie::node::NodeId;

/// A value found below a prefix node.
pub(crate) struct Candidate<'a, V, K> {
    pub proximity: f64,
    pub value: &'a V,
    pub id: K,
    pub count: u32,
}

impl<V, K: Clone> Clone for Candidate<'_, V, K> {
    fn clone(&self) -> Self {
        Candidate {
            proximity: self.proximity,
            value: self.value,
            id: self.id.clone(),
            count: self.count,
        }
    }
}

/// Walks the sub-tree of one node level by level, emitting the values of
/// every terminal node with its depth as proximity.
///
/// Only owned edges are followed; aliases point back into the same level and
/// would revisit nodes.
pub(crate) struct BreadthFirst<'a, V, K> {
    trie: &'a Trie<V>,
    queue: VecDeque<(NodeId, u32)>,
    visited: BitVec,
    seen: Option<AHashSet<K>>,
    pending: Option<(u32, slice::Iter<'a, V>)>,
    get_id: Rc<dyn Fn(&V) -> K + 'a>,
}

impl<'a, V, K> BreadthFirst<'a, V, K> {
    pub fn new(
        trie: &'a Trie<V>,
        start: NodeId,
        unique: bool,
        get_id: Rc<dyn Fn(&V) -> K + 'a>,
    ) -> Self {
        let mut visited = BitVec::from_elem(trie.len(), false);
        visited.set(start.index(), true);

        let mut queue = VecDeque::new();
        queue.push_back((start, 0));

        BreadthFirst {
            trie,
            queue,
            visited,
            seen: unique.then(AHashSet::new),
            pending: None,
            get_id,
        }
    }
}

impl<'a, V, K: Eq + Hash + Clone> Iterator for BreadthFirst<'a, V, K> {
    type Item = Candidate<'a, V, K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((depth, values)) = &mut self.pending {
                for value in values.by_ref() {
                    let id = (self.get_id)(value);
                    if let Some(seen) = &mut self.seen
                        && !seen.insert(id.clone())
                    {
                        continue;
                    }
                    return Some(Candidate {
                        proximity: f64::from(*depth),
                        value,
                        id,
                        count: 1,
                    });
                }
                self.pending = None;
            }

            let (id, depth) = self.queue.pop_front()?;
            let Some(node) = self.trie.node(id) else {
                continue;
            };

            for (_, child) in node.child_nodes() {
                if !self.visited.get(child.index()).unwrap_or(true) {
                    self.visited.set(child.index(), true);
                    self.queue.push_back((child, depth + 1));
                }
            }

            if node.is_terminal()
                && let Some(values) = node.values()
            {
                self.pending = Some((depth, values.iter()));
            }
        }
    }
}

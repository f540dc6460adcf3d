//! Arena nodes and edges.

use std::collections::BTreeMap;

use crate::trie::values::ValueSet;

/// Index of a node inside a trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Get the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An outgoing edge of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    /// An owned child node.
    Node(NodeId),
    /// A sibling key whose child should be followed instead.
    Alias(String),
}

impl Edge {
    /// Get the child node if this edge owns one.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Edge::Node(id) => Some(*id),
            Edge::Alias(_) => None,
        }
    }

    /// Check whether this edge is an alias.
    pub fn is_alias(&self) -> bool {
        matches!(self, Edge::Alias(_))
    }
}

/// A node of the trie.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    pub(crate) children: BTreeMap<String, Edge>,
    pub(crate) word: Option<String>,
    pub(crate) values: Option<ValueSet<V>>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            word: None,
            values: None,
        }
    }
}

impl<V> TrieNode<V> {
    /// Outgoing edges, ordered by key.
    pub fn children(&self) -> &BTreeMap<String, Edge> {
        &self.children
    }

    /// Get the edge stored under `key`.
    pub fn edge(&self, key: &str) -> Option<&Edge> {
        self.children.get(key)
    }

    /// The word that ends here, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Check whether a word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// Values attached to this node.
    pub fn values(&self) -> Option<&ValueSet<V>> {
        self.values.as_ref()
    }

    /// Iterate over the owned children, skipping aliases.
    pub fn child_nodes(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.children
            .iter()
            .filter_map(|(key, edge)| edge.as_node().map(|id| (key.as_str(), id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_nodes_skip_aliases() {
        let mut node: TrieNode<()> = TrieNode::default();
        node.children.insert("t".to_string(), Edge::Node(NodeId(1)));
        node.children.insert("th".to_string(), Edge::Alias("t".to_string()));

        let children: Vec<_> = node.child_nodes().collect();
        assert_eq!(children, vec![("t", NodeId(1))]);
        assert!(node.edge("th").unwrap().is_alias());
        assert!(!node.is_terminal());
    }
}

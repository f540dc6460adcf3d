//! Structural serialization of a trie.
//!
//! A trie serializes to its options, its synonym groups and a nested node
//! record:
//!
//! ```json
//! {
//!   "options": { "forbidden_words": [], "min_size": 0,
//!                "case_insensitive": true, "only_alphanumerics": true },
//!   "synonyms": [["a", "b"]],
//!   "root": { "children": { "a": { "children": {}, "word": "a", "values": [1] },
//!                           "b": "a" } }
//! }
//! ```
//!
//! A child is either a nested record or the key of the sibling it aliases.
//! The synonym table is rebuilt from the groups on deserialization.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::trie::Trie;
use crate::trie::config::TrieOptions;
use crate::trie::node::{Edge, NodeId, TrieNode};
use crate::trie::synonym::SynonymTable;
use crate::trie::values::ValueSet;

impl<V: Serialize> Trie<V> {
    /// Serialize the trie to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the trie to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<V: de::DeserializeOwned> Trie<V> {
    /// Deserialize a trie from JSON.
    ///
    /// Nesting depth follows word length, so serde_json's recursion limit is
    /// lifted.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let trie = Trie::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Ok(trie)
    }
}

impl<V: Serialize> Serialize for Trie<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let groups = self.synonyms().map(SynonymTable::groups).unwrap_or_default();

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("options", self.options())?;
        map.serialize_entry("synonyms", &groups)?;
        map.serialize_entry(
            "root",
            &NodeView {
                trie: self,
                id: NodeId::ROOT,
            },
        )?;
        map.end()
    }
}

struct NodeView<'a, V> {
    trie: &'a Trie<V>,
    id: NodeId,
}

struct ChildrenView<'a, V> {
    trie: &'a Trie<V>,
    node: &'a TrieNode<V>,
}

impl<V: Serialize> Serialize for NodeView<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let node = self
            .trie
            .node(self.id)
            .ok_or_else(|| {
                <S::Error as serde::ser::Error>::custom(format!("missing node {}", self.id.index()))
            })?;

        let len = 1 + usize::from(node.word.is_some()) + usize::from(node.values.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(
            "children",
            &ChildrenView {
                trie: self.trie,
                node,
            },
        )?;
        if let Some(word) = &node.word {
            map.serialize_entry("word", word)?;
        }
        if let Some(values) = &node.values {
            map.serialize_entry("values", values)?;
        }
        map.end()
    }
}

impl<V: Serialize> Serialize for ChildrenView<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.node.children.len()))?;
        for (key, edge) in &self.node.children {
            match edge {
                Edge::Node(id) => map.serialize_entry(
                    key,
                    &NodeView {
                        trie: self.trie,
                        id: *id,
                    },
                )?,
                Edge::Alias(target) => map.serialize_entry(key, target)?,
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
struct TrieRepr<V> {
    #[serde(default)]
    options: TrieOptions,
    #[serde(default)]
    synonyms: Vec<Vec<String>>,
    root: NodeRepr<V>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
struct NodeRepr<V> {
    #[serde(default)]
    children: BTreeMap<String, EdgeRepr<V>>,
    #[serde(default)]
    word: Option<String>,
    #[serde(default)]
    values: Option<ValueSet<V>>,
}

enum EdgeRepr<V> {
    Node(Box<NodeRepr<V>>),
    Alias(String),
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for EdgeRepr<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(EdgeVisitor(PhantomData))
    }
}

struct EdgeVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EdgeVisitor<V> {
    type Value = EdgeRepr<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a child node record or the key of an aliased sibling")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(EdgeRepr::Alias(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
        Ok(EdgeRepr::Alias(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Self::Value, A::Error> {
        let node = NodeRepr::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(EdgeRepr::Node(Box::new(node)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Trie<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = TrieRepr::<V>::deserialize(deserializer)?;
        let nodes = lift(repr.root).map_err(<D::Error as de::Error>::custom)?;
        let table = SynonymTable::build(repr.synonyms).map_err(<D::Error as de::Error>::custom)?;
        let synonyms = (!table.is_empty()).then(|| Arc::new(table));
        Ok(Trie::from_parts(nodes, synonyms, repr.options))
    }
}

/// Flatten a nested node record into an arena, root first.
fn lift<V>(root: NodeRepr<V>) -> std::result::Result<Vec<TrieNode<V>>, String> {
    let mut nodes = vec![TrieNode::default()];
    let mut pending = vec![(NodeId::ROOT, root)];

    while let Some((id, repr)) = pending.pop() {
        if repr.values.is_some() && repr.word.is_none() {
            return Err("values attached to a node that ends no word".to_string());
        }

        let mut children = BTreeMap::new();
        for (key, edge) in repr.children {
            match edge {
                EdgeRepr::Node(child) => {
                    let child_id = NodeId(nodes.len());
                    nodes.push(TrieNode::default());
                    children.insert(key, Edge::Node(child_id));
                    pending.push((child_id, *child));
                }
                EdgeRepr::Alias(target) => {
                    children.insert(key, Edge::Alias(target));
                }
            }
        }

        let node = &mut nodes[id.0];
        node.children = children;
        node.word = repr.word;
        node.values = repr.values;
    }

    Ok(nodes)
}

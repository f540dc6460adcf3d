//! The synonym-aware trie.

use std::hash::Hash;
use std::sync::Arc;

use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::error::Result;
use crate::trie::MatchType;
use crate::trie::config::TrieOptions;
use crate::trie::node::{Edge, NodeId, TrieNode};
use crate::trie::synonym::SynonymTable;
use crate::trie::values::ValueSet;

/// A prefix tree whose terminal nodes carry sets of values.
///
/// Nodes live in an arena owned by the trie. When synonym groups are
/// configured, the spellings of one group are wired as aliases of a single
/// edge, so every spelling reaches the same sub-tree.
///
/// # Examples
///
/// ```
/// use synotrie::trie::{MatchType, Trie};
///
/// let mut trie = Trie::with_synonyms(vec![vec!["th", "t"]]).unwrap();
/// trie.insert_with_value("taste", 1);
///
/// assert_eq!(trie.lookup("thasthe"), MatchType::Perfect);
/// assert_eq!(trie.lookup("thast"), MatchType::Partial);
/// assert_eq!(trie.lookup("tasty"), MatchType::None);
/// ```
#[derive(Debug, Clone)]
pub struct Trie<V = ()> {
    pub(crate) nodes: Vec<TrieNode<V>>,
    synonyms: Option<Arc<SynonymTable>>,
    options: TrieOptions,
    analyzer: PipelineAnalyzer,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::with_options(TrieOptions::default())
    }
}

impl<V> Trie<V> {
    /// Create an empty trie with default options and no synonyms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trie with the given options and no synonyms.
    pub fn with_options(options: TrieOptions) -> Self {
        Self::from_parts(vec![TrieNode::default()], None, options)
    }

    /// Create an empty trie with synonym groups and default options.
    pub fn with_synonyms<G, I, S>(groups: G) -> Result<Self>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(groups, TrieOptions::default())
    }

    /// Create an empty trie with synonym groups and options.
    pub fn with_config<G, I, S>(groups: G, options: TrieOptions) -> Result<Self>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = SynonymTable::build(groups)?;
        Ok(Self::with_table(table, options))
    }

    /// Create an empty trie around an already built synonym table.
    pub fn with_table(table: SynonymTable, options: TrieOptions) -> Self {
        let synonyms = (!table.is_empty()).then(|| Arc::new(table));
        Self::from_parts(vec![TrieNode::default()], synonyms, options)
    }

    pub(crate) fn from_parts(
        nodes: Vec<TrieNode<V>>,
        synonyms: Option<Arc<SynonymTable>>,
        options: TrieOptions,
    ) -> Self {
        let analyzer = PipelineAnalyzer::from_options(&options);
        Trie {
            nodes,
            synonyms,
            options,
            analyzer,
        }
    }

    /// Build a trie holding the given words, without values.
    pub fn from_words<W, S>(words: W) -> Self
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Build a synonym-aware trie holding the given words.
    pub fn from_words_with_synonyms<G, I, S, W, T>(groups: G, words: W) -> Result<Self>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
        W: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut trie = Self::with_synonyms(groups)?;
        for word in words {
            trie.insert(word.as_ref());
        }
        Ok(trie)
    }

    /// Insert a word without attaching a value.
    ///
    /// Returns the terminal node.
    pub fn insert(&mut self, word: &str) -> NodeId {
        let synonyms = self.synonyms.clone();
        let mut current = NodeId::ROOT;
        for key in KeySteps::new(word, synonyms.as_deref()) {
            current = self.child_or_create(current, key, synonyms.as_deref());
        }

        self.nodes[current.0].word = Some(word.to_string());
        current
    }

    /// Look up how far `word` matches.
    pub fn lookup(&self, word: &str) -> MatchType {
        match self.sub_trie(word) {
            None => MatchType::None,
            Some(id) if self.nodes[id.0].is_terminal() => MatchType::Perfect,
            Some(_) => MatchType::Partial,
        }
    }

    /// Resolve the node reached by `prefix`, following synonym aliases.
    pub fn sub_trie(&self, prefix: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for key in KeySteps::new(prefix, self.synonyms.as_deref()) {
            current = self.follow(current, key)?;
        }
        Some(current)
    }

    /// Follow the edge stored under `key`, resolving an alias one hop.
    ///
    /// A dangling alias behaves like a missing edge.
    pub(crate) fn follow(&self, parent: NodeId, key: &str) -> Option<NodeId> {
        let node = self.nodes.get(parent.0)?;
        match node.children.get(key)? {
            Edge::Node(id) => Some(*id),
            Edge::Alias(target) => node.children.get(target.as_str())?.as_node(),
        }
    }

    fn child_or_create(
        &mut self,
        parent: NodeId,
        key: &str,
        synonyms: Option<&SynonymTable>,
    ) -> NodeId {
        if let Some(child) = self.follow(parent, key) {
            return child;
        }

        let child = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());

        let node = &mut self.nodes[parent.0];
        node.children.insert(key.to_string(), Edge::Node(child));
        if let Some(group) = synonyms.and_then(|table| table.group(key)) {
            for other in group.iter().filter(|other| other.as_str() != key) {
                node.children
                    .entry(other.clone())
                    .or_insert_with(|| Edge::Alias(key.to_string()));
            }
        }

        log::trace!("created node {} under {} for key {:?}", child.0, parent.0, key);
        child
    }

    /// Get the root node.
    pub fn root(&self) -> &TrieNode<V> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<V>> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no word was inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && !self.root().is_terminal()
    }

    /// Number of terminal nodes.
    pub fn word_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_terminal()).count()
    }

    /// Get the options this trie was built with.
    pub fn options(&self) -> &TrieOptions {
        &self.options
    }

    /// Get the synonym table, if any group is configured.
    pub fn synonyms(&self) -> Option<&SynonymTable> {
        self.synonyms.as_deref()
    }

    /// Check whether synonym groups are configured.
    pub fn has_synonyms(&self) -> bool {
        self.synonyms.is_some()
    }

    /// Get the indexing analyzer built from the options.
    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }
}

impl<V: Clone + Eq + Hash> Trie<V> {
    /// Insert a word and attach `value` to its terminal node.
    pub fn insert_with_value(&mut self, word: &str, value: V) -> NodeId {
        let id = self.insert(word);
        self.nodes[id.0]
            .values
            .get_or_insert_with(ValueSet::new)
            .insert(value);
        id
    }

    /// Build a trie from `(word, value)` pairs.
    pub fn from_pairs<P, S>(pairs: P) -> Self
    where
        P: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for (word, value) in pairs {
            trie.insert_with_value(word.as_ref(), value);
        }
        trie
    }

    /// Build a synonym-aware trie from `(word, value)` pairs.
    pub fn from_pairs_with_synonyms<G, I, S, P, W>(groups: G, pairs: P) -> Result<Self>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
        P: IntoIterator<Item = (W, V)>,
        W: AsRef<str>,
    {
        let mut trie = Self::with_synonyms(groups)?;
        for (word, value) in pairs {
            trie.insert_with_value(word.as_ref(), value);
        }
        Ok(trie)
    }

    /// Get the values attached to `word`, if it was inserted with any.
    pub fn values(&self, word: &str) -> Option<&ValueSet<V>> {
        let id = self.sub_trie(word)?;
        self.nodes[id.0].values.as_ref()
    }
}

/// Splits a word into edge keys: the longest synonym spelling at each
/// position, or a single character.
struct KeySteps<'w> {
    word: &'w str,
    pos: usize,
    synonyms: Option<&'w SynonymTable>,
}

impl<'w> KeySteps<'w> {
    fn new(word: &'w str, synonyms: Option<&'w SynonymTable>) -> Self {
        KeySteps {
            word,
            pos: 0,
            synonyms,
        }
    }
}

impl<'w> Iterator for KeySteps<'w> {
    type Item = &'w str;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.word[self.pos..].chars().next()?;
        let end = self
            .synonyms
            .and_then(|table| table.longest_match(self.word, self.pos))
            .unwrap_or(self.pos + ch.len_utf8());
        let key = &self.word[self.pos..end];
        self.pos = end;
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_without_synonyms() {
        let trie = Trie::<()>::from_words(["testing", "taste", "thirsty"]);

        assert_eq!(trie.lookup("taste"), MatchType::Perfect);
        assert_eq!(trie.lookup("test"), MatchType::Partial);
        assert_eq!(trie.lookup("toast"), MatchType::None);
        assert_eq!(trie.lookup("hirsty"), MatchType::None);
        assert_eq!(trie.lookup("testa"), MatchType::None);
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn test_lookup_through_synonyms() {
        let trie =
            Trie::<()>::from_words_with_synonyms(vec![vec!["th", "t"]], ["testing", "taste", "thirsty"])
                .unwrap();

        for word in ["thaste", "tasthe", "thasthe"] {
            assert_eq!(trie.lookup(word), MatchType::Perfect, "{word}");
        }
        for word in ["thast", "tasth", "thasth"] {
            assert_eq!(trie.lookup(word), MatchType::Partial, "{word}");
        }
        for word in ["thasti", "tasthi", "thasthi"] {
            assert_eq!(trie.lookup(word), MatchType::None, "{word}");
        }
    }

    #[test]
    fn test_synonym_spellings_share_one_node() {
        let mut trie = Trie::with_synonyms(vec![vec!["t", "th"]]).unwrap();
        trie.insert_with_value("test", 1);

        assert_eq!(trie.sub_trie("th"), trie.sub_trie("t"));
        assert_eq!(trie.lookup("thest"), MatchType::Perfect);
        assert_eq!(trie.lookup("thes"), MatchType::Partial);
        assert_eq!(trie.lookup("thesz"), MatchType::None);
        assert!(trie.root().edge("th").unwrap().is_alias());
    }

    #[test]
    fn test_longest_spelling_wins() {
        let mut trie = Trie::with_synonyms(vec![vec!["t", "te"]]).unwrap();
        trie.insert_with_value("testing", 1);

        let root = trie.root();
        assert_eq!(root.edge("te").and_then(Edge::as_node), trie.sub_trie("te"));
        assert!(root.edge("t").unwrap().is_alias());
        assert_eq!(trie.lookup("tsting"), MatchType::Perfect);
        assert_eq!(trie.lookup("testeing"), MatchType::Perfect);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = Trie::<()>::new();
        assert_eq!(trie.lookup(""), MatchType::Partial);

        trie.insert("");
        assert_eq!(trie.lookup(""), MatchType::Perfect);
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());
    }

    #[test]
    fn test_values_are_deduplicated() {
        let mut trie = Trie::new();
        trie.insert_with_value("word", 1);
        trie.insert_with_value("word", 1);
        trie.insert_with_value("word", 2);
        trie.insert("word");

        assert_eq!(trie.values("word").unwrap().as_slice(), &[1, 2]);
        assert!(trie.values("wor").is_none());
    }

    #[test]
    fn test_dangling_alias_is_a_missing_edge() {
        let mut trie = Trie::<()>::new();
        trie.nodes[0]
            .children
            .insert("x".to_string(), Edge::Alias("y".to_string()));

        assert_eq!(trie.lookup("x"), MatchType::None);

        trie.insert("x");
        assert_eq!(trie.lookup("x"), MatchType::Perfect);
        assert!(!trie.root().edge("x").unwrap().is_alias());
    }

    #[test]
    fn test_empty_synonym_groups_leave_trie_plain() {
        let trie = Trie::<()>::with_synonyms(Vec::<Vec<String>>::new()).unwrap();
        assert!(!trie.has_synonyms());
    }

    #[test]
    fn test_terminal_keeps_latest_spelling() {
        let mut trie = Trie::<()>::with_synonyms(vec![vec!["th", "t"]]).unwrap();
        let first = trie.insert("taste");
        let second = trie.insert("thaste");

        assert_eq!(first, second);
        assert_eq!(trie.node(second).unwrap().word(), Some("thaste"));
        assert_eq!(trie.word_count(), 1);
    }
}

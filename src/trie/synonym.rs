//! Synonym table used to canonicalize edge keys.
//!
//! Every configured spelling is inserted into a small recognition trie. While
//! a word is inserted or looked up, the longest spelling starting at the
//! current position becomes one edge key, and every other spelling of the same
//! group is wired as an alias of that edge so all of them reach the same node.
//!
//! # Examples
//!
//! ```
//! use synotrie::trie::synonym::SynonymTable;
//!
//! let table = SynonymTable::build(vec![vec!["th", "t"], vec!["ph", "f"]]).unwrap();
//!
//! assert_eq!(table.longest_match("thing", 0), Some(2));
//! assert_eq!(table.longest_match("tip", 0), Some(1));
//! assert_eq!(table.longest_match("apple", 0), None);
//! assert_eq!(table.group("f").unwrap().as_ref(), ["ph", "f"]);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{ConfigurationError, Result, SynotrieError};
use crate::trie::Trie;
use crate::trie::node::NodeId;

/// Recognition trie and spelling→group map for a set of synonym groups.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    trie: Trie<()>,
    groups: AHashMap<String, Arc<[String]>>,
    group_count: usize,
}

impl SynonymTable {
    /// Build a table from groups of interchangeable spellings.
    ///
    /// A spelling may appear only once across all groups, and the empty
    /// spelling is rejected.
    pub fn build<G, I, S>(groups: G) -> Result<Self>
    where
        G: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut trie = Trie::new();
        let mut by_spelling: AHashMap<String, Arc<[String]>> = AHashMap::new();
        let mut group_count = 0;

        for group in groups {
            let group: Arc<[String]> = group.into_iter().map(Into::into).collect();
            if group.is_empty() {
                continue;
            }

            for spelling in group.iter() {
                if spelling.is_empty() {
                    return Err(ConfigurationError::EmptySynonym.into());
                }
                if by_spelling.contains_key(spelling) {
                    return Err(SynotrieError::duplicate_synonym(spelling.as_str()));
                }
                by_spelling.insert(spelling.clone(), Arc::clone(&group));
                trie.insert(spelling);
            }
            group_count += 1;
        }

        log::debug!(
            "built synonym table with {} groups and {} spellings",
            group_count,
            by_spelling.len()
        );

        Ok(SynonymTable {
            trie,
            groups: by_spelling,
            group_count,
        })
    }

    /// Load groups from a JSON file holding an array of string arrays.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Self::build(groups)
    }

    /// Get the group a spelling belongs to.
    pub fn group(&self, spelling: &str) -> Option<&Arc<[String]>> {
        self.groups.get(spelling)
    }

    /// Check whether a spelling is configured.
    pub fn contains(&self, spelling: &str) -> bool {
        self.groups.contains_key(spelling)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.group_count
    }

    /// Check if no spelling is configured.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the distinct groups, each listed once.
    pub fn groups(&self) -> Vec<Vec<String>> {
        let mut seen: Vec<&Arc<[String]>> = Vec::with_capacity(self.group_count);
        for group in self.groups.values() {
            if !seen.iter().any(|known| Arc::ptr_eq(known, group)) {
                seen.push(group);
            }
        }
        let mut groups: Vec<Vec<String>> = seen.into_iter().map(|g| g.to_vec()).collect();
        groups.sort();
        groups
    }

    /// Find the longest configured spelling starting at byte offset `start`.
    ///
    /// Returns the byte offset just past the match.
    pub fn longest_match(&self, word: &str, start: usize) -> Option<usize> {
        let rest = word.get(start..)?;
        let mut current = NodeId::ROOT;
        let mut longest = None;

        for (offset, ch) in rest.char_indices() {
            let end = offset + ch.len_utf8();
            match self.trie.follow(current, &rest[offset..end]) {
                Some(next) => current = next,
                None => break,
            }
            if self.trie.node(current).is_some_and(|node| node.is_terminal()) {
                longest = Some(start + end);
            }
        }

        longest
    }
}

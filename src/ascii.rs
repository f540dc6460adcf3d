//! Dense trie over lowercase ASCII letters.
//!
//! Each node holds a fixed 26-slot child table, trading memory for lookups
//! without hashing or map traversal. Only `a`–`z` can be stored.
//!
//! # Examples
//!
//! ```
//! use synotrie::ascii::AsciiTrie;
//! use synotrie::trie::MatchType;
//!
//! let trie = AsciiTrie::new(["testing", "taste", "thirsty"]).unwrap();
//!
//! assert_eq!(trie.lookup("taste"), MatchType::Perfect);
//! assert_eq!(trie.lookup("test"), MatchType::Partial);
//! assert_eq!(trie.lookup("toast"), MatchType::None);
//! ```

use crate::error::{Result, SynotrieError};
use crate::trie::MatchType;

const ALPHABET: usize = 26;

#[derive(Debug, Clone, Default)]
struct AsciiNode {
    children: [Option<u32>; ALPHABET],
    terminal: bool,
}

/// A 26-way trie of lowercase ASCII words.
#[derive(Debug, Clone)]
pub struct AsciiTrie {
    nodes: Vec<AsciiNode>,
}

impl Default for AsciiTrie {
    fn default() -> Self {
        AsciiTrie {
            nodes: vec![AsciiNode::default()],
        }
    }
}

fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

impl AsciiTrie {
    /// Build a trie holding `words`.
    pub fn new<W, S>(words: W) -> Result<Self>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = AsciiTrie::default();
        for word in words {
            trie.insert(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Insert a word made of `a`–`z` only.
    ///
    /// A rejected word leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let slots = word
            .bytes()
            .map(slot)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                SynotrieError::analysis(format!("{word:?} contains characters outside a-z"))
            })?;

        let mut current = 0;
        for slot in slots {
            let next = self.nodes[current].children[slot];
            current = match next {
                Some(child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(AsciiNode::default());
                    self.nodes[current].children[slot] = Some(child as u32);
                    child
                }
            };
        }
        self.nodes[current].terminal = true;
        Ok(())
    }

    /// Look up how far `word` matches. Characters outside `a`–`z` never match.
    pub fn lookup(&self, word: &str) -> MatchType {
        let mut current = 0;
        for byte in word.bytes() {
            let Some(child) = slot(byte).and_then(|slot| self.nodes[current].children[slot]) else {
                return MatchType::None;
            };
            current = child as usize;
        }
        if self.nodes[current].terminal {
            MatchType::Perfect
        } else {
            MatchType::Partial
        }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no word was inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && !self.nodes[0].terminal
    }
}

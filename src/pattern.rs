//! Regular expressions equivalent to a trie.
//!
//! Every node becomes a non-capturing alternation of its outgoing edges, each
//! edge key followed by the expression of its child. A mode-specific
//! terminator decides where a match may stop:
//!
//! | mode       | terminal node | other nodes |
//! |------------|---------------|-------------|
//! | `Perfect`  | end of input  | none        |
//! | `Partial`  | end of input  | end of input|
//! | `Classify` | before `\n`   | `\n`        |
//!
//! A `Classify` pattern is run against the text followed by a `\n` sentinel:
//! a match that consumes the sentinel stopped on a prefix, a match that stops
//! before it ended on a word.
//!
//! # Examples
//!
//! ```
//! use synotrie::pattern::{MatchMode, TriePattern};
//! use synotrie::trie::{MatchType, Trie};
//!
//! let trie = Trie::<()>::from_words(["testing", "taste", "thirsty"]);
//! let pattern = TriePattern::compile(&trie, MatchMode::Classify).unwrap();
//!
//! assert_eq!(pattern.classify("test").unwrap(), MatchType::Partial);
//! assert_eq!(pattern.classify("taste").unwrap(), MatchType::Perfect);
//! assert_eq!(pattern.classify("toast").unwrap(), MatchType::None);
//! ```

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynotrieError};
use crate::trie::node::NodeId;
use crate::trie::{MatchType, Trie};

/// Default limit on the compiled size of a trie pattern, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 64 * (1 << 20);

const SENTINEL: char = '\n';

/// How strictly a compiled pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Any prefix of a word matches.
    #[default]
    Partial,
    /// Only whole words match.
    Perfect,
    /// Matches tell prefixes and words apart, see [`TriePattern::classify`].
    Classify,
}

impl MatchMode {
    fn terminator(self, terminal: bool) -> Option<&'static str> {
        match (self, terminal) {
            (MatchMode::Perfect, true) => Some("$"),
            (MatchMode::Perfect, false) => None,
            (MatchMode::Partial, _) => Some("$"),
            (MatchMode::Classify, true) => Some("(?m:$)"),
            (MatchMode::Classify, false) => Some(r"\n"),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchMode::Partial => "partial",
            MatchMode::Perfect => "perfect",
            MatchMode::Classify => "classify",
        };
        f.write_str(name)
    }
}

/// A compiled pattern accepting the same strings as a trie.
#[derive(Debug, Clone)]
pub struct TriePattern {
    regex: Regex,
    mode: MatchMode,
}

impl TriePattern {
    /// Compile the pattern of a synonym-free trie.
    pub fn compile<V>(trie: &Trie<V>, mode: MatchMode) -> Result<Self> {
        Self::compile_with_size_limit(trie, mode, DEFAULT_SIZE_LIMIT)
    }

    /// Compile with an explicit limit on the compiled program size.
    pub fn compile_with_size_limit<V>(
        trie: &Trie<V>,
        mode: MatchMode,
        size_limit: usize,
    ) -> Result<Self> {
        let source = Self::source(trie, mode)?;
        log::debug!(
            "compiling {} pattern of {} bytes for {} nodes",
            mode,
            source.len(),
            trie.len()
        );

        let regex = RegexBuilder::new(&source).size_limit(size_limit).build()?;
        Ok(TriePattern { regex, mode })
    }

    /// Build the expression text without compiling it.
    pub fn source<V>(trie: &Trie<V>, mode: MatchMode) -> Result<String> {
        if trie.has_synonyms() {
            return Err(SynotrieError::unsupported(
                "patterns cannot be compiled for a trie with synonyms",
            ));
        }

        let mut source = String::from("^");
        let body = alternation(trie, NodeId::ROOT, mode)?;
        if body.is_empty() {
            // An empty trie without a word: nothing can match.
            source.push_str(r"\b\B");
        } else {
            source.push_str(&body);
        }
        Ok(source)
    }

    /// Get the mode this pattern was compiled for.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Get the compiled regex.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Get the expression text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Check whether `text` matches under this pattern's mode.
    pub fn is_match(&self, text: &str) -> bool {
        match self.mode {
            MatchMode::Classify => self
                .classify(text)
                .map(MatchType::is_match)
                .unwrap_or(false),
            _ => self.regex.is_match(text),
        }
    }

    /// Classify `text` as a word, a prefix or neither.
    ///
    /// Only available for patterns compiled in [`MatchMode::Classify`].
    pub fn classify(&self, text: &str) -> Result<MatchType> {
        if self.mode != MatchMode::Classify {
            return Err(SynotrieError::unsupported(format!(
                "classify requires a classify pattern, this one is {}",
                self.mode
            )));
        }
        if text.contains(SENTINEL) {
            return Ok(MatchType::None);
        }

        let probe = format!("{text}{SENTINEL}");
        Ok(match self.regex.find(&probe) {
            None => MatchType::None,
            Some(found) if found.as_str().ends_with(SENTINEL) => MatchType::Partial,
            Some(_) => MatchType::Perfect,
        })
    }
}

impl fmt::Display for TriePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<V> Trie<V> {
    /// Compile a pattern accepting the same strings as this trie.
    pub fn to_pattern(&self, mode: MatchMode) -> Result<TriePattern> {
        TriePattern::compile(self, mode)
    }
}

fn alternation<V>(trie: &Trie<V>, id: NodeId, mode: MatchMode) -> Result<String> {
    let Some(node) = trie.node(id) else {
        return Ok(String::new());
    };

    let mut branches = Vec::with_capacity(node.children().len() + 1);
    for (key, child) in node.child_nodes() {
        if mode == MatchMode::Classify && key.contains(SENTINEL) {
            return Err(SynotrieError::unsupported(
                "classify patterns cannot be compiled for words containing a newline",
            ));
        }
        let mut branch = regex::escape(key);
        branch.push_str(&alternation(trie, child, mode)?);
        branches.push(branch);
    }
    if let Some(terminator) = mode.terminator(node.is_terminal()) {
        branches.push(terminator.to_string());
    }

    Ok(match branches.len() {
        0 => String::new(),
        1 => branches.swap_remove(0),
        _ => format!("(?:{})", branches.join("|")),
    })
}

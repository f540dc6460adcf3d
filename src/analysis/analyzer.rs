//! Analyzers combine a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Trie
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Examples
//!
//! ```
//! use synotrie::analysis::analyzer::Analyzer;
//! use synotrie::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use synotrie::trie::config::TrieOptions;
//!
//! let analyzer = PipelineAnalyzer::from_options(&TrieOptions::default());
//! let tokens: Vec<_> = analyzer.analyze("Hello, Wörld!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze several texts as one stream.
    ///
    /// Filters run once over the concatenated tokens, so stateful filters
    /// (duplicate suppression) see every text.
    fn analyze_all(&self, texts: &[String]) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod pipeline;

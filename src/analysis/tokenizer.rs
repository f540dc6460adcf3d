//! Tokenizers break text into tokens.
//!
//! # Examples
//!
//! ```
//! use synotrie::analysis::tokenizer::Tokenizer;
//! use synotrie::analysis::tokenizer::separator::SeparatorTokenizer;
//!
//! let tokenizer = SeparatorTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, ",");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared between the
/// trie and the streaming worker.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod separator;

//! Stop filter implementation.
//!
//! Removes forbidden words. The comparison is exact and happens on the token
//! text as it reaches this filter, so in the default chain it sees
//! lowercased, folded tokens.
//!
//! # Examples
//!
//! ```
//! use synotrie::analysis::token_filter::Filter;
//! use synotrie::analysis::token_filter::stop::StopFilter;
//! use synotrie::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["code"]);
//! let tokens = vec![Token::new("code", 0), Token::new("review", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "review");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes forbidden words.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Check if a word is forbidden.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of forbidden words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the word list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        Ok(Box::new(
            tokens.filter(move |token| !stop_words.contains(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

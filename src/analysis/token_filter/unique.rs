//! Unique filter implementation.
//!
//! Drops every token whose text was already emitted by the same stream. The
//! seen-set lives for one call to [`Filter::filter`], so when an analyzer
//! processes all the strings of one object in a single pass, repetitions are
//! suppressed across the whole object and nowhere else.

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes repeated tokens within one stream.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    /// Create a new unique filter.
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        Ok(Box::new(
            tokens.filter(move |token| seen.insert(token.text.clone())),
        ))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_unique_filter() {
        let filter = UniqueFilter::new();
        let tokens = vec![
            Token::new("resume", 0),
            Token::new("more", 1),
            Token::new("resume", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "resume");
        assert_eq!(result[1].text, "more");
    }

    #[test]
    fn test_unique_filter_state_is_per_stream() {
        let filter = UniqueFilter::new();

        for _ in 0..2 {
            let tokens = vec![Token::new("again", 0)];
            let result: Vec<Token> = filter
                .filter(Box::new(tokens.into_iter()))
                .unwrap()
                .collect();
            assert_eq!(result.len(), 1);
        }
    }
}

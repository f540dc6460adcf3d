//! Minimum length filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum number of characters.
#[derive(Clone, Debug)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new filter keeping tokens with at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    /// Get the configured minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        Ok(Box::new(
            tokens.filter(move |token| token.char_count() >= min_length),
        ))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(4);
        let tokens = vec![
            Token::new("Son", 0),
            Token::new("daughter", 1),
            Token::new("démo", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "daughter");
        assert_eq!(result[1].text, "démo");
    }
}

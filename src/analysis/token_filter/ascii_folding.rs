//! ASCII folding filter implementation.
//!
//! Tokens are decomposed (NFD), combining diacritical marks (U+0300–U+036F)
//! are removed, and so is every remaining character outside `[0-9A-Za-z]`.
//! A token made only of punctuation folds to the empty string.
//!
//! # Examples
//!
//! ```
//! use synotrie::analysis::token_filter::ascii_folding::fold;
//!
//! assert_eq!(fold("Demodé"), "Demode");
//! assert_eq!(fold("ma*-$#est r@$%(){}+o"), "maestro");
//! assert_eq!(fold(":("), "");
//! ```

use unicode_normalization::UnicodeNormalization;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Fold a string to its ASCII alphanumeric skeleton.
pub fn fold(text: &str) -> String {
    if text.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return text.to_owned();
    }
    text.nfd().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// A filter that keeps only the unaccented ASCII alphanumerics of each token.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    /// Create a new ASCII folding filter.
    pub fn new() -> Self {
        AsciiFoldingFilter
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let folded = fold(&token.text);
            token.with_text(folded)
        })))
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_fold_removes_accents() {
        assert_eq!(fold("áéíóúâêîôûàèìòùÇç"), "aeiouaeiouaeiouCc");
        assert_eq!(fold("resumé"), "resume");
    }

    #[test]
    fn test_fold_removes_special_characters() {
        assert_eq!(fold("ma*-$#est r@$%(){}+o"), "maestro");
        assert_eq!(fold("GiVeNsTrInG123"), "GiVeNsTrInG123");
        assert_eq!(fold("********$%"), "");
    }

    #[test]
    fn test_folding_filter() {
        let filter = AsciiFoldingFilter::new();
        let tokens = vec![Token::new("Demodé", 0), Token::new("'", 1)];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "Demode");
        assert!(result[1].is_empty());
    }
}

//! Remove empty filter implementation.
//!
//! Earlier filters signal "drop this token" by emptying its text; this filter
//! is where such tokens actually leave the stream.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens with empty text.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| !token.is_empty())))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}

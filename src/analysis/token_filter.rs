//! Token filter implementations for token transformation.
//!
//! Every filter is a pure function of one token that may rewrite it or drop
//! it from the stream. Filters are lazy: they wrap the incoming stream instead
//! of collecting it.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`ascii_folding::AsciiFoldingFilter`] - Strips accents and non-alphanumerics
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty tokens
//! - [`stop::StopFilter`] - Removes forbidden words
//! - [`unique::UniqueFilter`] - Removes repeated tokens
//! - [`min_length::MinLengthFilter`] - Removes short tokens
//!
//! # Examples
//!
//! ```
//! use synotrie::analysis::token_filter::Filter;
//! use synotrie::analysis::token_filter::lowercase::LowercaseFilter;
//! use synotrie::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ascii_folding;
pub mod lowercase;
pub mod min_length;
pub mod remove_empty;
pub mod stop;
pub mod unique;

//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use synotrie::analysis::analyzer::Analyzer;
//! use synotrie::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use synotrie::analysis::token_filter::lowercase::LowercaseFilter;
//! use synotrie::analysis::token_filter::stop::StopFilter;
//! use synotrie::analysis::tokenizer::separator::SeparatorTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(SeparatorTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the", "and", "!"])))
//!     .with_name("custom");
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello THE world AND test!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "test");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::ascii_folding::AsciiFoldingFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::min_length::MinLengthFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::unique::UniqueFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::separator::SeparatorTokenizer;
use crate::error::Result;
use crate::trie::config::TrieOptions;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Build the chain used when indexing objects into a trie.
    ///
    /// Order: case folding, alphanumeric folding, empty removal, forbidden
    /// words, duplicate suppression, minimum length.
    pub fn from_options(options: &TrieOptions) -> Self {
        let mut analyzer = Self::query_from_options(options).with_name("index");

        if !options.forbidden_words.is_empty() {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::from_words(
                options.forbidden_words.iter().cloned(),
            )));
        }
        analyzer = analyzer.add_filter(Arc::new(UniqueFilter::new()));
        if options.min_size > 0 {
            analyzer = analyzer.add_filter(Arc::new(MinLengthFilter::new(options.min_size)));
        }
        analyzer
    }

    /// Build the normalization chain applied to lookup and search input.
    pub fn query_from_options(options: &TrieOptions) -> Self {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(SeparatorTokenizer::new()));

        if options.case_insensitive {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }
        if options.only_alphanumerics {
            analyzer = analyzer.add_filter(Arc::new(AsciiFoldingFilter::new()));
        }
        analyzer
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("query")
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    fn apply_filters(&self, mut tokens: TokenStream) -> Result<TokenStream> {
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        self.apply_filters(tokens)
    }

    fn analyze_all(&self, texts: &[String]) -> Result<TokenStream> {
        let mut tokens: TokenStream = Box::new(std::iter::empty());
        for text in texts {
            tokens = Box::new(tokens.chain(self.tokenizer.tokenize(text)?));
        }
        self.apply_filters(tokens)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

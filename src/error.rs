//! Error types for the synotrie library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SynotrieError`] enum. Lookups and iterations that simply find nothing are
//! not errors: they report [`MatchType::None`](crate::trie::MatchType) or an
//! empty sequence.
//!
//! # Examples
//!
//! ```
//! use synotrie::error::{ConfigurationError, SynotrieError};
//! use synotrie::trie::Trie;
//!
//! let result = Trie::<()>::with_synonyms(vec![vec!["t", "th"], vec!["x", "t"]]);
//!
//! match result {
//!     Err(SynotrieError::Configuration(ConfigurationError::DuplicateSynonym(s))) => {
//!         assert_eq!(s, "t")
//!     }
//!     _ => panic!("expected a duplicate synonym error"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// Invalid configuration detected while building a trie or validating
/// iteration options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The same spelling was listed more than once, within or across groups.
    #[error("synonym '{0}' informed more than once")]
    DuplicateSynonym(String),

    /// An empty string was listed as a synonym spelling.
    #[error("synonym spellings must not be empty")]
    EmptySynonym,

    /// Uniqueness was disabled while several prefixes were requested.
    #[error("uniqueness cannot be disabled when more than one prefix is requested")]
    InvalidUniqueness,
}

/// The main error type for synotrie operations.
#[derive(Error, Debug)]
pub enum SynotrieError {
    /// Invalid synonym groups or iteration options
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The requested operation is not available for this trie
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Errors reported by a streaming source
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pattern compilation errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SynotrieError.
pub type Result<T> = std::result::Result<T, SynotrieError>;

impl SynotrieError {
    /// Create a duplicate synonym error.
    pub fn duplicate_synonym<S: Into<String>>(spelling: S) -> Self {
        SynotrieError::Configuration(ConfigurationError::DuplicateSynonym(spelling.into()))
    }

    /// Create an invalid uniqueness error.
    pub fn invalid_uniqueness() -> Self {
        SynotrieError::Configuration(ConfigurationError::InvalidUniqueness)
    }

    /// Create a new unsupported feature error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        SynotrieError::UnsupportedFeature(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynotrieError::Analysis(msg.into())
    }

    /// Create a new ingestion error.
    pub fn ingestion<S: Into<String>>(msg: S) -> Self {
        SynotrieError::Ingestion(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        SynotrieError::OperationCancelled(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynotrieError::Other(msg.into())
    }

    /// Check whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SynotrieError::Configuration(_))
    }
}

//! Core error types
//!
//! A word that cannot be resolved is not an error: it surfaces as `None`
//! from the resolver and as the `"none"` sentinel entry at line level.

use thiserror::Error;

/// Errors raised while building dictionaries, rules and resolvers
#[derive(Debug, Error)]
pub enum CoreError {
    /// Rule configuration loading, parsing or validation error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// No rule set registered under the requested code
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A POS pattern template failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern after headword substitution
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A stress digit outside 0..=2
    #[error("Invalid stress digit: {0}")]
    InvalidStressDigit(u8),

    /// Malformed pronouncing dictionary entry
    #[error("Dictionary parse error at line {line}: {reason}")]
    DictionaryParse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// I/O error while reading a dictionary
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

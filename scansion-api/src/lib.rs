//! Public API for scansion stress resolution
//!
//! This crate provides a stable interface for looking up the lexical stress
//! of English words and lines, hiding how rules and dictionaries are loaded.
//!
//! ```rust
//! use scansion_api::{get_line_stress, get_word_stress, PosLabel};
//!
//! let noun = get_word_stress("record", "the record shows", None).unwrap();
//! assert_eq!(noun.unwrap().digits(), vec![0, 1]);
//!
//! let verb = get_word_stress("record", "", Some(PosLabel::Verb)).unwrap();
//! assert_eq!(verb.unwrap().digits(), vec![1, 0]);
//!
//! let line = get_line_stress("hello asdkfjhasd").unwrap();
//! assert_eq!(line[1].word, "none");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use std::sync::{Arc, OnceLock};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{LineReport, WordStressDTO};
pub use error::ApiError;
pub use scansion_core::{
    PosLabel, PronouncingDictionary, StressPattern, StressResolver, StressRules, WordStress,
    UNRESOLVED_WORD,
};

/// Main entry point for stress analysis
///
/// Cheap to clone and safe to share between threads; the underlying
/// resolver is immutable.
#[derive(Debug, Clone)]
pub struct StressAnalyzer {
    inner: Arc<StressResolver>,
    config: Config,
}

impl StressAnalyzer {
    /// Create an analyzer with the embedded English rules and dictionary
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = config.build_resolver()?;
        log::debug!(
            "Created stress analyzer (rules: {}, custom dictionary: {})",
            config.rules_code(),
            config.has_custom_dictionary()
        );

        Ok(Self {
            inner: Arc::new(inner),
            config,
        })
    }

    /// Stress pattern of `word`, or `None` when it cannot be resolved
    ///
    /// `context` is the surrounding text used to tell noun from verb for
    /// heteronyms; pass `""` when there is none. A `pos_hint` takes
    /// precedence over the context.
    pub fn word_stress(
        &self,
        word: &str,
        context: &str,
        pos_hint: Option<PosLabel>,
    ) -> Option<StressPattern> {
        self.inner.resolve_word(word, context, pos_hint)
    }

    /// Stress of every token in `line`, one entry per token
    pub fn line_stress(&self, line: &str) -> Vec<WordStress> {
        self.inner.resolve_line(line)
    }

    /// Noun/verb classification of `word` in `context`
    pub fn detect_pos(&self, word: &str, context: &str) -> PosLabel {
        self.inner.detect_pos(word, context)
    }

    /// Line stress with resolution counts, ready for serialization
    pub fn line_report(&self, line: &str) -> LineReport {
        LineReport::new(line, &self.line_stress(line))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying resolver
    pub fn resolver(&self) -> &StressResolver {
        &self.inner
    }
}

// Convenience functions

static SHARED: OnceLock<StressAnalyzer> = OnceLock::new();

fn shared() -> Result<&'static StressAnalyzer> {
    if let Some(analyzer) = SHARED.get() {
        return Ok(analyzer);
    }
    let analyzer = StressAnalyzer::new()?;
    Ok(SHARED.get_or_init(|| analyzer))
}

/// Stress pattern of `word` with the default analyzer
///
/// `Ok(None)` means the word is unknown; `Err` only reports that the
/// default analyzer could not be built.
pub fn get_word_stress(
    word: &str,
    context: &str,
    pos_hint: Option<PosLabel>,
) -> Result<Option<StressPattern>> {
    Ok(shared()?.word_stress(word, context, pos_hint))
}

/// Stress of every token in `line` with the default analyzer
pub fn get_line_stress(line: &str) -> Result<Vec<WordStress>> {
    Ok(shared()?.line_stress(line))
}

/// Noun/verb classification with the default analyzer
pub fn detect_pos_simple(word: &str, context: &str) -> Result<PosLabel> {
    Ok(shared()?.detect_pos(word, context))
}

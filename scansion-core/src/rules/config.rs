//! Configuration structures and validation
//!
//! This module defines the TOML schema for stress rules.

use crate::error::{CoreError, Result};
use crate::normalize::normalize_word;
use crate::pos::render_pattern;
use crate::types::Stress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder replaced by the escaped headword in pattern templates
pub const WORD_PLACEHOLDER: &str = "{word}";

/// Word used to check that templates compile
const PROBE_WORD: &str = "probe";

/// Root stress rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressRulesConfig {
    pub metadata: Metadata,
    pub patterns: PatternFamilies,
    #[serde(default)]
    pub overrides: BTreeMap<String, OverrideEntry>,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Ordered POS pattern families
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternFamilies {
    #[serde(default)]
    pub verb: Vec<PatternTemplate>,
    #[serde(default)]
    pub noun: Vec<PatternTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternTemplate {
    pub pattern: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Stress patterns for one headword by part of speech
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideEntry {
    #[serde(default)]
    pub noun: Option<Vec<u8>>,
    #[serde(default)]
    pub verb: Option<Vec<u8>>,
}

impl StressRulesConfig {
    /// Parse from TOML text without validating
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| CoreError::ConfigurationError(format!("Failed to parse rules: {e}")))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::ConfigurationError(
                "Rule set code must not be empty".to_string(),
            ));
        }

        if self.patterns.verb.is_empty() || self.patterns.noun.is_empty() {
            return Err(CoreError::ConfigurationError(
                "Both verb and noun pattern families need at least one pattern".to_string(),
            ));
        }

        for template in self.patterns.verb.iter().chain(&self.patterns.noun) {
            if !template.pattern.contains(WORD_PLACEHOLDER) {
                return Err(CoreError::ConfigurationError(format!(
                    "Pattern '{}' has no {WORD_PLACEHOLDER} placeholder",
                    template.pattern
                )));
            }
            let rendered = render_pattern(&template.pattern, PROBE_WORD);
            Regex::new(&rendered).map_err(|source| CoreError::InvalidPattern {
                pattern: rendered.clone(),
                source,
            })?;
        }

        for (word, entry) in &self.overrides {
            if word.is_empty() || normalize_word(word) != *word {
                return Err(CoreError::ConfigurationError(format!(
                    "Override key '{word}' is not a normalized word"
                )));
            }
            if entry.noun.is_none() && entry.verb.is_none() {
                return Err(CoreError::ConfigurationError(format!(
                    "Override '{word}' defines neither a noun nor a verb pattern"
                )));
            }
            for digits in entry.noun.iter().chain(entry.verb.iter()) {
                if let Some(&bad) = digits.iter().find(|&&d| Stress::from_digit(d).is_none()) {
                    return Err(CoreError::InvalidStressDigit(bad));
                }
            }
        }

        Ok(())
    }
}

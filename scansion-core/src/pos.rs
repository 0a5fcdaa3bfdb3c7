//! Shallow part-of-speech detection from surrounding text
//!
//! Each rule is a regex template with a `{word}` hole and the label it
//! votes for. Templates are kept in evaluation order: the whole verb
//! family precedes the whole noun family, and the first pattern that
//! matches the lowercased context decides. No match means
//! [`PosLabel::Unknown`].

use crate::error::{CoreError, Result};
use crate::rules::config::{PatternFamilies, WORD_PLACEHOLDER};
use crate::types::PosLabel;
use regex::Regex;

/// Substitute the escaped word into a pattern template
pub(crate) fn render_pattern(template: &str, word: &str) -> String {
    template.replace(WORD_PLACEHOLDER, &regex::escape(word))
}

#[derive(Debug, Clone)]
struct Rule {
    template: String,
    label: PosLabel,
}

/// Ordered pattern templates for noun/verb detection
#[derive(Debug, Clone)]
pub struct PosDisambiguator {
    rules: Vec<Rule>,
}

impl PosDisambiguator {
    /// Build from configured families, verb family first
    pub fn from_families(families: &PatternFamilies) -> Self {
        let verb = families.verb.iter().map(|t| Rule {
            template: t.pattern.clone(),
            label: PosLabel::Verb,
        });
        let noun = families.noun.iter().map(|t| Rule {
            template: t.pattern.clone(),
            label: PosLabel::Noun,
        });
        Self {
            rules: verb.chain(noun).collect(),
        }
    }

    /// Number of rules across both families
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Labels in evaluation order
    pub fn labels(&self) -> impl Iterator<Item = PosLabel> + '_ {
        self.rules.iter().map(|r| r.label)
    }

    /// Compile every template for one word
    pub fn matcher_for(&self, word: &str) -> Result<WordMatcher> {
        let word = word.to_lowercase();
        let patterns = self
            .rules
            .iter()
            .map(|rule| {
                let rendered = render_pattern(&rule.template, &word);
                Regex::new(&rendered)
                    .map(|regex| (regex, rule.label))
                    .map_err(|source| CoreError::InvalidPattern {
                        pattern: rendered,
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WordMatcher { word, patterns })
    }

    /// Classify `word` in `context`
    ///
    /// An empty context is `Unknown` without any matching.
    pub fn detect(&self, word: &str, context: &str) -> PosLabel {
        if context.trim().is_empty() {
            return PosLabel::Unknown;
        }
        match self.matcher_for(word) {
            Ok(matcher) => matcher.classify(&context.to_lowercase()),
            Err(e) => {
                log::warn!("POS detection skipped for '{word}': {e}");
                PosLabel::Unknown
            }
        }
    }
}

/// Rules compiled for a single lowercased word
#[derive(Debug, Clone)]
pub struct WordMatcher {
    word: String,
    patterns: Vec<(Regex, PosLabel)>,
}

impl WordMatcher {
    /// The word the patterns were compiled for
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Label of the first pattern matching an already-lowercased context
    pub fn classify(&self, context: &str) -> PosLabel {
        for (regex, label) in &self.patterns {
            if regex.is_match(context) {
                log::trace!("'{}' is a {label}: matched {}", self.word, regex.as_str());
                return *label;
            }
        }
        PosLabel::Unknown
    }

    /// Lowercase `context` and classify; empty context is `Unknown`
    pub fn detect(&self, context: &str) -> PosLabel {
        if context.trim().is_empty() {
            return PosLabel::Unknown;
        }
        self.classify(&context.to_lowercase())
    }
}

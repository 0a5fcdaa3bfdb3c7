//! Noun/verb stress overrides for heteronyms
//!
//! Words like "record" or "present" move their stress depending on how
//! they are used, so the first dictionary pronunciation is not reliable
//! for them. The table is built once from configuration and never
//! mutated afterwards.

use super::config::OverrideEntry;
use crate::error::Result;
use crate::normalize::normalize_word;
use crate::types::{PosLabel, StressPattern};
use std::collections::{BTreeMap, HashMap};

/// Stress patterns of one headword by part of speech
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosOverride {
    noun: Option<StressPattern>,
    verb: Option<StressPattern>,
}

impl PosOverride {
    /// Create an override record
    pub fn new(noun: Option<StressPattern>, verb: Option<StressPattern>) -> Self {
        Self { noun, verb }
    }

    /// Pattern registered for `label`; `Unknown` never has one
    pub fn pattern_for(&self, label: PosLabel) -> Option<&StressPattern> {
        match label {
            PosLabel::Noun => self.noun.as_ref(),
            PosLabel::Verb => self.verb.as_ref(),
            PosLabel::Unknown => None,
        }
    }
}

/// Read-only map from normalized headword to its override record
#[derive(Debug, Clone, Default)]
pub struct PosOverrideTable {
    entries: HashMap<String, PosOverride>,
}

impl PosOverrideTable {
    /// Build from configuration entries
    pub fn from_entries(entries: &BTreeMap<String, OverrideEntry>) -> Result<Self> {
        let mut table = HashMap::with_capacity(entries.len());
        for (word, entry) in entries {
            let noun = entry
                .noun
                .as_deref()
                .map(StressPattern::from_digits)
                .transpose()?;
            let verb = entry
                .verb
                .as_deref()
                .map(StressPattern::from_digits)
                .transpose()?;
            table.insert(normalize_word(word), PosOverride::new(noun, verb));
        }
        Ok(Self { entries: table })
    }

    /// Override record for `word`, after normalization
    pub fn get(&self, word: &str) -> Option<&PosOverride> {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&normalize_word(word)))
    }

    /// Pattern registered for `word` under `label`
    pub fn pattern_for(&self, word: &str, label: PosLabel) -> Option<&StressPattern> {
        self.get(word)?.pattern_for(label)
    }

    /// Whether `word` has an override record
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Registered headwords, in no particular order
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered headwords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

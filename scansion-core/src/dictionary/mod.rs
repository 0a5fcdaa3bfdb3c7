//! Pronouncing dictionary capability
//!
//! The resolver only needs two things from a dictionary: the ordered
//! pronunciations of a normalized word, and the stress digits of one
//! pronunciation. Anything that can answer those can stand in for
//! [`CmuDict`], which is how tests inject fixed vocabularies.

mod cmudict;

pub use cmudict::CmuDict;

use crate::normalize::normalize_word;
use crate::types::{Stress, StressPattern};

/// Source of pronunciations for normalized words
pub trait PronouncingDictionary: Send + Sync {
    /// Pronunciations of `word`, best candidate first; empty when unknown
    fn phones_for_word(&self, word: &str) -> Vec<String>;

    /// Stress digits of an ARPAbet phone string, e.g. `"01"` for `HH AH0 L OW1`
    fn stresses(&self, phones: &str) -> String {
        stress_digits(phones)
    }
}

/// Collect the stress digit carried by each vowel phone
pub fn stress_digits(phones: &str) -> String {
    phones
        .split_whitespace()
        .filter_map(|phone| phone.chars().last())
        .filter(|ch| ch.is_ascii_digit())
        .collect()
}

/// Look up the stress pattern of the first pronunciation of `word`
///
/// Returns `None` when the dictionary has no entry for the normalized word.
pub fn lookup_stress(dictionary: &dyn PronouncingDictionary, word: &str) -> Option<StressPattern> {
    let normalized = normalize_word(word);
    let candidates = dictionary.phones_for_word(&normalized);
    let first = candidates.first()?;

    let digits = dictionary.stresses(first);
    let pattern: StressPattern = digits.chars().filter_map(Stress::from_char).collect();
    if pattern.len() != digits.chars().count() {
        log::warn!("Ignoring out-of-range stress digits in '{first}' for '{normalized}'");
    }
    Some(pattern)
}

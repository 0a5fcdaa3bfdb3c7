//! Word and line stress resolution
//!
//! For a heteronym registered in the override table, an explicit POS hint
//! wins, then a confident context signal; anything else falls through to
//! the first dictionary pronunciation. Words outside the table go straight
//! to the dictionary.

use crate::dictionary::{lookup_stress, CmuDict, PronouncingDictionary};
use crate::error::Result;
use crate::normalize::{normalize_word, tokenize_line};
use crate::pos::WordMatcher;
use crate::rules::StressRules;
use crate::types::{PosLabel, StressPattern, WordStress};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves stress patterns for words and lines
///
/// Immutable after construction and safe to share between threads.
pub struct StressResolver {
    dictionary: Arc<dyn PronouncingDictionary>,
    rules: Arc<StressRules>,
    /// Precompiled POS matchers for every override headword
    matchers: HashMap<String, WordMatcher>,
}

impl std::fmt::Debug for StressResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StressResolver")
            .field("dictionary", &"<dyn PronouncingDictionary>")
            .field("rules", &self.rules.code())
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl StressResolver {
    /// Create a resolver over a dictionary and a rule set
    pub fn new(dictionary: Arc<dyn PronouncingDictionary>, rules: Arc<StressRules>) -> Result<Self> {
        let matchers = rules
            .overrides()
            .headwords()
            .map(|word| {
                let matcher = rules.disambiguator().matcher_for(word)?;
                Ok((word.to_string(), matcher))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Self {
            dictionary,
            rules,
            matchers,
        })
    }

    /// Resolver over the embedded dictionary and English rules
    pub fn english() -> Result<Self> {
        Self::new(CmuDict::embedded()?, StressRules::english()?)
    }

    /// The rule set in use
    pub fn rules(&self) -> &StressRules {
        &self.rules
    }

    /// The dictionary in use
    pub fn dictionary(&self) -> &dyn PronouncingDictionary {
        self.dictionary.as_ref()
    }

    /// Stress of the first dictionary pronunciation, ignoring overrides
    pub fn lookup_stress(&self, word: &str) -> Option<StressPattern> {
        lookup_stress(self.dictionary.as_ref(), word)
    }

    /// Noun/verb classification of `word` in `context`
    ///
    /// An empty context is always `Unknown`.
    pub fn detect_pos(&self, word: &str, context: &str) -> PosLabel {
        match self.matchers.get(&word.to_lowercase()) {
            Some(matcher) => matcher.detect(context),
            None => self.rules.disambiguator().detect(word, context),
        }
    }

    /// Stress pattern of `word`, or `None` when it cannot be resolved
    ///
    /// `context` may be empty. A `pos_hint` only takes effect when the
    /// override table has a pattern for that exact label.
    pub fn resolve_word(
        &self,
        word: &str,
        context: &str,
        pos_hint: Option<PosLabel>,
    ) -> Option<StressPattern> {
        let normalized = normalize_word(word);

        if let Some(record) = self.rules.overrides().get(&normalized) {
            if let Some(hint) = pos_hint {
                if let Some(pattern) = record.pattern_for(hint) {
                    log::debug!("'{normalized}': using {hint} override from hint");
                    return Some(pattern.clone());
                }
            }

            let label = self.detect_pos(&normalized, context);
            if let Some(pattern) = record.pattern_for(label) {
                log::debug!("'{normalized}': using {label} override from context");
                return Some(pattern.clone());
            }

            log::debug!("'{normalized}': no POS signal, falling back to dictionary");
        }

        let resolved = self.lookup_stress(&normalized);
        if resolved.is_none() {
            log::debug!("'{normalized}': not in dictionary");
        }
        resolved
    }

    /// Stress of every whitespace-delimited token of `line`
    ///
    /// The whole line is the context for each token. Unresolvable tokens
    /// become [`WordStress::unresolved`] entries, so the output always has
    /// one entry per token, in order.
    pub fn resolve_line(&self, line: &str) -> Vec<WordStress> {
        tokenize_line(line)
            .map(|token| match self.resolve_word(token, line, None) {
                Some(stress) => WordStress::new(token, stress),
                None => WordStress::unresolved(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUB_DICT: &str = "\
RECORD  R EH1 K ER0 D
RECORD(2)  R IH0 K AO1 R D
HELLO  HH AH0 L OW1
THE  DH AH0
SHOWS  SH OW1 Z
HMM  HH M
";

    fn stub_resolver() -> StressResolver {
        let dict = CmuDict::parse(STUB_DICT).unwrap();
        StressResolver::new(Arc::new(dict), StressRules::english().unwrap()).unwrap()
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StressResolver>();
    }

    #[test]
    fn test_matchers_built_for_every_headword() {
        let resolver = stub_resolver();
        assert_eq!(resolver.matchers.len(), resolver.rules().overrides().len());
    }

    #[test]
    fn test_hint_bypasses_context() {
        let resolver = stub_resolver();
        // Context says verb, hint says noun
        let pattern = resolver
            .resolve_word("record", "I will record it", Some(PosLabel::Noun))
            .unwrap();
        assert_eq!(pattern.digits(), vec![0, 1]);
    }

    #[test]
    fn test_unknown_hint_uses_context() {
        let resolver = stub_resolver();
        let pattern = resolver
            .resolve_word("record", "the record shows", Some(PosLabel::Unknown))
            .unwrap();
        assert_eq!(pattern.digits(), vec![0, 1]);
    }

    #[test]
    fn test_override_word_without_signal_uses_dictionary() {
        let resolver = stub_resolver();
        assert_eq!(
            resolver.resolve_word("record", "", None).unwrap().digits(),
            vec![1, 0]
        );
        assert_eq!(
            resolver
                .resolve_word("record", "record something", None)
                .unwrap()
                .digits(),
            vec![1, 0]
        );
    }

    #[test]
    fn test_override_word_missing_from_dictionary() {
        let resolver = stub_resolver();
        // "desert" has overrides but the stub dictionary does not know it
        assert_eq!(resolver.resolve_word("desert", "", None), None);
        assert_eq!(
            resolver
                .resolve_word("desert", "the desert is vast", None)
                .unwrap()
                .digits(),
            vec![1, 0]
        );
    }

    #[test]
    fn test_empty_pattern_is_not_a_miss() {
        let resolver = stub_resolver();
        let pattern = resolver.resolve_word("hmm", "", None).unwrap();
        assert!(pattern.is_empty());

        let line = resolver.resolve_line("hmm");
        assert_eq!(line[0].word, "hmm");
        assert!(!line[0].is_unresolved());
    }

    #[test]
    fn test_line_uses_whole_line_as_context() {
        let resolver = stub_resolver();
        let entries = resolver.resolve_line("The record shows");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].word, "The");
        assert_eq!(entries[1].word, "record");
        assert_eq!(entries[1].stress.digits(), vec![0, 1]);
        assert_eq!(entries[2].stress.digits(), vec![1]);
    }

    #[test]
    fn test_line_keeps_original_token_text() {
        let resolver = stub_resolver();
        let entries = resolver.resolve_line("HELLO, asdf!");
        assert_eq!(entries[0].word, "HELLO,");
        assert_eq!(entries[0].stress.digits(), vec![0, 1]);
        assert!(entries[1].is_unresolved());
        assert_eq!(entries[1].word, "none");
    }

    #[test]
    fn test_empty_line() {
        let resolver = stub_resolver();
        assert!(resolver.resolve_line("").is_empty());
        assert!(resolver.resolve_line(" \t ").is_empty());
    }

    #[test]
    fn test_detect_pos_for_unregistered_word() {
        let resolver = stub_resolver();
        assert_eq!(resolver.detect_pos("hello", "the hello"), PosLabel::Noun);
        assert_eq!(resolver.detect_pos("hello", ""), PosLabel::Unknown);
    }

    #[test]
    fn test_detect_pos_blank_context_for_headword() {
        let resolver = stub_resolver();
        assert_eq!(resolver.detect_pos("record", ""), PosLabel::Unknown);
        assert_eq!(resolver.detect_pos("RECORD", " \t "), PosLabel::Unknown);
    }

    #[test]
    fn test_dictionary_accessor_is_the_injected_one() {
        let resolver = stub_resolver();
        assert_eq!(
            resolver.dictionary().phones_for_word("hmm"),
            vec!["HH M".to_string()]
        );
        assert!(resolver.dictionary().phones_for_word("world").is_empty());
    }
}

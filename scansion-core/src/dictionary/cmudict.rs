use super::PronouncingDictionary;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::io::BufRead;
use std::sync::{Arc, OnceLock};

/// The full CMU Pronouncing Dictionary, compiled into the binary
///
/// See `configs/dictionary/LICENSE-CMUDICT` for its license.
const EMBEDDED_DICT: &str = include_str!("../../configs/dictionary/cmudict.dict");

static EMBEDDED: OnceLock<Arc<CmuDict>> = OnceLock::new();

/// In-memory dictionary in CMUdict format
///
/// Each line is `WORD  PH1 PH2 ...`, alternates are written `WORD(2)`,
/// lines starting with `;;;` are comments, and anything after `#` on an
/// entry line is a trailing comment. Headwords are stored lowercase.
///
/// Pronunciations of a word are ordered by variant number (`WORD` is 1),
/// ties keeping file order, so the first candidate does not depend on
/// where in the file an alternate happens to appear.
#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared dictionary built from the embedded CMUdict
    pub fn embedded() -> Result<Arc<CmuDict>> {
        if let Some(dict) = EMBEDDED.get() {
            return Ok(Arc::clone(dict));
        }
        let dict = Self::parse(EMBEDDED_DICT)?;
        log::debug!("Loaded embedded pronouncing dictionary ({} words)", dict.len());
        Ok(Arc::clone(EMBEDDED.get_or_init(|| Arc::new(dict))))
    }

    /// Parse dictionary text
    pub fn parse(text: &str) -> Result<Self> {
        let mut builder = Builder::default();
        for (idx, line) in text.lines().enumerate() {
            builder.push_line(idx + 1, line)?;
        }
        Ok(builder.finish())
    }

    /// Parse dictionary text from a reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut builder = Builder::default();
        for (idx, line) in reader.lines().enumerate() {
            builder.push_line(idx + 1, &line?)?;
        }
        Ok(builder.finish())
    }

    /// Append a pronunciation for `word` after any existing ones
    pub fn insert(&mut self, word: &str, phones: &str) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phones.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    /// Whether `word` has at least one pronunciation
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Number of distinct headwords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no headwords
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronouncingDictionary for CmuDict {
    fn phones_for_word(&self, word: &str) -> Vec<String> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// Accumulates entries with their variant numbers until parsing is done
#[derive(Default)]
struct Builder {
    entries: HashMap<String, Vec<(u32, String)>>,
}

impl Builder {
    fn push_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = line.trim();
        if line.starts_with(";;;") {
            return Ok(());
        }
        // e.g. `hiv EY1 CH AY1 V IY1 # abbrev`
        let line = line.split_once('#').map_or(line, |(entry, _)| entry).trim_end();
        if line.is_empty() {
            return Ok(());
        }

        let (headword, phones) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) if !rest.trim().is_empty() => (head, rest),
            _ => {
                return Err(CoreError::DictionaryParse {
                    line: line_no,
                    reason: format!("no phones for '{line}'"),
                })
            }
        };

        let (word, variant) = split_variant(headword).ok_or_else(|| CoreError::DictionaryParse {
            line: line_no,
            reason: format!("malformed headword '{headword}'"),
        })?;

        let phones = phones.split_whitespace().collect::<Vec<_>>().join(" ");
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push((variant, phones));
        Ok(())
    }

    fn finish(self) -> CmuDict {
        let entries = self
            .entries
            .into_iter()
            .map(|(word, mut variants)| {
                // Stable sort keeps file order for equal variant numbers
                variants.sort_by_key(|(variant, _)| *variant);
                (word, variants.into_iter().map(|(_, p)| p).collect())
            })
            .collect();
        CmuDict { entries }
    }
}

/// Split `WORD(2)` into `("WORD", 2)`; a bare headword is variant 1
fn split_variant(headword: &str) -> Option<(&str, u32)> {
    match headword.strip_suffix(')') {
        Some(rest) => {
            let (word, number) = rest.rsplit_once('(')?;
            if word.is_empty() {
                return None;
            }
            Some((word, number.parse().ok()?))
        }
        None => Some((headword, 1)),
    }
}

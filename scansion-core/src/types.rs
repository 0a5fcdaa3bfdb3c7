//! Value types shared across the crate

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word text emitted for tokens that could not be resolved
pub const UNRESOLVED_WORD: &str = "none";

/// Stress marker of a single syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stress {
    /// No stress (0)
    Unstressed,
    /// Primary stress (1)
    Primary,
    /// Secondary stress (2)
    Secondary,
}

impl Stress {
    /// Convert a numeric marker
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Stress::Unstressed),
            1 => Some(Stress::Primary),
            2 => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// Convert an ASCII digit character
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// Numeric marker
    #[inline]
    pub fn as_digit(self) -> u8 {
        match self {
            Stress::Unstressed => 0,
            Stress::Primary => 1,
            Stress::Secondary => 2,
        }
    }
}

/// Per-syllable stress markers of one word, left to right
///
/// An empty pattern is a valid value and is distinct from "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct StressPattern(Vec<Stress>);

impl StressPattern {
    /// The empty pattern
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build from numeric markers, rejecting anything outside 0..=2
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        digits
            .iter()
            .map(|&d| Stress::from_digit(d).ok_or(CoreError::InvalidStressDigit(d)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Numeric markers
    pub fn digits(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.as_digit()).collect()
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pattern has no syllables
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the markers
    pub fn iter(&self) -> impl Iterator<Item = &Stress> {
        self.0.iter()
    }

    /// Markers as a slice
    pub fn as_slice(&self) -> &[Stress] {
        &self.0
    }
}

impl FromIterator<Stress> for StressPattern {
    fn from_iter<I: IntoIterator<Item = Stress>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Vec<u8>> for StressPattern {
    type Error = CoreError;

    fn try_from(digits: Vec<u8>) -> Result<Self> {
        Self::from_digits(&digits)
    }
}

impl From<StressPattern> for Vec<u8> {
    fn from(pattern: StressPattern) -> Self {
        pattern.digits()
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, stress) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", stress.as_digit())?;
        }
        write!(f, "]")
    }
}

/// Coarse part of speech used to pick between override patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosLabel {
    /// Used as a noun
    Noun,
    /// Used as a verb
    Verb,
    /// No confident signal
    Unknown,
}

impl PosLabel {
    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            PosLabel::Noun => "noun",
            PosLabel::Verb => "verb",
            PosLabel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PosLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "noun" => Ok(PosLabel::Noun),
            "verb" => Ok(PosLabel::Verb),
            "unknown" => Ok(PosLabel::Unknown),
            other => Err(CoreError::ConfigurationError(format!(
                "Unknown POS label: {other}"
            ))),
        }
    }
}

/// Stress of one token of a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStress {
    /// Original token text, or [`UNRESOLVED_WORD`] when lookup failed
    pub word: String,
    /// Resolved pattern; empty for unresolved tokens
    pub stress: StressPattern,
}

impl WordStress {
    /// Entry for a resolved token
    pub fn new(word: impl Into<String>, stress: StressPattern) -> Self {
        Self {
            word: word.into(),
            stress,
        }
    }

    /// Sentinel entry for a token that could not be resolved
    pub fn unresolved() -> Self {
        Self {
            word: UNRESOLVED_WORD.to_string(),
            stress: StressPattern::empty(),
        }
    }

    /// Whether this is the sentinel entry
    pub fn is_unresolved(&self) -> bool {
        self.word == UNRESOLVED_WORD && self.stress.is_empty()
    }
}

//! Data Transfer Objects for API

use scansion_core::WordStress;

/// Stress of one token (FFI-safe DTO)
///
/// Unresolvable tokens carry the word `"none"` and an empty stress list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordStressDTO {
    /// Original token text, or `"none"` when unresolved
    pub word: String,
    /// Stress digits, one per syllable
    pub stress: Vec<u8>,
}

impl WordStressDTO {
    /// Create a new word stress DTO
    pub fn new(word: impl Into<String>, stress: Vec<u8>) -> Self {
        Self {
            word: word.into(),
            stress,
        }
    }
}

impl From<&WordStress> for WordStressDTO {
    fn from(entry: &WordStress) -> Self {
        Self::new(entry.word.clone(), entry.stress.digits())
    }
}

impl From<WordStress> for WordStressDTO {
    fn from(entry: WordStress) -> Self {
        let stress = entry.stress.digits();
        Self::new(entry.word, stress)
    }
}

/// Per-line result with resolution counts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineReport {
    /// The analyzed line
    pub line: String,
    /// One entry per whitespace-delimited token, in order
    pub words: Vec<WordStressDTO>,
    /// Tokens with a stress pattern
    pub resolved: usize,
    /// Tokens replaced by the sentinel entry
    pub unresolved: usize,
}

impl LineReport {
    /// Build a report from resolved entries
    pub fn new(line: impl Into<String>, entries: &[WordStress]) -> Self {
        let unresolved = entries.iter().filter(|e| e.is_unresolved()).count();
        Self {
            line: line.into(),
            words: entries.iter().map(WordStressDTO::from).collect(),
            resolved: entries.len() - unresolved,
            unresolved,
        }
    }

    /// Total number of tokens
    pub fn token_count(&self) -> usize {
        self.words.len()
    }

    /// Render as a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

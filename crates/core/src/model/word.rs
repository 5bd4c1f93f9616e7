use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::tier::DifficultyTier;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("source text cannot be empty")]
    EmptySource,

    #[error("target text cannot be empty")]
    EmptyTarget,
}

/// A single English/Turkish vocabulary pair.
///
/// Words are immutable values owned by the catalog; sessions hold clones and
/// compare them by `(source_text, target_text, tier)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WordRecord")]
pub struct Word {
    source_text: String,
    target_text: String,
    tier: DifficultyTier,
}

#[derive(Deserialize)]
struct WordRecord {
    source_text: String,
    target_text: String,
    tier: DifficultyTier,
}

impl TryFrom<WordRecord> for Word {
    type Error = WordError;

    fn try_from(record: WordRecord) -> Result<Self, Self::Error> {
        Word::new(record.source_text, record.target_text, record.tier)
    }
}

impl Word {
    /// Creates a new word pair.
    ///
    /// # Errors
    ///
    /// Returns `WordError` if either side is blank.
    pub fn new(
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        tier: DifficultyTier,
    ) -> Result<Self, WordError> {
        let source_text = source_text.into();
        let target_text = target_text.into();
        if source_text.trim().is_empty() {
            return Err(WordError::EmptySource);
        }
        if target_text.trim().is_empty() {
            return Err(WordError::EmptyTarget);
        }
        Ok(Self {
            source_text,
            target_text,
            tier,
        })
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_sides() {
        assert_eq!(
            Word::new("  ", "Merhaba", DifficultyTier::Beginner),
            Err(WordError::EmptySource)
        );
        assert_eq!(
            Word::new("Hello", "", DifficultyTier::Beginner),
            Err(WordError::EmptyTarget)
        );
    }

    #[test]
    fn equality_includes_tier() {
        let a = Word::new("Light", "Işık", DifficultyTier::Beginner).unwrap();
        let b = Word::new("Light", "Işık", DifficultyTier::Intermediate).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"source_text":"Red","target_text":"Kırmızı","tier":"BEGINNER"}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.target_text(), "Kırmızı");

        let blank = r#"{"source_text":"","target_text":"Kırmızı","tier":"BEGINNER"}"#;
        assert!(serde_json::from_str::<Word>(blank).is_err());
    }
}

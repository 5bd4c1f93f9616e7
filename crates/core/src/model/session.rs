use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::SectionId;
use crate::model::word::Word;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("word appears as both correct and incorrect: {0}")]
    OverlappingOutcome(String),
}

/// Result screen data for a finished review pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    section_id: SectionId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    correct_words: Vec<Word>,
    incorrect_words: Vec<Word>,
}

impl SessionSummary {
    /// Build a summary from the words answered in a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::OverlappingOutcome` if a word is in both lists.
    pub fn new(
        section_id: SectionId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: u32,
        mut correct_words: Vec<Word>,
        mut incorrect_words: Vec<Word>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if let Some(dup) = correct_words.iter().find(|w| incorrect_words.contains(w)) {
            return Err(SessionSummaryError::OverlappingOutcome(
                dup.source_text().to_string(),
            ));
        }

        // Sets come in hash order; keep the result screen stable.
        correct_words.sort_by(|a, b| a.source_text().cmp(b.source_text()));
        incorrect_words.sort_by(|a, b| a.source_text().cmp(b.source_text()));

        Ok(Self {
            section_id,
            started_at,
            completed_at,
            score,
            correct_words,
            incorrect_words,
        })
    }

    #[must_use]
    pub fn section_id(&self) -> &SectionId {
        &self.section_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_words(&self) -> &[Word] {
        &self.correct_words
    }

    #[must_use]
    pub fn incorrect_words(&self) -> &[Word] {
        &self.incorrect_words
    }

    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.correct_words.len() + self.incorrect_words.len()
    }

    /// Share of answered words that were correct, zero if none were answered.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        let total = self.total_attempts();
        if total == 0 {
            0.0
        } else {
            self.correct_words.len() as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DifficultyTier;
    use crate::time::fixed_now;

    fn word(source: &str) -> Word {
        Word::new(source, format!("{source}-tr"), DifficultyTier::Beginner).unwrap()
    }

    #[test]
    fn summary_sorts_and_counts() {
        let now = fixed_now();
        let summary = SessionSummary::new(
            SectionId::new("colors").unwrap(),
            now,
            now,
            20,
            vec![word("Red"), word("Blue")],
            vec![word("Green")],
        )
        .unwrap();

        assert_eq!(summary.total_attempts(), 3);
        assert_eq!(summary.correct_words()[0].source_text(), "Blue");
        assert!((summary.accuracy() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_backwards_time_range() {
        let now = fixed_now();
        let err = SessionSummary::new(
            SectionId::new("colors").unwrap(),
            now,
            now - chrono::Duration::seconds(1),
            0,
            Vec::new(),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, SessionSummaryError::InvalidTimeRange);
    }

    #[test]
    fn rejects_word_in_both_lists() {
        let now = fixed_now();
        let err = SessionSummary::new(
            SectionId::new("colors").unwrap(),
            now,
            now,
            10,
            vec![word("Red")],
            vec![word("Red")],
        )
        .unwrap_err();
        assert!(matches!(err, SessionSummaryError::OverlappingOutcome(_)));
    }
}

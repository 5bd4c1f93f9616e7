use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use lingua_core::model::Word;

/// Draws the next batch of cards from a section.
///
/// The same rule serves the first batch and every refill: shuffle the words
/// that are still eligible and keep at most `batch_size` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlanner {
    batch_size: usize,
}

impl BatchPlanner {
    #[must_use]
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Pick the next batch, skipping every word in `exclude`.
    ///
    /// Returns an empty batch once nothing eligible is left.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        words: &[Word],
        exclude: &HashSet<Word>,
        rng: &mut R,
    ) -> Vec<Word> {
        let mut seen = HashSet::new();
        let mut candidates: Vec<Word> = words
            .iter()
            .filter(|w| !exclude.contains(*w) && seen.insert(*w))
            .cloned()
            .collect();

        candidates.as_mut_slice().shuffle(rng);
        candidates.truncate(self.batch_size);
        candidates
    }
}

impl Default for BatchPlanner {
    fn default() -> Self {
        Self::new(10)
    }
}

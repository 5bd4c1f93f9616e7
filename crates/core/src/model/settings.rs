use thiserror::Error;

use crate::model::progress::UNLOCK_THRESHOLD;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionConfigError {
    #[error("batch size must be > 0")]
    InvalidBatchSize,

    #[error("points per correct answer must be > 0")]
    InvalidPointsPerCorrect,

    #[error("unlock threshold must be in (0, 1], got {0}")]
    InvalidUnlockThreshold(f64),
}

/// Tunables for a review session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    batch_size: usize,
    points_per_correct: u32,
    unlock_threshold: f64,
}

impl Default for SessionConfig {
    /// Ten cards per batch, ten points per correct answer, 70% to unlock.
    fn default() -> Self {
        Self {
            batch_size: 10,
            points_per_correct: 10,
            unlock_threshold: UNLOCK_THRESHOLD,
        }
    }
}

impl SessionConfig {
    /// Creates custom session settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionConfigError` if the batch size or points are zero, or the
    /// threshold is outside `(0, 1]`.
    pub fn new(
        batch_size: usize,
        points_per_correct: u32,
        unlock_threshold: f64,
    ) -> Result<Self, SessionConfigError> {
        if batch_size == 0 {
            return Err(SessionConfigError::InvalidBatchSize);
        }
        if points_per_correct == 0 {
            return Err(SessionConfigError::InvalidPointsPerCorrect);
        }
        if !unlock_threshold.is_finite() || unlock_threshold <= 0.0 || unlock_threshold > 1.0 {
            return Err(SessionConfigError::InvalidUnlockThreshold(unlock_threshold));
        }
        Ok(Self {
            batch_size,
            points_per_correct,
            unlock_threshold,
        })
    }

    /// Returns a copy with a different batch size.
    ///
    /// # Errors
    ///
    /// Returns `SessionConfigError::InvalidBatchSize` for zero.
    pub fn with_batch_size(self, batch_size: usize) -> Result<Self, SessionConfigError> {
        Self::new(batch_size, self.points_per_correct, self.unlock_threshold)
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn points_per_correct(&self) -> u32 {
        self.points_per_correct
    }

    #[must_use]
    pub fn unlock_threshold(&self) -> f64 {
        self.unlock_threshold
    }
}

//! Section and tier completion, plus unlock rules.
//!
//! Nothing is cached here: every read goes to the repository, so a view is
//! always rebuilt from the last persisted values.

use std::collections::HashSet;
use std::sync::Arc;

use lingua_core::catalog::Catalog;
use lingua_core::model::{
    DifficultyTier, LockStatus, Progress, Section, SectionId, SectionView, UNLOCK_THRESHOLD, Word,
};
use storage::repository::ProgressRepository;

use crate::error::ProgressError;

#[derive(Clone)]
pub struct ProgressAggregator {
    catalog: Arc<dyn Catalog>,
    repo: Arc<dyn ProgressRepository>,
    unlock_threshold: f64,
}

impl ProgressAggregator {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            catalog,
            repo,
            unlock_threshold: UNLOCK_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_unlock_threshold(mut self, threshold: f64) -> Self {
        self.unlock_threshold = threshold;
        self
    }

    /// Share of the section's words found in `correct`.
    #[must_use]
    pub fn section_progress(section: &Section, correct: &HashSet<Word>) -> Progress {
        let hits = section
            .words()
            .iter()
            .filter(|w| correct.contains(*w))
            .count();
        Progress::ratio(hits, section.words().len())
    }

    /// Compute and persist the progress of `section`.
    ///
    /// The stored value is overwritten, so it can go down after a rewind.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the write fails.
    pub async fn recompute_section_progress(
        &self,
        section: &Section,
        correct: &HashSet<Word>,
    ) -> Result<Progress, ProgressError> {
        let progress = Self::section_progress(section, correct);
        self.repo.set_section_progress(section.id(), progress).await?;
        Ok(progress)
    }

    /// Average the persisted progress of every section in `tier` and store it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` on read or write failures.
    pub async fn recompute_difficulty_progress(
        &self,
        tier: DifficultyTier,
    ) -> Result<Progress, ProgressError> {
        let sections = self.catalog.sections_for_tier(tier);
        let mut values = Vec::with_capacity(sections.len());
        for section in &sections {
            values.push(self.repo.get_section_progress(section.id()).await?);
        }

        let progress = Progress::mean(&values);
        self.repo.set_tier_progress(tier, progress).await?;
        Ok(progress)
    }

    /// Whether `section` can be played.
    ///
    /// The first section of a tier is always open. Any other section opens
    /// once the previous one reaches the unlock threshold, and stays open
    /// after that even if the previous section's progress drops again.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` on read or write failures.
    pub async fn compute_lock_status(&self, section: &Section) -> Result<LockStatus, ProgressError> {
        if section.is_first_in_tier() {
            return Ok(LockStatus::Unlocked);
        }
        if self.repo.get_section_unlocked(section.id()).await? {
            return Ok(LockStatus::Unlocked);
        }
        let Some(previous) = self.catalog.previous_in_tier(section) else {
            return Ok(LockStatus::Locked);
        };

        let previous_progress = self.repo.get_section_progress(previous.id()).await?;
        if previous_progress.meets_threshold(self.unlock_threshold) {
            self.repo.set_section_unlocked(section.id(), true).await?;
            tracing::info!(section = %section.id(), "section unlocked");
            return Ok(LockStatus::Unlocked);
        }
        Ok(LockStatus::Locked)
    }

    /// Re-check the section after `section` so a threshold crossing is
    /// recorded as soon as progress is written.
    ///
    /// Returns `None` for the last section of a tier.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` on read or write failures.
    pub async fn refresh_following_lock(
        &self,
        section: &Section,
    ) -> Result<Option<LockStatus>, ProgressError> {
        let Some(next) = self.catalog.next_in_tier(section) else {
            return Ok(None);
        };
        Ok(Some(self.compute_lock_status(&next).await?))
    }

    /// Every section of `tier` with its current progress and lock state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` on read or write failures.
    pub async fn sections_for_tier(
        &self,
        tier: DifficultyTier,
    ) -> Result<Vec<SectionView>, ProgressError> {
        let sections = self.catalog.sections_for_tier(tier);
        let mut views = Vec::with_capacity(sections.len());
        for section in sections {
            let progress = self.repo.get_section_progress(section.id()).await?;
            let lock = self.compute_lock_status(&section).await?;
            views.push(SectionView {
                section,
                progress,
                lock,
            });
        }
        Ok(views)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read fails.
    pub async fn tier_progress(&self, tier: DifficultyTier) -> Result<Progress, ProgressError> {
        Ok(self.repo.get_tier_progress(tier).await?)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the read fails.
    pub async fn section_progress_of(&self, id: &SectionId) -> Result<Progress, ProgressError> {
        Ok(self.repo.get_section_progress(id).await?)
    }
}

use async_trait::async_trait;
use lingua_core::model::{DifficultyTier, Language, Progress, SectionId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key-value contract for completion ratios and unlock flags.
///
/// Missing keys read as their defaults (`0.0` / `false`), never as errors.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Completion ratio of a section, `0.0` if never recorded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_section_progress(&self, id: &SectionId) -> Result<Progress, StorageError>;

    /// Overwrite the completion ratio of a section.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_section_progress(
        &self,
        id: &SectionId,
        progress: Progress,
    ) -> Result<(), StorageError>;

    /// Average completion of a tier, `0.0` if never recorded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_tier_progress(&self, tier: DifficultyTier) -> Result<Progress, StorageError>;

    /// Overwrite the average completion of a tier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_tier_progress(
        &self,
        tier: DifficultyTier,
        progress: Progress,
    ) -> Result<(), StorageError>;

    /// Whether the section was ever unlocked, `false` if never recorded.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_section_unlocked(&self, id: &SectionId) -> Result<bool, StorageError>;

    /// Record the unlock flag of a section.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_section_unlocked(&self, id: &SectionId, unlocked: bool)
    -> Result<(), StorageError>;
}

/// App-wide preferences that live next to progress.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Saved interface language, if the user ever picked one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or holds an unknown code.
    async fn get_language(&self) -> Result<Option<Language>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_language(&self, language: Language) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn has_seen_onboarding(&self) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_has_seen_onboarding(&self, seen: bool) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    section_progress: Arc<Mutex<HashMap<SectionId, Progress>>>,
    tier_progress: Arc<Mutex<HashMap<DifficultyTier, Progress>>>,
    unlocked: Arc<Mutex<HashSet<SectionId>>>,
    language: Arc<Mutex<Option<Language>>>,
    onboarding_seen: Arc<Mutex<bool>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_section_progress(&self, id: &SectionId) -> Result<Progress, StorageError> {
        let guard = self.section_progress.lock().map_err(poisoned)?;
        Ok(guard.get(id).copied().unwrap_or_default())
    }

    async fn set_section_progress(
        &self,
        id: &SectionId,
        progress: Progress,
    ) -> Result<(), StorageError> {
        let mut guard = self.section_progress.lock().map_err(poisoned)?;
        guard.insert(id.clone(), progress);
        Ok(())
    }

    async fn get_tier_progress(&self, tier: DifficultyTier) -> Result<Progress, StorageError> {
        let guard = self.tier_progress.lock().map_err(poisoned)?;
        Ok(guard.get(&tier).copied().unwrap_or_default())
    }

    async fn set_tier_progress(
        &self,
        tier: DifficultyTier,
        progress: Progress,
    ) -> Result<(), StorageError> {
        let mut guard = self.tier_progress.lock().map_err(poisoned)?;
        guard.insert(tier, progress);
        Ok(())
    }

    async fn get_section_unlocked(&self, id: &SectionId) -> Result<bool, StorageError> {
        let guard = self.unlocked.lock().map_err(poisoned)?;
        Ok(guard.contains(id))
    }

    async fn set_section_unlocked(
        &self,
        id: &SectionId,
        unlocked: bool,
    ) -> Result<(), StorageError> {
        let mut guard = self.unlocked.lock().map_err(poisoned)?;
        if unlocked {
            guard.insert(id.clone());
        } else {
            guard.remove(id);
        }
        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        let guard = self.language.lock().map_err(poisoned)?;
        Ok(*guard)
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        let mut guard = self.language.lock().map_err(poisoned)?;
        *guard = Some(language);
        Ok(())
    }

    async fn has_seen_onboarding(&self) -> Result<bool, StorageError> {
        let guard = self.onboarding_seen.lock().map_err(poisoned)?;
        Ok(*guard)
    }

    async fn set_has_seen_onboarding(&self, seen: bool) -> Result<(), StorageError> {
        let mut guard = self.onboarding_seen.lock().map_err(poisoned)?;
        *guard = seen;
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Self {
            progress,
            preferences,
        }
    }
}

use std::sync::Arc;

use lingua_core::model::Language;
use storage::repository::PreferencesRepository;

use crate::error::PreferencesError;

/// Interface language and first-run state.
#[derive(Clone)]
pub struct PreferencesService {
    repo: Arc<dyn PreferencesRepository>,
    system_locale: String,
}

impl PreferencesService {
    /// `system_locale` is used when no language was ever saved (e.g. `tr_TR.UTF-8`).
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>, system_locale: impl Into<String>) -> Self {
        Self {
            repo,
            system_locale: system_locale.into(),
        }
    }

    /// Saved language, or the one derived from the system locale.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn language(&self) -> Result<Language, PreferencesError> {
        let saved = self.repo.get_language().await?;
        Ok(saved.unwrap_or_else(|| Language::from_system_locale(&self.system_locale)))
    }

    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn set_language(&self, language: Language) -> Result<(), PreferencesError> {
        self.repo.set_language(language).await?;
        tracing::info!(language = %language, "interface language changed");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn has_seen_onboarding(&self) -> Result<bool, PreferencesError> {
        Ok(self.repo.has_seen_onboarding().await?)
    }

    /// # Errors
    ///
    /// Returns `PreferencesError` on storage failures.
    pub async fn set_has_seen_onboarding(&self, seen: bool) -> Result<(), PreferencesError> {
        self.repo.set_has_seen_onboarding(seen).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn falls_back_to_system_locale() {
        let service = PreferencesService::new(Arc::new(InMemoryRepository::new()), "tr_TR.UTF-8");
        assert_eq!(service.language().await.unwrap(), Language::Tr);

        let service = PreferencesService::new(Arc::new(InMemoryRepository::new()), "de_DE");
        assert_eq!(service.language().await.unwrap(), Language::En);
    }

    #[tokio::test]
    async fn saved_language_overrides_locale() {
        let service = PreferencesService::new(Arc::new(InMemoryRepository::new()), "tr");
        service.set_language(Language::En).await.unwrap();
        assert_eq!(service.language().await.unwrap(), Language::En);
    }

    #[tokio::test]
    async fn onboarding_flag_round_trips() {
        let service = PreferencesService::new(Arc::new(InMemoryRepository::new()), "en_US");
        assert!(!service.has_seen_onboarding().await.unwrap());
        service.set_has_seen_onboarding(true).await.unwrap();
        assert!(service.has_seen_onboarding().await.unwrap());
    }
}

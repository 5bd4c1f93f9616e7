use std::sync::Arc;

use lingua_core::catalog::Catalog;
use lingua_core::icons::{EmojiIcons, IconLookup};
use lingua_core::localization::{Localizer, StringTable};
use lingua_core::model::SessionConfig;
use storage::Storage;
use storage::catalog::builtin_catalog;

use crate::Clock;
use crate::error::AppServicesError;
use crate::preferences_service::PreferencesService;
use crate::progress::ProgressAggregator;
use crate::sessions::SessionLoopService;
use crate::writer::ProgressWriter;

/// Assembles app-facing services around the bundled catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn Catalog>,
    localizer: Arc<dyn Localizer>,
    progress: Arc<ProgressAggregator>,
    session_loop: Arc<SessionLoopService>,
    preferences: Arc<PreferencesService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// bundled catalog is invalid.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: SessionConfig,
        system_locale: &str,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite_with_clock(db_url, clock).await?;
        Self::from_storage(storage, clock, config, system_locale)
    }

    /// Build services over in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalog is invalid.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn in_memory(
        clock: Clock,
        config: SessionConfig,
        system_locale: &str,
    ) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), clock, config, system_locale)
    }

    /// Wire services over an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled catalog is invalid.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn from_storage(
        storage: Storage,
        clock: Clock,
        config: SessionConfig,
        system_locale: &str,
    ) -> Result<Self, AppServicesError> {
        let catalog: Arc<dyn Catalog> = Arc::new(builtin_catalog()?);
        let icons: Arc<dyn IconLookup> = Arc::new(EmojiIcons::builtin());
        let localizer: Arc<dyn Localizer> = Arc::new(StringTable::builtin());

        let progress = Arc::new(
            ProgressAggregator::new(Arc::clone(&catalog), Arc::clone(&storage.progress))
                .with_unlock_threshold(config.unlock_threshold()),
        );
        let writer = ProgressWriter::spawn(Arc::clone(&progress));
        let session_loop = Arc::new(SessionLoopService::new(
            clock,
            config,
            Arc::clone(&catalog),
            icons,
            writer,
        ));
        let preferences = Arc::new(PreferencesService::new(
            Arc::clone(&storage.preferences),
            system_locale,
        ));

        Ok(Self {
            catalog,
            localizer,
            progress,
            session_loop,
            preferences,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<dyn Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn localizer(&self) -> Arc<dyn Localizer> {
        Arc::clone(&self.localizer)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressAggregator> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }
}

//! `SQLite` adapter for progress and preferences.
//!
//! One small pool per app: the writer task and the CLI are the only
//! clients, so five connections in WAL mode are plenty.

use std::sync::Arc;
use std::time::Duration;

use lingua_core::Clock;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use crate::repository::{PreferencesRepository, ProgressRepository, Storage};

mod mapping;
mod migrate;
mod preferences_repo;
mod progress_repo;

/// Progress and preference tables behind one connection pool.
///
/// Every write stamps `updated_at` from `clock`.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
    clock: Clock,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl SqliteRepository {
    /// Open the progress database at `database_url`.
    ///
    /// Each pooled connection switches to WAL and waits up to five seconds
    /// on a locked database, so the background writer never trips over a
    /// concurrent read.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or a
    /// pragma is refused.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        Ok(Self {
            pool,
            clock: Clock::system(),
        })
    }

    /// Stamp writes with `clock` instead of wall time.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Bring the progress and preferences schema up to date.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if a schema step fails.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool, self.clock.now()).await
    }
}

impl Storage {
    /// Open and migrate `SQLite`, then expose it through both repository
    /// traits.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or
    /// migrated.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        Self::sqlite_with_clock(database_url, Clock::system()).await
    }

    /// Like [`Storage::sqlite`], with `updated_at` stamps taken from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or
    /// migrated.
    pub async fn sqlite_with_clock(
        database_url: &str,
        clock: Clock,
    ) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url)
            .await?
            .with_clock(clock);
        repo.migrate().await?;
        tracing::debug!(database_url, "sqlite storage ready");
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Ok(Self {
            progress,
            preferences,
        })
    }
}

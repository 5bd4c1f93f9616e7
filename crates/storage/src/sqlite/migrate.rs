use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Applies pending schema versions in order.
///
/// Version 1 holds the progress key-value tables and app preferences.
pub async fn run_migrations(
    pool: &SqlitePool,
    applied_at: DateTime<Utc>,
) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    if !is_applied(pool, 1).await? {
        tracing::info!("applying sqlite schema version 1");
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS section_progress (
                    section_id TEXT PRIMARY KEY,
                    progress REAL NOT NULL DEFAULT 0 CHECK (progress BETWEEN 0 AND 1),
                    unlocked INTEGER NOT NULL DEFAULT 0 CHECK (unlocked IN (0, 1)),
                    updated_at TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS tier_progress (
                    tier TEXT PRIMARY KEY,
                    progress REAL NOT NULL CHECK (progress BETWEEN 0 AND 1),
                    updated_at TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS preferences (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(applied_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
    }

    Ok(())
}

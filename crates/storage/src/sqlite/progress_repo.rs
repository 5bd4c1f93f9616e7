use async_trait::async_trait;
use lingua_core::model::{DifficultyTier, Progress, SectionId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{bool_from_i64, bool_to_i64, conn, progress_from_f64, ser};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_section_progress(&self, id: &SectionId) -> Result<Progress, StorageError> {
        let row = sqlx::query("SELECT progress FROM section_progress WHERE section_id = ?1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(Progress::ZERO);
        };
        let value: f64 = row.try_get("progress").map_err(ser)?;
        progress_from_f64("section progress", value)
    }

    async fn set_section_progress(
        &self,
        id: &SectionId,
        progress: Progress,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO section_progress (section_id, progress, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(section_id) DO UPDATE SET
                progress = excluded.progress,
                updated_at = excluded.updated_at
            ",
        )
        .bind(id.as_str())
        .bind(progress.value())
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn get_tier_progress(&self, tier: DifficultyTier) -> Result<Progress, StorageError> {
        let row = sqlx::query("SELECT progress FROM tier_progress WHERE tier = ?1")
            .bind(tier.storage_key())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(Progress::ZERO);
        };
        let value: f64 = row.try_get("progress").map_err(ser)?;
        progress_from_f64("tier progress", value)
    }

    async fn set_tier_progress(
        &self,
        tier: DifficultyTier,
        progress: Progress,
    ) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO tier_progress (tier, progress, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(tier) DO UPDATE SET
                progress = excluded.progress,
                updated_at = excluded.updated_at
            ",
        )
        .bind(tier.storage_key())
        .bind(progress.value())
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn get_section_unlocked(&self, id: &SectionId) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT unlocked FROM section_progress WHERE section_id = ?1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(false);
        };
        let value: i64 = row.try_get("unlocked").map_err(ser)?;
        bool_from_i64("unlocked", value)
    }

    async fn set_section_unlocked(
        &self,
        id: &SectionId,
        unlocked: bool,
    ) -> Result<(), StorageError> {
        // Progress defaults to 0 when the unlock lands before any answer.
        sqlx::query(
            r"
            INSERT INTO section_progress (section_id, unlocked, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(section_id) DO UPDATE SET
                unlocked = excluded.unlocked,
                updated_at = excluded.updated_at
            ",
        )
        .bind(id.as_str())
        .bind(bool_to_i64(unlocked))
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }
}

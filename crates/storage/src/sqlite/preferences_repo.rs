use async_trait::async_trait;
use lingua_core::model::Language;
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{bool_from_i64, conn, language_from_str, ser};
use crate::repository::{PreferencesRepository, StorageError};

const LANGUAGE_KEY: &str = "app_language";
const ONBOARDING_KEY: &str = "has_seen_onboarding";

impl SqliteRepository {
    async fn get_preference(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        row.map(|row| row.try_get::<String, _>("value").map_err(ser))
            .transpose()
    }

    async fn set_preference(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }
}

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn get_language(&self) -> Result<Option<Language>, StorageError> {
        self.get_preference(LANGUAGE_KEY)
            .await?
            .map(|code| language_from_str(&code))
            .transpose()
    }

    async fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.set_preference(LANGUAGE_KEY, language.code()).await
    }

    async fn has_seen_onboarding(&self) -> Result<bool, StorageError> {
        let Some(raw) = self.get_preference(ONBOARDING_KEY).await? else {
            return Ok(false);
        };
        let value = raw.parse::<i64>().map_err(ser)?;
        bool_from_i64(ONBOARDING_KEY, value)
    }

    async fn set_has_seen_onboarding(&self, seen: bool) -> Result<(), StorageError> {
        let value = if seen { "1" } else { "0" };
        self.set_preference(ONBOARDING_KEY, value).await
    }
}

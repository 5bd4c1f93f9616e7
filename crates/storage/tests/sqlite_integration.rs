use chrono::{DateTime, Utc};
use lingua_core::model::{DifficultyTier, Language, Progress, SectionId};
use lingua_core::time::{fixed_clock, fixed_now};
use sqlx::Row;
use storage::Storage;
use storage::repository::{PreferencesRepository, ProgressRepository};
use storage::sqlite::SqliteRepository;

fn id(raw: &str) -> SectionId {
    SectionId::new(raw).unwrap()
}

#[tokio::test]
async fn sqlite_reads_defaults_for_missing_keys() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_defaults?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(
        repo.get_section_progress(&id("colors")).await.unwrap(),
        Progress::ZERO
    );
    assert_eq!(
        repo.get_tier_progress(DifficultyTier::Advanced).await.unwrap(),
        Progress::ZERO
    );
    assert!(!repo.get_section_unlocked(&id("colors")).await.unwrap());
    assert_eq!(repo.get_language().await.unwrap(), None);
    assert!(!repo.has_seen_onboarding().await.unwrap());
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_progress_and_unlock_independent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set_section_unlocked(&id("numbers"), true).await.unwrap();
    repo.set_section_progress(&id("numbers"), Progress::new(0.4))
        .await
        .unwrap();
    repo.set_section_progress(&id("numbers"), Progress::new(0.7))
        .await
        .unwrap();
    repo.set_tier_progress(DifficultyTier::Beginner, Progress::new(0.25))
        .await
        .unwrap();

    assert_eq!(
        repo.get_section_progress(&id("numbers")).await.unwrap(),
        Progress::new(0.7)
    );
    assert!(repo.get_section_unlocked(&id("numbers")).await.unwrap());
    assert_eq!(
        repo.get_tier_progress(DifficultyTier::Beginner).await.unwrap(),
        Progress::new(0.25)
    );
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set_section_progress(&id("family"), Progress::new(0.5))
        .await
        .unwrap();
    repo.migrate().await.expect("second migrate");

    assert_eq!(
        repo.get_section_progress(&id("family")).await.unwrap(),
        Progress::new(0.5)
    );
}

#[tokio::test]
async fn sqlite_storage_persists_preferences() {
    let storage = Storage::sqlite("sqlite:file:memdb_prefs?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.preferences.set_language(Language::Tr).await.unwrap();
    storage.preferences.set_has_seen_onboarding(true).await.unwrap();

    assert_eq!(
        storage.preferences.get_language().await.unwrap(),
        Some(Language::Tr)
    );
    assert!(storage.preferences.has_seen_onboarding().await.unwrap());
}

#[tokio::test]
async fn sqlite_stamps_writes_with_injected_clock() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_clock?mode=memory&cache=shared")
        .await
        .expect("connect")
        .with_clock(fixed_clock());
    repo.migrate().await.expect("migrate");

    repo.set_section_progress(&id("colors"), Progress::new(0.3))
        .await
        .unwrap();
    repo.set_tier_progress(DifficultyTier::Beginner, Progress::new(0.1))
        .await
        .unwrap();

    let row = sqlx::query("SELECT updated_at FROM section_progress WHERE section_id = ?1")
        .bind("colors")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    let stamped: DateTime<Utc> = row.try_get("updated_at").unwrap();
    assert_eq!(stamped, fixed_now());

    let row = sqlx::query("SELECT applied_at FROM schema_migrations WHERE version = 1")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    let applied: DateTime<Utc> = row.try_get("applied_at").unwrap();
    assert_eq!(applied, fixed_now());
}

//! Background persistence for progress updates.
//!
//! Session transitions never wait on storage. They push a job onto an
//! unbounded channel and return; a single task drains the channel in order,
//! so the last queued value for a key is the one that ends up stored.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use lingua_core::model::{Section, Word};

use crate::progress::ProgressAggregator;

/// A unit of work for the writer task.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressJob {
    /// Store a section's progress from the words answered correctly so far,
    /// re-average its tier and re-check the lock on the next section.
    Section {
        section: Section,
        correct: HashSet<Word>,
    },
}

enum Command {
    Job(ProgressJob),
    Flush(oneshot::Sender<()>),
}

/// Handle to the writer task. Cheap to clone; all clones feed the same queue.
#[derive(Clone)]
pub struct ProgressWriter {
    tx: mpsc::UnboundedSender<Command>,
}

impl ProgressWriter {
    /// Start the writer task.
    ///
    /// The task keeps running until every handle is dropped and the queue is
    /// drained.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(aggregator: Arc<ProgressAggregator>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Command>();

        tokio::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Command::Job(job) => apply(&aggregator, job).await,
                    Command::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
            tracing::debug!("progress writer stopped");
        });

        Self { tx }
    }

    /// Queue a job without waiting for it.
    pub fn enqueue(&self, job: ProgressJob) {
        if self.tx.send(Command::Job(job)).is_err() {
            tracing::warn!("progress writer is gone; dropping update");
        }
    }

    /// Wait until every job queued before this call has been applied.
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}

async fn apply(aggregator: &ProgressAggregator, job: ProgressJob) {
    match job {
        ProgressJob::Section { section, correct } => {
            if let Err(err) = aggregator
                .recompute_section_progress(&section, &correct)
                .await
            {
                tracing::warn!(
                    section = %section.id(),
                    error = %err,
                    "failed to persist section progress"
                );
            }
            if let Err(err) = aggregator
                .recompute_difficulty_progress(section.tier())
                .await
            {
                tracing::warn!(
                    tier = %section.tier(),
                    error = %err,
                    "failed to persist tier progress"
                );
            }
            if let Err(err) = aggregator.refresh_following_lock(&section).await {
                tracing::warn!(
                    section = %section.id(),
                    error = %err,
                    "failed to refresh next section lock"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lingua_core::catalog::{Catalog, StaticCatalog};
    use lingua_core::model::{DifficultyTier, Progress, SectionId};
    use storage::repository::{InMemoryRepository, ProgressRepository, StorageError};

    fn colors() -> Section {
        let words = ["red", "blue", "green", "white"]
            .into_iter()
            .map(|w| Word::new(w, format!("t{w}"), DifficultyTier::Beginner).unwrap())
            .collect();
        Section::new(
            SectionId::new("colors").unwrap(),
            DifficultyTier::Beginner,
            1,
            words,
        )
    }

    fn catalog() -> StaticCatalog {
        let animals = Section::new(
            SectionId::new("animals").unwrap(),
            DifficultyTier::Beginner,
            2,
            vec![Word::new("cat", "kedi", DifficultyTier::Beginner).unwrap()],
        );
        StaticCatalog::new(vec![colors(), animals]).unwrap()
    }

    fn job(hits: usize) -> ProgressJob {
        let section = colors();
        let correct = section.words()[..hits].iter().cloned().collect();
        ProgressJob::Section { section, correct }
    }

    fn spawn(repo: &InMemoryRepository) -> ProgressWriter {
        let aggregator = ProgressAggregator::new(Arc::new(catalog()), Arc::new(repo.clone()));
        ProgressWriter::spawn(Arc::new(aggregator))
    }

    #[tokio::test]
    async fn last_queued_value_wins() {
        let repo = InMemoryRepository::new();
        let writer = spawn(&repo);

        for hits in [1, 2, 0, 4, 2] {
            writer.enqueue(job(hits));
        }
        writer.flush().await;

        let id = SectionId::new("colors").unwrap();
        assert_eq!(
            repo.get_section_progress(&id).await.unwrap(),
            Progress::new(0.5)
        );
        // Two sections in the tier, the other untouched.
        assert_eq!(
            repo.get_tier_progress(DifficultyTier::Beginner).await.unwrap(),
            Progress::new(0.25)
        );
    }

    #[tokio::test]
    async fn queued_jobs_outlive_the_handle() {
        let repo = InMemoryRepository::new();
        let writer = spawn(&repo);
        let observer = writer.clone();

        writer.enqueue(job(2));
        drop(writer);
        observer.flush().await;

        let id = SectionId::new("colors").unwrap();
        assert_eq!(
            repo.get_section_progress(&id).await.unwrap(),
            Progress::new(0.5)
        );
    }

    #[tokio::test]
    async fn crossing_the_threshold_unlocks_next_section_immediately() {
        let repo = InMemoryRepository::new();
        let writer = spawn(&repo);
        let animals = SectionId::new("animals").unwrap();

        writer.enqueue(job(2));
        writer.flush().await;
        assert!(!repo.get_section_unlocked(&animals).await.unwrap());

        // Reaches 0.75, then drops back before anything renders a section list.
        writer.enqueue(job(3));
        writer.enqueue(job(1));
        writer.flush().await;

        assert!(repo.get_section_unlocked(&animals).await.unwrap());
        let aggregator = ProgressAggregator::new(Arc::new(catalog()), Arc::new(repo.clone()));
        let next = catalog().section(&animals).unwrap();
        assert!(
            !aggregator
                .compute_lock_status(&next)
                .await
                .unwrap()
                .is_locked()
        );
    }

    struct FailingRepository;

    #[async_trait]
    impl ProgressRepository for FailingRepository {
        async fn get_section_progress(&self, _: &SectionId) -> Result<Progress, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn set_section_progress(&self, _: &SectionId, _: Progress) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn get_tier_progress(&self, _: DifficultyTier) -> Result<Progress, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn set_tier_progress(&self, _: DifficultyTier, _: Progress) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn get_section_unlocked(&self, _: &SectionId) -> Result<bool, StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
        async fn set_section_unlocked(&self, _: &SectionId, _: bool) -> Result<(), StorageError> {
            Err(StorageError::Connection("offline".into()))
        }
    }

    #[tokio::test]
    async fn storage_failures_are_swallowed() {
        let aggregator = ProgressAggregator::new(Arc::new(catalog()), Arc::new(FailingRepository));
        let writer = ProgressWriter::spawn(Arc::new(aggregator));

        writer.enqueue(job(2));
        writer.enqueue(job(3));
        writer.flush().await;

        // Still accepting work after failures.
        writer.enqueue(job(4));
        writer.flush().await;
    }
}

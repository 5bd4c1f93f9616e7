use std::sync::Arc;

use lingua_core::catalog::Catalog;
use lingua_core::icons::IconLookup;
use lingua_core::model::{Progress, SectionId, SessionConfig};

use super::progress::SessionSnapshot;
use super::service::{Attempt, SessionController};
use crate::Clock;
use crate::error::SessionError;
use crate::progress::ProgressAggregator;
use crate::writer::{ProgressJob, ProgressWriter};

/// Result of answering or rewinding a single card.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub attempt: Attempt,
    pub section_progress: Progress,
    pub is_over: bool,
}

/// Orchestrates session start, answers, and background progress writes.
#[derive(Clone)]
pub struct SessionLoopService {
    clock: Clock,
    config: SessionConfig,
    catalog: Arc<dyn Catalog>,
    icons: Arc<dyn IconLookup>,
    writer: ProgressWriter,
    seed: Option<u64>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: SessionConfig,
        catalog: Arc<dyn Catalog>,
        icons: Arc<dyn IconLookup>,
        writer: ProgressWriter,
    ) -> Self {
        Self {
            clock,
            config,
            catalog,
            icons,
            writer,
            seed: None,
        }
    }

    /// Seed every session this service starts, for reproducible card order.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start a new session over the given section.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownSection` if the catalog has no such section.
    pub fn start_session(&self, section_id: &SectionId) -> Result<SessionController, SessionError> {
        let section = self
            .catalog
            .section(section_id)
            .ok_or_else(|| SessionError::UnknownSection(section_id.clone()))?;

        let mut session = SessionController::new(&self.config, self.clock);
        if let Some(seed) = self.seed {
            session = session.with_seed(seed);
        }
        session.start_session(section);
        Ok(session)
    }

    /// Answer the current card and queue the resulting progress.
    ///
    /// Returns `None` when no card is showing.
    pub fn answer(
        &self,
        session: &mut SessionController,
        is_correct: bool,
    ) -> Option<SessionAnswerResult> {
        let attempt = session.answer(is_correct)?;
        let section_progress = self.queue_progress(session);
        Some(SessionAnswerResult {
            attempt,
            section_progress,
            is_over: session.is_over(),
        })
    }

    /// Rewind the last answer and queue the corrected progress.
    ///
    /// Returns `None` when the rewind is not allowed.
    pub fn undo(&self, session: &mut SessionController) -> Option<SessionAnswerResult> {
        let attempt = session.undo()?;
        let section_progress = self.queue_progress(session);
        Some(SessionAnswerResult {
            attempt,
            section_progress,
            is_over: session.is_over(),
        })
    }

    #[must_use]
    pub fn snapshot(&self, session: &SessionController) -> SessionSnapshot {
        session.snapshot(self.icons.as_ref())
    }

    /// Wait for every queued progress write to land.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn queue_progress(&self, session: &SessionController) -> Progress {
        let Some(section) = session.active_section() else {
            return Progress::ZERO;
        };
        let progress = ProgressAggregator::section_progress(section, session.correct_words());
        self.writer.enqueue(ProgressJob::Section {
            section: section.clone(),
            correct: session.correct_words().clone(),
        });
        progress
    }
}

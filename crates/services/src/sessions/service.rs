use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::fmt;

use lingua_core::Clock;
use lingua_core::icons::IconLookup;
use lingua_core::model::{Section, SessionConfig, SessionSummary, Word};

use super::plan::BatchPlanner;
use super::progress::{SessionPhase, SessionProgress, SessionSnapshot, SlideDirection};
use crate::error::SessionError;

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One answered card, kept so it can be rewound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub was_correct: bool,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// In-memory review round over one section.
///
/// Owns every piece of session state and applies answers and rewinds
/// synchronously. Persistence is left to the caller: after each transition
/// the caller reads `correct_words()` and hands it to the progress aggregator.
///
/// Invalid calls (answering with no card showing, rewinding at the start of a
/// batch) are ignored and return `None`.
pub struct SessionController {
    clock: Clock,
    planner: BatchPlanner,
    points_per_correct: u32,
    rng: StdRng,
    active_section: Option<Section>,
    pending_words: Vec<Word>,
    cursor: usize,
    used_words: HashSet<Word>,
    correct_words: HashSet<Word>,
    incorrect_words: HashSet<Word>,
    history: Vec<Attempt>,
    score: u32,
    correct_count: u32,
    total_attempts: u32,
    accuracy: f64,
    is_over: bool,
    is_animating_undo: bool,
    slide_direction: SlideDirection,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl SessionController {
    /// Create an idle controller. Call [`SessionController::start_session`] to begin.
    #[must_use]
    pub fn new(config: &SessionConfig, clock: Clock) -> Self {
        Self {
            clock,
            planner: BatchPlanner::new(config.batch_size()),
            points_per_correct: config.points_per_correct(),
            rng: StdRng::from_rng(&mut rand::rng()),
            active_section: None,
            pending_words: Vec::new(),
            cursor: 0,
            used_words: HashSet::new(),
            correct_words: HashSet::new(),
            incorrect_words: HashSet::new(),
            history: Vec::new(),
            score: 0,
            correct_count: 0,
            total_attempts: 0,
            accuracy: 0.0,
            is_over: false,
            is_animating_undo: false,
            slide_direction: SlideDirection::Forward,
            started_at: None,
            completed_at: None,
        }
    }

    /// Replace the shuffle source with a seeded one.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Begin a fresh round over `section`, discarding any previous state.
    pub fn start_session(&mut self, section: Section) {
        let now = self.clock.now();

        self.used_words.clear();
        self.correct_words.clear();
        self.incorrect_words.clear();
        self.history.clear();
        self.score = 0;
        self.correct_count = 0;
        self.total_attempts = 0;
        self.accuracy = 0.0;
        self.is_over = false;
        self.is_animating_undo = false;
        self.slide_direction = SlideDirection::Forward;
        self.started_at = Some(now);
        self.completed_at = None;
        self.cursor = 0;

        self.pending_words = self
            .planner
            .draw(section.words(), &self.used_words, &mut self.rng);
        if self.pending_words.is_empty() {
            self.is_over = true;
            self.completed_at = Some(now);
        }

        tracing::debug!(
            section = %section.id(),
            batch = self.pending_words.len(),
            "session started"
        );
        self.active_section = Some(section);
    }

    /// Record an answer for the current card and advance.
    ///
    /// Returns the recorded attempt, or `None` when no card is showing.
    pub fn answer(&mut self, is_correct: bool) -> Option<Attempt> {
        let word = self.current_word()?.clone();

        self.total_attempts += 1;
        if is_correct {
            self.correct_count += 1;
            self.score += self.points_per_correct;
            self.correct_words.insert(word.clone());
        } else {
            self.incorrect_words.insert(word.clone());
        }
        self.used_words.insert(word.clone());

        let attempt = Attempt {
            word,
            was_correct: is_correct,
        };
        self.history.push(attempt.clone());
        self.recompute_accuracy();
        self.slide_direction = SlideDirection::Forward;

        self.cursor += 1;
        if self.cursor >= self.pending_words.len() {
            self.refill();
        }

        Some(attempt)
    }

    /// Rewind the last answer within the current batch.
    ///
    /// A rewound hit leaves `correct_words`; a rewound miss leaves
    /// `incorrect_words`, so the word is neither scored nor excluded from
    /// later batches and `used_words` stays the union of both sets.
    ///
    /// Returns `None` if there is nothing to rewind or the batch has just
    /// started. It also returns `None` while a previous rewind is animating.
    pub fn undo(&mut self) -> Option<Attempt> {
        if self.is_animating_undo || self.cursor == 0 {
            return None;
        }
        let attempt = self.history.pop()?;

        if attempt.was_correct {
            self.correct_count = self.correct_count.saturating_sub(1);
            self.score = self.score.saturating_sub(self.points_per_correct);
            self.correct_words.remove(&attempt.word);
        } else {
            self.incorrect_words.remove(&attempt.word);
        }
        self.total_attempts = self.total_attempts.saturating_sub(1);
        self.used_words.remove(&attempt.word);
        self.recompute_accuracy();

        self.cursor -= 1;
        self.is_animating_undo = true;
        self.slide_direction = SlideDirection::Backward;

        tracing::debug!(word = attempt.word.source_text(), "answer rewound");
        Some(attempt)
    }

    /// Called by the front end once the rewind animation has played.
    pub fn finish_undo_animation(&mut self) {
        self.is_animating_undo = false;
        self.slide_direction = SlideDirection::Forward;
    }

    fn refill(&mut self) {
        self.cursor = 0;
        let Some(section) = self.active_section.as_ref() else {
            self.pending_words.clear();
            return;
        };

        // `used_words` already holds every incorrect word.
        self.pending_words = self
            .planner
            .draw(section.words(), &self.used_words, &mut self.rng);

        if self.pending_words.is_empty() {
            self.is_over = true;
            self.completed_at = Some(self.clock.now());
            tracing::debug!(
                section = %section.id(),
                score = self.score,
                "session over"
            );
        }
    }

    fn recompute_accuracy(&mut self) {
        self.accuracy = if self.total_attempts == 0 {
            0.0
        } else {
            f64::from(self.correct_count) / f64::from(self.total_attempts)
        };
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        if self.is_over || self.active_section.is_none() {
            return None;
        }
        self.pending_words.get(self.cursor)
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&Section> {
        self.active_section.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.active_section.is_none() {
            SessionPhase::Idle
        } else if self.is_over {
            SessionPhase::Over
        } else {
            SessionPhase::Playing
        }
    }

    #[must_use]
    pub fn correct_words(&self) -> &HashSet<Word> {
        &self.correct_words
    }

    #[must_use]
    pub fn incorrect_words(&self) -> &HashSet<Word> {
        &self.incorrect_words
    }

    #[must_use]
    pub fn used_words(&self) -> &HashSet<Word> {
        &self.used_words
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.total_attempts
    }

    /// Share of correct answers so far, zero before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub fn is_animating_undo(&self) -> bool {
        self.is_animating_undo
    }

    #[must_use]
    pub fn slide_direction(&self) -> SlideDirection {
        self.slide_direction
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Position within the current batch.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.pending_words.len();
        SessionProgress {
            total,
            answered: self.cursor.min(total),
            remaining: total.saturating_sub(self.cursor),
            is_complete: self.is_over,
        }
    }

    #[must_use]
    pub fn snapshot(&self, icons: &dyn IconLookup) -> SessionSnapshot {
        let current_word = self.current_word().cloned();
        let icon = current_word
            .as_ref()
            .and_then(|w| icons.icon_for(w))
            .map(str::to_string);
        SessionSnapshot {
            phase: self.phase(),
            current_word,
            icon,
            score: self.score,
            accuracy: self.accuracy,
            correct_count: self.correct_count,
            total_attempts: self.total_attempts,
            is_over: self.is_over,
            is_animating_undo: self.is_animating_undo,
            slide_direction: self.slide_direction,
            batch: self.progress(),
        }
    }

    /// Result screen data for a finished round.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotOver` until the round has ended.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let (Some(section), Some(started_at), Some(completed_at)) =
            (&self.active_section, self.started_at, self.completed_at)
        else {
            return Err(SessionError::NotOver);
        };
        if !self.is_over {
            return Err(SessionError::NotOver);
        }

        Ok(SessionSummary::new(
            section.id().clone(),
            started_at,
            completed_at,
            self.score,
            self.correct_words.iter().cloned().collect(),
            self.incorrect_words.iter().cloned().collect(),
        )?)
    }
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("section", &self.active_section.as_ref().map(Section::id))
            .field("pending_len", &self.pending_words.len())
            .field("cursor", &self.cursor)
            .field("history_len", &self.history.len())
            .field("score", &self.score)
            .field("is_over", &self.is_over)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use lingua_core::icons::EmojiIcons;
    use lingua_core::model::{DifficultyTier, SectionId};
    use lingua_core::time::{fixed_clock, fixed_now};

    fn section(words: usize) -> Section {
        let words = (0..words)
            .map(|i| Word::new(format!("w{i}"), format!("k{i}"), DifficultyTier::Beginner).unwrap())
            .collect();
        Section::new(
            SectionId::new("colors").unwrap(),
            DifficultyTier::Beginner,
            1,
            words,
        )
    }

    fn controller() -> SessionController {
        SessionController::new(&SessionConfig::default(), fixed_clock()).with_seed(11)
    }

    #[test]
    fn idle_controller_ignores_input() {
        let mut session = controller();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.answer(true).is_none());
        assert!(session.undo().is_none());
        assert_eq!(session.total_attempts(), 0);
    }

    #[test]
    fn empty_section_is_over_immediately() {
        let mut session = controller();
        session.start_session(section(0));
        assert!(session.is_over());
        assert!(session.current_word().is_none());
        assert_eq!(session.phase(), SessionPhase::Over);
        assert!(session.answer(true).is_none());
    }

    #[test]
    fn words_never_repeat_within_a_session() {
        let mut session = controller();
        session.start_session(section(25));

        let mut shown = HashSet::new();
        let mut flip = false;
        while let Some(word) = session.current_word().cloned() {
            assert!(shown.insert(word), "word shown twice");
            flip = !flip;
            session.answer(flip);
        }

        assert!(session.is_over());
        assert_eq!(shown.len(), 25);
        assert_eq!(session.total_attempts(), 25);
    }

    #[test]
    fn accuracy_tracks_correct_share() {
        let mut session = controller();
        session.start_session(section(10));
        assert!(session.accuracy().abs() < f64::EPSILON);

        session.answer(true);
        session.answer(false);
        session.answer(true);
        session.answer(true);

        let expected = f64::from(session.correct_count()) / f64::from(session.total_attempts());
        assert!((session.accuracy() - expected).abs() < f64::EPSILON);
        assert!((session.accuracy() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn all_correct_on_five_words() {
        let mut session = controller();
        session.start_session(section(5));
        for _ in 0..5 {
            assert!(!session.is_over());
            session.answer(true).unwrap();
        }
        assert!(session.is_over());
        assert_eq!(session.score(), 50);
        assert!((session.accuracy() - 1.0).abs() < f64::EPSILON);
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn history_matches_attempt_count() {
        let mut session = controller();
        session.start_session(section(12));
        for i in 0..12 {
            session.answer(i % 3 == 0);
            assert_eq!(session.history().len() as u32, session.total_attempts());
            let union: HashSet<_> = session
                .correct_words()
                .union(session.incorrect_words())
                .cloned()
                .collect();
            assert_eq!(&union, session.used_words());
        }
    }

    #[test]
    fn missed_words_are_not_offered_again() {
        let mut session = controller();
        session.start_session(section(12));
        let first = session.current_word().cloned().unwrap();
        session.answer(false);

        while let Some(word) = session.current_word().cloned() {
            assert_ne!(word, first);
            session.answer(true);
        }
        assert_eq!(session.incorrect_words().len(), 1);
        assert_eq!(session.correct_words().len(), 11);
    }

    #[test]
    fn single_answer_then_undo_restores_state() {
        let mut session = controller();
        session.start_session(section(10));
        let first = session.current_word().cloned().unwrap();

        session.answer(true);
        let undone = session.undo().unwrap();

        assert_eq!(undone.word, first);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_attempts(), 0);
        assert!(session.used_words().is_empty());
        assert_eq!(session.current_word(), Some(&first));
        assert!(session.is_animating_undo());
        assert_eq!(session.slide_direction(), SlideDirection::Backward);
    }

    #[test]
    fn undo_of_incorrect_answer_clears_the_miss() {
        let mut session = controller();
        session.start_session(section(10));
        session.answer(false);
        session.undo().unwrap();
        assert!(session.incorrect_words().is_empty());
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn repeated_undo_restores_everything() {
        let mut session = controller();
        session.start_session(section(10));
        let first = session.current_word().cloned().unwrap();

        let pattern = [true, false, true, true, false];
        for correct in pattern {
            session.answer(correct);
        }
        assert_eq!(session.score(), 30);

        for _ in pattern {
            session.undo().unwrap();
            session.finish_undo_animation();
        }

        assert_eq!(session.score(), 0);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.total_attempts(), 0);
        assert!(session.used_words().is_empty());
        assert!(session.correct_words().is_empty());
        assert_eq!(session.current_word(), Some(&first));
        assert_eq!(session.slide_direction(), SlideDirection::Forward);
    }

    #[test]
    fn undo_is_rejected_while_animating() {
        let mut session = controller();
        session.start_session(section(10));
        session.answer(true);
        session.answer(true);

        assert!(session.undo().is_some());
        assert!(session.undo().is_none());
        assert_eq!(session.total_attempts(), 1);

        session.finish_undo_animation();
        assert!(session.undo().is_some());
    }

    #[test]
    fn undo_does_not_cross_a_batch_boundary() {
        let mut session = controller();
        session.start_session(section(15));
        for _ in 0..10 {
            session.answer(true);
        }
        assert_eq!(session.progress().answered, 0);
        assert_eq!(session.progress().total, 5);
        assert!(session.undo().is_none());
        assert_eq!(session.total_attempts(), 10);
    }

    #[test]
    fn undo_after_game_over_is_rejected() {
        let mut session = controller();
        session.start_session(section(2));
        session.answer(true);
        session.answer(true);
        assert!(session.is_over());
        assert!(session.undo().is_none());
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = controller();
        session.start_session(section(3));
        session.answer(true);
        session.answer(false);

        session.start_session(section(3));
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_attempts(), 0);
        assert!(session.history().is_empty());
        assert!(session.used_words().is_empty());
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn summary_only_after_game_over() {
        let mut session = controller();
        session.start_session(section(3));
        assert!(matches!(session.summary(), Err(SessionError::NotOver)));

        session.answer(true);
        session.answer(false);
        session.answer(true);

        let summary = session.summary().unwrap();
        assert_eq!(summary.score(), 20);
        assert_eq!(summary.correct_words().len(), 2);
        assert_eq!(summary.incorrect_words().len(), 1);
        assert_eq!(summary.section_id().as_str(), "colors");
    }

    #[test]
    fn snapshot_reports_current_card_and_icon() {
        let mut icons = EmojiIcons::new();
        icons.insert("w0", "⭐");
        let mut session = controller();
        session.start_session(section(1));

        let snap = session.snapshot(&icons);
        assert_eq!(snap.phase, SessionPhase::Playing);
        assert_eq!(snap.icon.as_deref(), Some("⭐"));
        assert_eq!(snap.batch.total, 1);
        assert_eq!(snap.batch.remaining, 1);

        session.answer(true);
        let snap = session.snapshot(&icons);
        assert!(snap.is_over);
        assert!(snap.current_word.is_none());
        assert!(snap.icon.is_none());
    }
}

use lingua_core::model::Word;

/// Position within the current batch, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Which way the next card should slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

/// Coarse lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Playing,
    Over,
}

/// Everything a front end needs to draw the current card.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub current_word: Option<Word>,
    pub icon: Option<String>,
    pub score: u32,
    pub accuracy: f64,
    pub correct_count: u32,
    pub total_attempts: u32,
    pub is_over: bool,
    pub is_animating_undo: bool,
    pub slide_direction: SlideDirection,
    pub batch: SessionProgress,
}

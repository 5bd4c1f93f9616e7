use serde::{Deserialize, Serialize};

use crate::model::ids::SectionId;
use crate::model::progress::{LockStatus, Progress};
use crate::model::tier::DifficultyTier;
use crate::model::word::Word;

/// A topical group of word pairs within one tier.
///
/// Only localization keys are stored here; display strings are resolved by a
/// `Localizer` when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    display_key: String,
    description_key: String,
    #[serde(default)]
    icon_key: Option<String>,
    tier: DifficultyTier,
    order: u32,
    words: Vec<Word>,
}

impl Section {
    /// Creates a section whose localization keys are `<id>` and `<id>_desc`.
    #[must_use]
    pub fn new(id: SectionId, tier: DifficultyTier, order: u32, words: Vec<Word>) -> Self {
        let display_key = id.to_string();
        let description_key = format!("{id}_desc");
        Self {
            id,
            display_key,
            description_key,
            icon_key: None,
            tier,
            order,
            words,
        }
    }

    #[must_use]
    pub fn with_keys(
        mut self,
        display_key: impl Into<String>,
        description_key: impl Into<String>,
    ) -> Self {
        self.display_key = display_key.into();
        self.description_key = description_key.into();
        self
    }

    #[must_use]
    pub fn with_icon_key(mut self, icon_key: impl Into<String>) -> Self {
        self.icon_key = Some(icon_key.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn display_key(&self) -> &str {
        &self.display_key
    }

    #[must_use]
    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    #[must_use]
    pub fn icon_key(&self) -> Option<&str> {
        self.icon_key.as_deref()
    }

    #[must_use]
    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// 1-based position within the tier.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The first section of every tier is always playable.
    #[must_use]
    pub fn is_first_in_tier(&self) -> bool {
        self.order == 1
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

/// A section together with its computed, never-cached progress and lock state.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub section: Section,
    pub progress: Progress,
    pub lock: LockStatus,
}

impl SectionView {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }
}

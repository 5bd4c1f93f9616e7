use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty tier: {0}")]
pub struct ParseTierError(String);

/// Four ordered difficulty levels.
///
/// Ordering follows the intended progression, but nothing in the app requires a
/// learner to finish one tier before opening the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
        DifficultyTier::Expert,
    ];

    /// Key under which tier progress is persisted.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "BEGINNER",
            DifficultyTier::Intermediate => "INTERMEDIATE",
            DifficultyTier::Advanced => "ADVANCED",
            DifficultyTier::Expert => "EXPERT",
        }
    }

    /// Localization key for the tier title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced => "advanced",
            DifficultyTier::Expert => "expert",
        }
    }

    /// Localization key for the one-line tier description.
    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner_desc",
            DifficultyTier::Intermediate => "intermediate_desc",
            DifficultyTier::Advanced => "advanced_desc",
            DifficultyTier::Expert => "expert_desc",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

impl FromStr for DifficultyTier {
    type Err = ParseTierError;

    /// Accepts the storage key or the lowercase title key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        DifficultyTier::ALL
            .into_iter()
            .find(|tier| tier.storage_key() == normalized)
            .ok_or_else(|| ParseTierError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(DifficultyTier::Beginner < DifficultyTier::Intermediate);
        assert!(DifficultyTier::Advanced < DifficultyTier::Expert);
        let mut shuffled = vec![
            DifficultyTier::Expert,
            DifficultyTier::Beginner,
            DifficultyTier::Advanced,
            DifficultyTier::Intermediate,
        ];
        shuffled.sort();
        assert_eq!(shuffled, DifficultyTier::ALL);
    }

    #[test]
    fn parses_storage_and_title_keys() {
        assert_eq!("EXPERT".parse::<DifficultyTier>(), Ok(DifficultyTier::Expert));
        assert_eq!(
            "intermediate".parse::<DifficultyTier>(),
            Ok(DifficultyTier::Intermediate)
        );
        assert!("legendary".parse::<DifficultyTier>().is_err());
    }

    #[test]
    fn serde_uses_storage_key() {
        let json = serde_json::to_string(&DifficultyTier::Advanced).unwrap();
        assert_eq!(json, "\"ADVANCED\"");
    }
}

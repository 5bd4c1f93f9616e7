//! Read-only vocabulary catalog.
//!
//! The catalog is static content: sections grouped by tier, each with an
//! ordered list of words. Sessions and the progress aggregator only read it.

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{DifficultyTier, Section, SectionId};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),

    #[error("{tier} section orders must be 1..={expected_max}, found {found:?}")]
    NonContiguousOrder {
        tier: DifficultyTier,
        expected_max: usize,
        found: Vec<u32>,
    },

    #[error("word {word:?} in section {section} is tagged {found}, expected {expected}")]
    TierMismatch {
        section: SectionId,
        word: String,
        expected: DifficultyTier,
        found: DifficultyTier,
    },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of sections and their words.
pub trait Catalog: Send + Sync {
    /// Sections of one tier, ordered by `order`.
    fn sections_for_tier(&self, tier: DifficultyTier) -> Vec<Section>;

    fn section(&self, id: &SectionId) -> Option<Section>;

    /// Every section, tier by tier.
    fn sections(&self) -> Vec<Section> {
        DifficultyTier::ALL
            .into_iter()
            .flat_map(|tier| self.sections_for_tier(tier))
            .collect()
    }

    /// The section directly before `section` in its tier, if any.
    fn previous_in_tier(&self, section: &Section) -> Option<Section> {
        let previous_order = section.order().checked_sub(1)?;
        self.sections_for_tier(section.tier())
            .into_iter()
            .find(|s| s.order() == previous_order)
    }

    /// The section directly after `section` in its tier, if any.
    fn next_in_tier(&self, section: &Section) -> Option<Section> {
        let next_order = section.order().checked_add(1)?;
        self.sections_for_tier(section.tier())
            .into_iter()
            .find(|s| s.order() == next_order)
    }
}

/// In-memory catalog validated at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    by_tier: BTreeMap<DifficultyTier, Vec<Section>>,
}

#[derive(Deserialize)]
struct CatalogFile {
    sections: Vec<Section>,
}

impl StaticCatalog {
    /// Builds a catalog from sections in any order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if ids repeat, a tier's orders are not exactly
    /// `1..=n`, or a word is tagged with a different tier than its section.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut by_tier: BTreeMap<DifficultyTier, Vec<Section>> = BTreeMap::new();

        for section in sections {
            if !seen.insert(section.id().clone()) {
                return Err(CatalogError::DuplicateSection(section.id().clone()));
            }
            if let Some(word) = section.words().iter().find(|w| w.tier() != section.tier()) {
                return Err(CatalogError::TierMismatch {
                    section: section.id().clone(),
                    word: word.source_text().to_string(),
                    expected: section.tier(),
                    found: word.tier(),
                });
            }
            by_tier.entry(section.tier()).or_default().push(section);
        }

        for (tier, sections) in &mut by_tier {
            sections.sort_by_key(Section::order);
            let orders: Vec<u32> = sections.iter().map(Section::order).collect();
            let contiguous = orders
                .iter()
                .zip(1_u32..)
                .all(|(order, expected)| *order == expected);
            if !contiguous {
                return Err(CatalogError::NonContiguousOrder {
                    tier: *tier,
                    expected_max: sections.len(),
                    found: orders,
                });
            }
        }

        Ok(Self { by_tier })
    }

    /// Parses `{"sections": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or any validation error
    /// from [`StaticCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.sections)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_tier.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for StaticCatalog {
    fn sections_for_tier(&self, tier: DifficultyTier) -> Vec<Section> {
        self.by_tier.get(&tier).cloned().unwrap_or_default()
    }

    fn section(&self, id: &SectionId) -> Option<Section> {
        self.by_tier
            .values()
            .flatten()
            .find(|s| s.id() == id)
            .cloned()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing a `SectionId` from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionIdError {
    #[error("section id cannot be empty")]
    Empty,

    #[error("section id contains invalid character {ch:?}: {raw}")]
    InvalidChar { raw: String, ch: char },
}

/// Stable identifier for a Section (`basic_greetings`, `food_drinks`, ...).
///
/// Only ASCII lowercase letters, digits and underscores are accepted so the id
/// can double as a persistence key.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Creates a new `SectionId`.
    ///
    /// # Errors
    ///
    /// Returns `SectionIdError` if the id is empty or contains characters
    /// outside `[a-z0-9_]`.
    pub fn new(id: impl Into<String>) -> Result<Self, SectionIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(SectionIdError::Empty);
        }
        if let Some(ch) = id
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(SectionIdError::InvalidChar { raw: id, ch });
        }
        Ok(Self(id))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SectionId {
    type Error = SectionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

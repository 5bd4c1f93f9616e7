use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion ratio a section needs before the next section in its tier opens.
pub const UNLOCK_THRESHOLD: f64 = 0.70;

/// Completion ratio in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);
    pub const COMPLETE: Progress = Progress(1.0);

    /// Creates a progress value, clamping into `[0, 1]`.
    ///
    /// Non-finite input collapses to zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::ZERO
        }
    }

    /// `part / whole`, or zero for an empty whole.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self::new(part as f64 / whole as f64)
    }

    /// Unweighted mean of the given values, zero when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(values: &[Progress]) -> Self {
        if values.is_empty() {
            return Self::ZERO;
        }
        let total: f64 = values.iter().map(|p| p.0).sum();
        Self::new(total / values.len() as f64)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this value opens the following section under `threshold`.
    #[must_use]
    pub fn meets_threshold(self, threshold: f64) -> bool {
        self.0 >= threshold
    }

    /// Whole-number percentage, rounded down.
    ///
    /// The nudge keeps `0.29` from landing just under `29` after scaling.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0 + 1e-9).floor() as u8
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Whether a section can be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStatus {
    Locked,
    Unlocked,
}

impl LockStatus {
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, LockStatus::Locked)
    }
}

mod ids;
mod language;
mod progress;
mod section;
mod session;
mod settings;
mod tier;
mod word;

pub use ids::{SectionId, SectionIdError};
pub use language::{Language, ParseLanguageError};
pub use progress::{LockStatus, Progress, UNLOCK_THRESHOLD};
pub use section::{Section, SectionView};
pub use session::{SessionSummary, SessionSummaryError};
pub use settings::{SessionConfig, SessionConfigError};
pub use tier::{DifficultyTier, ParseTierError};
pub use word::{Word, WordError};

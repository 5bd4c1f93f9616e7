use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{SectionIdError, SessionConfigError, WordError};

/// Umbrella error for callers that only need to know "the core rejected this".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    SectionId(#[from] SectionIdError),
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    SessionConfig(#[from] SessionConfigError),
}

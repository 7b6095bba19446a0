//! Error types for the Dataset Ledger Core.

use thiserror::Error;

/// Field validation errors.
///
/// One variant per field rule; the validator returns the first rule that
/// fails, in the documented check order.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content hash must be exactly 32 bytes, got {len}")]
    InvalidHash { len: usize },

    #[error("title must be 1 to 100 characters")]
    InvalidTitle,

    #[error("description must be at most 500 characters")]
    InvalidDescription,

    #[error("at most 10 co-authors allowed, got {count}")]
    TooManyCoAuthors { count: usize },

    #[error("category must be 1 to 50 characters")]
    InvalidCategory,

    #[error("every tag must be 1 to 30 characters")]
    InvalidTags,

    #[error("unknown license: {0:?}")]
    InvalidLicense(String),

    #[error("metadata must be at most 1024 bytes, got {len}")]
    InvalidMetadata { len: usize },
}

impl ValidationError {
    /// Stable numeric code for this error kind.
    ///
    /// Embedders that surface ledger errors over a wire protocol rely on
    /// these values staying fixed.
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidHash { .. } => 101,
            Self::InvalidTitle => 103,
            Self::InvalidDescription => 104,
            Self::TooManyCoAuthors { .. } => 105,
            Self::InvalidMetadata { .. } => 111,
            Self::InvalidCategory => 113,
            Self::InvalidTags => 114,
            Self::InvalidLicense(_) => 115,
        }
    }
}

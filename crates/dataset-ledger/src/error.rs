//! Error types for the ledger.

use dataset_ledger_core::{DataHash, ValidationError};
use thiserror::Error;

use crate::transfer::TransferError;

/// Errors that can occur during registry operations.
///
/// Every precondition violation maps to exactly one variant; no operation
/// partially applies state before returning one of these.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A field constraint was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured registration capacity is exhausted.
    #[error("maximum dataset count reached ({limit})")]
    MaxDatasetsExceeded { limit: u64 },

    /// A dataset with this content hash is already registered.
    #[error("dataset already registered for hash {0}")]
    HashExists(DataHash),

    /// No dataset registered for the given hash.
    #[error("no dataset registered for the given hash")]
    DatasetNotFound,

    /// The caller does not own the dataset.
    #[error("caller is not the dataset owner")]
    NoPermission,

    /// The caller is not the admin.
    #[error("caller is not the admin")]
    NotAuthorized,

    /// The fee transfer collaborator failed; nothing was registered.
    #[error("fee transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

impl LedgerError {
    /// Stable numeric code for this error kind.
    ///
    /// Embedders that surface ledger errors over a wire protocol rely on
    /// these values staying fixed.
    pub fn code(&self) -> u32 {
        match self {
            Self::Validation(e) => e.code(),
            Self::HashExists(_) => 100,
            Self::NotAuthorized => 102,
            Self::DatasetNotFound => 107,
            Self::NoPermission => 110,
            Self::MaxDatasetsExceeded { .. } => 112,
            Self::Transfer(_) => 117,
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_stable() {
        let hash = DataHash::from_bytes([0u8; 32]);
        assert_eq!(LedgerError::HashExists(hash).code(), 100);
        assert_eq!(LedgerError::NotAuthorized.code(), 102);
        assert_eq!(LedgerError::DatasetNotFound.code(), 107);
        assert_eq!(LedgerError::NoPermission.code(), 110);
        assert_eq!(LedgerError::MaxDatasetsExceeded { limit: 1 }.code(), 112);
        assert_eq!(
            LedgerError::Transfer(TransferError::Rejected("broke".into())).code(),
            117
        );
        assert_eq!(
            LedgerError::Validation(ValidationError::InvalidTitle).code(),
            103
        );
    }
}

//! Collaborator traits supplied by the embedding environment.
//!
//! The ledger consumes a value-transfer primitive and a monotonic sequence
//! counter as opaque interfaces. It implements neither; the testkit crate
//! provides recording and manually-driven implementations for tests.

use std::sync::Arc;

use dataset_ledger_core::Principal;
use thiserror::Error;

/// Errors surfaced by the value-transfer collaborator.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The payer cannot cover the requested amount.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    /// The collaborator rejected the transfer for a reason of its own.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// A single atomic value transfer between two principals.
///
/// Invoked once per registration, for the fee configured at that moment,
/// from the registrant to the current admin. A failure aborts the
/// registration with no ledger mutation.
pub trait FeeTransfer {
    fn transfer(&self, amount: u64, from: &Principal, to: &Principal) -> Result<(), TransferError>;
}

/// The external monotonic counter used as a timestamp source.
pub trait SequenceSource {
    /// The current block height (or equivalent sequence value).
    fn block_height(&self) -> u64;
}

impl<T: FeeTransfer + ?Sized> FeeTransfer for Arc<T> {
    fn transfer(&self, amount: u64, from: &Principal, to: &Principal) -> Result<(), TransferError> {
        (**self).transfer(amount, from, to)
    }
}

impl<S: SequenceSource + ?Sized> SequenceSource for Arc<S> {
    fn block_height(&self) -> u64 {
        (**self).block_height()
    }
}

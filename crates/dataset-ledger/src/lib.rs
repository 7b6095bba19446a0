//! # Dataset Ledger
//!
//! A content-addressed dataset registration ledger. Datasets are keyed by a
//! 32-byte content hash, validated against strict field constraints,
//! charged a registration fee, and indexed both by hash and by sequential
//! id for later update, deactivation, and lookup.
//!
//! ## Key Concepts
//!
//! - **Content hash**: The primary key. Unique forever; registering a hash
//!   that is already present is rejected, never overwritten.
//! - **Sequential ids**: Contiguous from 0, never reused; the next id
//!   always equals the count of successful registrations.
//! - **Ownership**: Only the registering caller may update or deactivate a
//!   dataset. Deactivation is one-way.
//! - **Collaborators**: The caller identity, the block-height counter, and
//!   the value transfer are supplied by the embedding environment through
//!   [`FeeTransfer`] and [`SequenceSource`].
//!
//! ## Usage
//!
//! ```rust
//! use dataset_ledger::{FeeTransfer, LedgerConfig, Registry, SequenceSource, TransferError};
//! use dataset_ledger::core::{Principal, Registration};
//!
//! struct NoFee;
//!
//! impl FeeTransfer for NoFee {
//!     fn transfer(&self, _: u64, _: &Principal, _: &Principal) -> Result<(), TransferError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Height(u64);
//!
//! impl SequenceSource for Height {
//!     fn block_height(&self) -> u64 {
//!         self.0
//!     }
//! }
//!
//! let admin = Principal::new("admin");
//! let registry = Registry::new(LedgerConfig::new(admin), NoFee, Height(7));
//!
//! let registration = Registration::builder(vec![0x11; 32], "Climate observations")
//!     .description("Hourly sensor readings, 2018-2025")
//!     .category("Science")
//!     .tag("climate")
//!     .license("CC-BY")
//!     .build();
//!
//! let id = registry
//!     .register(&Principal::new("alice"), registration)
//!     .unwrap();
//! assert_eq!(id.as_u64(), 0);
//! assert!(registry.get_by_id(id).unwrap().status);
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod state;
pub mod transfer;

// Re-export the core crate for convenience
pub use dataset_ledger_core as core;

pub use config::{LedgerConfig, DEFAULT_MAX_DATASETS, DEFAULT_REGISTRATION_FEE};
pub use error::{LedgerError, Result};
pub use registry::Registry;
pub use state::LedgerState;
pub use transfer::{FeeTransfer, SequenceSource, TransferError};

// Re-export commonly used core types
pub use dataset_ledger_core::{
    DataHash, Dataset, DatasetId, DatasetUpdate, License, Principal, Registration,
    ValidationError,
};

//! # Dataset Ledger Testkit
//!
//! Testing utilities for the Dataset Ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: A registry wired to a recording fee-transfer
//!   collaborator and a manually-advanced block height
//! - **Generators**: Proptest strategies for valid registrations and
//!   individual fields
//!
//! ## Test Fixtures
//!
//! Quickly set up a registry with observable collaborators:
//!
//! ```rust
//! use dataset_ledger_testkit::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let caller = TestFixture::principal(1);
//!
//! let id = fixture
//!     .registry
//!     .register(&caller, TestFixture::registration(0x01))
//!     .unwrap();
//! assert_eq!(id.as_u64(), 0);
//! assert_eq!(fixture.transfers.records().len(), 1);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use dataset_ledger_testkit::generators::valid_registration;
//!
//! proptest! {
//!     #[test]
//!     fn registers_anything_valid(registration in valid_registration()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{init_tracing, ManualHeight, RecordingTransfer, TestFixture, TransferRecord};
pub use generators::valid_registration;

//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a registry wired to a
//! recording fee-transfer collaborator and a manually-advanced block
//! height.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use dataset_ledger::{
    FeeTransfer, LedgerConfig, Registry, SequenceSource, TransferError,
};
use dataset_ledger_core::{Principal, Registration};

/// A recorded value transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: Principal,
    pub to: Principal,
}

/// Fee-transfer collaborator that records every successful transfer.
///
/// Call [`fail_next`](Self::fail_next) to make the next transfer fail,
/// for atomicity tests; nothing is recorded for a failed transfer.
#[derive(Debug, Default)]
pub struct RecordingTransfer {
    records: Mutex<Vec<TransferRecord>>,
    fail_next: AtomicBool,
}

impl RecordingTransfer {
    /// Create a collaborator with no recorded transfers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything transferred so far, in order.
    pub fn records(&self) -> Vec<TransferRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Make the next transfer fail with [`TransferError::Rejected`].
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl FeeTransfer for RecordingTransfer {
    fn transfer(&self, amount: u64, from: &Principal, to: &Principal) -> Result<(), TransferError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(TransferError::Rejected("induced failure".to_owned()));
        }

        self.records.lock().unwrap().push(TransferRecord {
            amount,
            from: from.clone(),
            to: to.clone(),
        });
        Ok(())
    }
}

/// Manually-advanced block height.
#[derive(Debug, Default)]
pub struct ManualHeight(AtomicU64);

impl ManualHeight {
    /// Start at the given height.
    pub fn new(height: u64) -> Self {
        Self(AtomicU64::new(height))
    }

    /// Jump to the given height.
    pub fn set(&self, height: u64) {
        self.0.store(height, Ordering::SeqCst);
    }

    /// Advance by one block; returns the new height.
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl SequenceSource for ManualHeight {
    fn block_height(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Forward ledger tracing to the test writer.
///
/// Safe to call from every test; only the first call installs a
/// subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A registry wired to recording collaborators.
pub struct TestFixture {
    pub transfers: Arc<RecordingTransfer>,
    pub chain: Arc<ManualHeight>,
    pub registry: Registry<Arc<RecordingTransfer>, Arc<ManualHeight>>,
}

impl TestFixture {
    /// Registry with default configuration and [`admin`](Self::admin) as
    /// admin.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::new(Self::admin()))
    }

    /// Registry with the given configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        init_tracing();
        let transfers = Arc::new(RecordingTransfer::new());
        let chain = Arc::new(ManualHeight::default());
        let registry = Registry::new(config, Arc::clone(&transfers), Arc::clone(&chain));
        Self {
            transfers,
            chain,
            registry,
        }
    }

    /// The fixture's admin principal.
    pub fn admin() -> Principal {
        Principal::new("ST-ADMIN")
    }

    /// A numbered test principal distinct from the admin.
    pub fn principal(n: usize) -> Principal {
        Principal::new(format!("ST-USER-{n}"))
    }

    /// A registration that passes every validation check, with a hash of
    /// 32 copies of `fill`.
    pub fn registration(fill: u8) -> Registration {
        Registration::builder(vec![fill; 32], "Test Title")
            .description("Test Description")
            .co_author(Self::principal(99))
            .category("Science")
            .tags(["tag1", "tag2"])
            .license("CC-BY")
            .build()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

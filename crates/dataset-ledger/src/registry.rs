//! The Registry: the ledger's public operation surface.
//!
//! Orchestrates validation, the fee transfer, and state mutation for
//! register, update, and deactivate; exposes the read accessors and the
//! admin configuration operations.

use std::sync::Mutex;

use dataset_ledger_core::{
    validate_registration, validate_update, DataHash, Dataset, DatasetId, DatasetUpdate,
    Principal, Registration, ValidationError,
};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};
use crate::state::LedgerState;
use crate::transfer::{FeeTransfer, SequenceSource};

/// The dataset registry.
///
/// Every operation runs to completion under one lock acquisition over the
/// whole ledger state, so no operation observes a partially-applied
/// mutation, and a failed precondition leaves the state untouched. The fee
/// transfer runs inside the same critical section; its failure aborts the
/// registration before any index is written.
pub struct Registry<T, S> {
    /// Value-transfer collaborator; carries the registration fee.
    transfer: T,
    /// Monotonic counter collaborator; stamps records with block heights.
    chain: S,
    state: Mutex<LedgerState>,
}

impl<T: FeeTransfer, S: SequenceSource> Registry<T, S> {
    /// Create a registry with empty state.
    pub fn new(config: LedgerConfig, transfer: T, chain: S) -> Self {
        Self {
            transfer,
            chain,
            state: Mutex::new(LedgerState::new(config)),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a dataset.
    ///
    /// Validates every field (the first failing check decides the error),
    /// enforces the capacity and hash-uniqueness preconditions, transfers
    /// the current registration fee from the caller to the current admin,
    /// and only then inserts the dataset into both indices.
    ///
    /// Returns the assigned id; ids are contiguous starting at 0.
    pub fn register(&self, caller: &Principal, registration: Registration) -> Result<DatasetId> {
        let mut state = self.state.lock().unwrap();

        let license = validate_registration(&registration)?;

        if state.count() >= state.max_datasets() {
            return Err(LedgerError::MaxDatasetsExceeded {
                limit: state.max_datasets(),
            });
        }

        let hash =
            DataHash::try_from(registration.hash.as_ref()).map_err(|_| {
                ValidationError::InvalidHash {
                    len: registration.hash.len(),
                }
            })?;

        if state.contains(&hash) {
            return Err(LedgerError::HashExists(hash));
        }

        // The fee and admin are read at this moment: a fee changed between
        // registrations applies to later registrations, not earlier ones.
        let fee = state.registration_fee();
        let admin = state.admin().clone();
        self.transfer.transfer(fee, caller, &admin)?;

        let id = DatasetId::new(state.next_id());
        let dataset = Dataset {
            id,
            hash,
            title: registration.title,
            description: registration.description,
            owner: caller.clone(),
            co_authors: registration.co_authors,
            timestamp: self.chain.block_height(),
            category: registration.category,
            tags: registration.tags,
            license,
            status: true,
            metadata: registration.metadata,
        };
        state.insert(dataset);

        tracing::debug!(id = id.as_u64(), hash = %hash, "dataset registered");
        Ok(id)
    }

    /// Replace the title and description of a dataset the caller owns.
    ///
    /// Stamps the dataset with the current block height and overwrites its
    /// update record. Everything else, including the secondary index, is
    /// untouched.
    pub fn update(
        &self,
        caller: &Principal,
        hash: &[u8],
        new_title: &str,
        new_description: &str,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        let hash = DataHash::try_from(hash).map_err(|_| LedgerError::DatasetNotFound)?;
        let dataset = state.get(&hash).ok_or(LedgerError::DatasetNotFound)?;
        if dataset.owner != *caller {
            return Err(LedgerError::NoPermission);
        }
        let id = dataset.id;
        validate_update(new_title, new_description)?;

        state.apply_update(
            &hash,
            DatasetUpdate {
                title: new_title.to_owned(),
                description: new_description.to_owned(),
                timestamp: self.chain.block_height(),
                updater: caller.clone(),
            },
        );

        tracing::debug!(id = id.as_u64(), "dataset updated");
        Ok(())
    }

    /// Deactivate a dataset the caller owns.
    ///
    /// One-way: no operation ever sets the status back to active.
    /// Deactivating an already-inactive dataset succeeds and changes
    /// nothing.
    pub fn deactivate(&self, caller: &Principal, hash: &[u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        let hash = DataHash::try_from(hash).map_err(|_| LedgerError::DatasetNotFound)?;
        let dataset = state.get(&hash).ok_or(LedgerError::DatasetNotFound)?;
        if dataset.owner != *caller {
            return Err(LedgerError::NoPermission);
        }
        let id = dataset.id;

        state.deactivate(&hash);

        tracing::debug!(id = id.as_u64(), "dataset deactivated");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Look up a dataset by content hash.
    ///
    /// A hash of the wrong length is simply not found.
    pub fn get_by_hash(&self, hash: &[u8]) -> Option<Dataset> {
        let state = self.state.lock().unwrap();
        let hash = DataHash::try_from(hash).ok()?;
        state.get(&hash).cloned()
    }

    /// Look up a dataset by id, indirectly through the secondary index.
    pub fn get_by_id(&self, id: DatasetId) -> Option<Dataset> {
        self.state.lock().unwrap().get_by_id(id).cloned()
    }

    /// The most recent update record for a dataset id.
    pub fn get_update(&self, id: DatasetId) -> Option<DatasetUpdate> {
        self.state.lock().unwrap().update_record(id).cloned()
    }

    /// Number of successful registrations; equal to the next id.
    pub fn count(&self) -> u64 {
        self.state.lock().unwrap().count()
    }

    /// The fee currently charged per registration.
    pub fn registration_fee(&self) -> u64 {
        self.state.lock().unwrap().registration_fee()
    }

    /// The current admin identity.
    pub fn admin(&self) -> Principal {
        self.state.lock().unwrap().admin().clone()
    }

    /// The configured registration capacity.
    pub fn max_datasets(&self) -> u64 {
        self.state.lock().unwrap().max_datasets()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin Configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the admin identity. Admin only.
    ///
    /// The new admin receives subsequent registration fees and becomes the
    /// only identity allowed here and in [`set_fee`](Self::set_fee).
    pub fn set_admin(&self, caller: &Principal, new_admin: Principal) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.admin() != caller {
            return Err(LedgerError::NotAuthorized);
        }

        tracing::debug!(new_admin = %new_admin, "admin changed");
        state.set_admin(new_admin);
        Ok(())
    }

    /// Replace the registration fee. Admin only.
    ///
    /// Applies to the next registration. No bounds beyond the type; range
    /// and overflow policy belong to the transfer collaborator.
    pub fn set_fee(&self, caller: &Principal, new_fee: u64) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.admin() != caller {
            return Err(LedgerError::NotAuthorized);
        }

        tracing::debug!(new_fee, "registration fee changed");
        state.set_registration_fee(new_fee);
        Ok(())
    }
}

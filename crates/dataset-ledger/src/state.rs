//! The ledger state aggregate.
//!
//! A single explicit aggregate holds both indices, the update history, the
//! id counter, and the admin configuration. There is no implicit global;
//! [`Registry`](crate::Registry) owns the one instance and serializes every
//! operation against it.

use std::collections::HashMap;

use dataset_ledger_core::{DataHash, Dataset, DatasetId, DatasetUpdate, Principal};

use crate::config::LedgerConfig;

/// The mutable ledger state.
///
/// The two indices are kept in sync only by registration: `ids` is written
/// exactly once per successful registration and never touched by update or
/// deactivate.
#[derive(Debug)]
pub struct LedgerState {
    /// Next id to assign; equal to the count of successful registrations.
    next_id: u64,

    /// Upper bound on registrations.
    max_datasets: u64,

    /// Fee charged per registration.
    registration_fee: u64,

    /// Identity authorized to change fee and admin.
    admin: Principal,

    /// Primary index: content hash -> dataset.
    datasets: HashMap<DataHash, Dataset>,

    /// Secondary index: id -> content hash.
    ids: HashMap<DatasetId, DataHash>,

    /// Update history: id -> most recent update record.
    updates: HashMap<DatasetId, DatasetUpdate>,
}

impl LedgerState {
    /// Empty state: no datasets, id counter at zero, configuration as given.
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            next_id: 0,
            max_datasets: config.max_datasets,
            registration_fee: config.registration_fee,
            admin: config.admin,
            datasets: HashMap::new(),
            ids: HashMap::new(),
            updates: HashMap::new(),
        }
    }

    /// The id the next successful registration will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Number of successful registrations.
    pub fn count(&self) -> u64 {
        self.next_id
    }

    /// The configured registration capacity.
    pub fn max_datasets(&self) -> u64 {
        self.max_datasets
    }

    /// The fee currently charged per registration.
    pub fn registration_fee(&self) -> u64 {
        self.registration_fee
    }

    /// Replace the registration fee.
    pub fn set_registration_fee(&mut self, fee: u64) {
        self.registration_fee = fee;
    }

    /// The current admin identity.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Replace the admin identity.
    pub fn set_admin(&mut self, admin: Principal) {
        self.admin = admin;
    }

    /// Whether a dataset is registered for this hash.
    pub fn contains(&self, hash: &DataHash) -> bool {
        self.datasets.contains_key(hash)
    }

    /// Look up a dataset by content hash.
    pub fn get(&self, hash: &DataHash) -> Option<&Dataset> {
        self.datasets.get(hash)
    }

    /// Look up a dataset by id, indirectly through the secondary index.
    pub fn get_by_id(&self, id: DatasetId) -> Option<&Dataset> {
        self.ids.get(&id).and_then(|hash| self.datasets.get(hash))
    }

    /// The most recent update record for a dataset id.
    pub fn update_record(&self, id: DatasetId) -> Option<&DatasetUpdate> {
        self.updates.get(&id)
    }

    /// Insert a freshly registered dataset into both indices and advance
    /// the id counter. The caller has already checked capacity, uniqueness,
    /// and that `dataset.id` equals the next id.
    pub fn insert(&mut self, dataset: Dataset) {
        self.ids.insert(dataset.id, dataset.hash);
        self.datasets.insert(dataset.hash, dataset);
        self.next_id += 1;
    }

    /// Replace the mutable fields of a dataset and overwrite its update
    /// record. The secondary index is not touched.
    pub fn apply_update(&mut self, hash: &DataHash, update: DatasetUpdate) {
        if let Some(dataset) = self.datasets.get_mut(hash) {
            dataset.title = update.title.clone();
            dataset.description = update.description.clone();
            dataset.timestamp = update.timestamp;
            self.updates.insert(dataset.id, update);
        }
    }

    /// Set a dataset's status to inactive. One-way; nothing in the ledger
    /// sets it back.
    pub fn deactivate(&mut self, hash: &DataHash) {
        if let Some(dataset) = self.datasets.get_mut(hash) {
            dataset.status = false;
        }
    }
}

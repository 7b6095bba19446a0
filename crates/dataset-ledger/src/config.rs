//! Ledger configuration.

use dataset_ledger_core::Principal;

/// Default maximum number of registered datasets.
pub const DEFAULT_MAX_DATASETS: u64 = 10_000;

/// Default registration fee.
pub const DEFAULT_REGISTRATION_FEE: u64 = 500;

/// Configuration for a [`Registry`](crate::Registry).
///
/// The fee and admin are initial values; both can be changed at runtime
/// through the admin operations. The capacity is fixed for the life of the
/// registry.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Upper bound on successful registrations.
    pub max_datasets: u64,

    /// Fee transferred from the registrant to the admin per registration.
    pub registration_fee: u64,

    /// The initial admin identity.
    pub admin: Principal,
}

impl LedgerConfig {
    /// Configuration with default capacity and fee, and the given admin.
    pub fn new(admin: Principal) -> Self {
        Self {
            max_datasets: DEFAULT_MAX_DATASETS,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            admin,
        }
    }
}

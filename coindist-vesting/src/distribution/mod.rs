//! Process-wide genesis distribution.
//!
//! The table and the default checker are built on first use and never torn
//! down. Readers need no synchronization.

mod addresses;
pub mod registry;

use std::sync::Arc;

use coindist_common::{Address, TransactionInput};
use once_cell::sync::Lazy;

use crate::checker::LockedOutputChecker;
use crate::error::Result;
use crate::policy::FixedUnlock;
use registry::AddressRegistry;

static GENESIS_REGISTRY: Lazy<Arc<AddressRegistry>> = Lazy::new(|| {
    match AddressRegistry::genesis() {
        Ok(registry) => Arc::new(registry),
        Err(e) => panic!("Invalid genesis distribution: {}", e),
    }
});

static DEFAULT_CHECKER: Lazy<LockedOutputChecker> = Lazy::new(|| {
    LockedOutputChecker::new(Arc::clone(&GENESIS_REGISTRY), &FixedUnlock::default())
});

/// Start-up hook: validates the genesis table and builds the shared state.
///
/// Call before serving anything; an error means the node must not start.
pub fn init() -> Result<()> {
    let registry = AddressRegistry::genesis()?;
    registry.verify_genesis()?;

    Lazy::force(&DEFAULT_CHECKER);
    tracing::info!(
        "Genesis distribution ready: {} addresses, {} unlocked",
        registry.len(),
        DEFAULT_CHECKER.boundary()
    );
    Ok(())
}

/// The genesis registry shared by the whole process.
///
/// # Panics
///
/// Panics on first use if the supply does not divide evenly between the
/// distribution addresses. `init` reports the same defect as an error.
pub fn genesis_registry() -> Arc<AddressRegistry> {
    Arc::clone(&GENESIS_REGISTRY)
}

/// Checker for the shipped fixed policy.
pub fn default_checker() -> &'static LockedOutputChecker {
    &DEFAULT_CHECKER
}

/// All distribution addresses, in unlock order.
pub fn all_distribution_addresses() -> &'static [Address] {
    GENESIS_REGISTRY.all()
}

/// Distribution addresses whose outputs may be spent.
pub fn unlocked_distribution_addresses() -> &'static [Address] {
    DEFAULT_CHECKER.unlocked_addresses()
}

/// Distribution addresses whose outputs may not be spent yet.
pub fn locked_distribution_addresses() -> &'static [Address] {
    DEFAULT_CHECKER.locked_addresses()
}

/// Returns true if the transaction spends outputs owned by a locked address.
pub fn is_transaction_locked(inputs: &[TransactionInput]) -> bool {
    DEFAULT_CHECKER.is_locked(inputs)
}

//! Genesis distribution vesting policy.
//!
//! A fixed, ordered table of distribution addresses ([`AddressRegistry`]) is
//! split by an [`UnlockPolicy`] into spendable and locked parts, and the
//! [`LockedOutputChecker`] tells transaction validation whether a set of
//! inputs touches the locked part.

pub mod checker;
pub mod config;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod policy;

pub use checker::LockedOutputChecker;
pub use config::DistributionConfig;
pub use distribution::registry::AddressRegistry;
pub use distribution::{
    all_distribution_addresses, default_checker, genesis_registry, init,
    is_transaction_locked, locked_distribution_addresses, unlocked_distribution_addresses,
};
pub use error::{DistributionError, Result};
pub use policy::{FixedUnlock, ScheduledUnlock, UnlockPolicy};

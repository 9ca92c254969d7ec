use std::collections::HashSet;
use std::sync::Arc;

use coindist_common::{Address, TransactionInput};

use crate::distribution::registry::AddressRegistry;
use crate::policy::UnlockPolicy;

/// Classifies spent outputs as coming from locked distribution addresses.
///
/// Runs on the validation hot path, so the locked-address set is built once
/// per boundary and reused for every lookup. The checker only reports the
/// fact; turning it into a rejection is up to the validation pipeline.
#[derive(Debug, Clone)]
pub struct LockedOutputChecker {
    registry: Arc<AddressRegistry>,
    boundary: usize,
    locked: HashSet<Address>,
}

impl LockedOutputChecker {
    pub fn new(registry: Arc<AddressRegistry>, policy: &dyn UnlockPolicy) -> Self {
        let boundary = policy.unlock_boundary(registry.len());
        tracing::debug!("Unlock policy '{}' yields boundary {}", policy.name(), boundary);
        Self::with_boundary(registry, boundary)
    }

    /// Checker for an explicit boundary, clamped to the registry size.
    pub fn with_boundary(registry: Arc<AddressRegistry>, boundary: usize) -> Self {
        let boundary = boundary.min(registry.len());
        let locked = build_locked_set(&registry, boundary);

        Self {
            registry,
            boundary,
            locked,
        }
    }

    pub fn registry(&self) -> &AddressRegistry {
        &self.registry
    }

    pub fn boundary(&self) -> usize {
        self.boundary
    }

    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    pub fn unlocked_addresses(&self) -> &[Address] {
        self.registry.unlocked(self.boundary)
    }

    pub fn locked_addresses(&self) -> &[Address] {
        self.registry.locked(self.boundary)
    }

    pub fn is_address_locked(&self, address: &Address) -> bool {
        self.locked.contains(address)
    }

    /// Returns true if any input spends an output owned by a locked address.
    ///
    /// Stops at the first locked input. No inputs means nothing is locked.
    pub fn is_locked<'a, I>(&self, inputs: I) -> bool
    where
        I: IntoIterator<Item = &'a TransactionInput>,
    {
        self.first_locked(inputs).is_some()
    }

    /// The first input whose owner is locked, for callers that need to name
    /// the offending output in their rejection.
    pub fn first_locked<'a, I>(&self, inputs: I) -> Option<&'a TransactionInput>
    where
        I: IntoIterator<Item = &'a TransactionInput>,
    {
        if self.locked.is_empty() {
            return None;
        }

        let found = inputs
            .into_iter()
            .find(|input| self.locked.contains(input.owner()));

        if let Some(input) = found {
            tracing::warn!(
                "Input {} spends from locked distribution address {}",
                input.uxid_hex(),
                input.owner()
            );
        }
        found
    }

    /// Re-evaluates `policy` and rebuilds the locked set if the boundary moved.
    ///
    /// Returns whether anything changed.
    pub fn refresh(&mut self, policy: &dyn UnlockPolicy) -> bool {
        let boundary = policy.unlock_boundary(self.registry.len()).min(self.registry.len());
        if boundary == self.boundary {
            return false;
        }

        tracing::info!(
            "Unlock boundary moved from {} to {} (policy '{}')",
            self.boundary,
            boundary,
            policy.name()
        );
        self.boundary = boundary;
        self.locked = build_locked_set(&self.registry, boundary);
        true
    }
}

fn build_locked_set(registry: &AddressRegistry, boundary: usize) -> HashSet<Address> {
    let locked: HashSet<Address> = registry.locked(boundary).iter().cloned().collect();
    tracing::debug!(
        "Built locked distribution set: {} locked, {} unlocked",
        locked.len(),
        boundary
    );
    locked
}

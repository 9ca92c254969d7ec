use std::collections::HashMap;

use coindist_common::Address;

use super::addresses::DISTRIBUTION_ADDRESSES;
use crate::constants::{DISTRIBUTION_ADDRESSES_TOTAL, MAX_COIN_SUPPLY};
use crate::error::{DistributionError, Result};

/// The fixed, ordered set of genesis distribution addresses.
///
/// Membership and order never change after construction. All accessors hand
/// out shared slices, so callers cannot mutate the table.
#[derive(Debug, Clone)]
pub struct AddressRegistry {
    addresses: Box<[Address]>,
    max_supply: u64,
}

impl AddressRegistry {
    /// Builds a registry over `addresses`, splitting `max_supply` evenly.
    ///
    /// Fails if the supply does not divide exactly between the addresses:
    /// the per-address balance would not be exact and every ledger state
    /// derived from it would be wrong.
    pub fn new(addresses: Vec<Address>, max_supply: u64) -> Result<Self> {
        if addresses.is_empty() {
            return Err(DistributionError::EmptyRegistry);
        }

        let total = addresses.len() as u64;
        if max_supply % total != 0 {
            return Err(DistributionError::IndivisibleSupply { max_supply, total });
        }

        Ok(Self {
            addresses: addresses.into_boxed_slice(),
            max_supply,
        })
    }

    /// The hardcoded genesis table with `MAX_COIN_SUPPLY`.
    pub fn genesis() -> Result<Self> {
        Self::with_supply(MAX_COIN_SUPPLY)
    }

    /// The hardcoded genesis table with a different supply.
    pub fn with_supply(max_supply: u64) -> Result<Self> {
        let addresses = DISTRIBUTION_ADDRESSES
            .iter()
            .map(|raw| Address::new_unchecked(*raw))
            .collect();
        Self::new(addresses, max_supply)
    }

    pub fn all(&self) -> &[Address] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    pub fn per_address_balance(&self) -> u64 {
        self.max_supply / self.addresses.len() as u64
    }

    /// Splits the table at `boundary` into (unlocked prefix, locked suffix).
    ///
    /// A boundary past the end unlocks everything.
    pub fn split(&self, boundary: usize) -> (&[Address], &[Address]) {
        self.addresses.split_at(boundary.min(self.addresses.len()))
    }

    pub fn unlocked(&self, boundary: usize) -> &[Address] {
        self.split(boundary).0
    }

    pub fn locked(&self, boundary: usize) -> &[Address] {
        self.split(boundary).1
    }

    /// Position of `address` in unlock order.
    pub fn position(&self, address: &Address) -> Option<usize> {
        self.addresses.iter().position(|a| a == address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.position(address).is_some()
    }

    /// Start-up self-check of the table contents.
    ///
    /// Requires exactly `expected` entries, every one well-formed and unique.
    /// Reports the first defect found.
    pub fn verify(&self, expected: usize) -> Result<()> {
        if self.addresses.len() != expected {
            tracing::error!(
                "Distribution table has {} entries, expected {}",
                self.addresses.len(),
                expected
            );
            return Err(DistributionError::AddressCount {
                expected,
                found: self.addresses.len(),
            });
        }

        let mut seen: HashMap<&Address, usize> = HashMap::with_capacity(self.addresses.len());
        for (index, address) in self.addresses.iter().enumerate() {
            if let Err(source) = Address::key_hash_from_str(address) {
                tracing::error!("Malformed distribution address #{}: {}", index, source);
                return Err(DistributionError::InvalidAddress { index, source });
            }

            if let Some(first) = seen.insert(address, index) {
                tracing::error!("Duplicate distribution address {} (#{} and #{})", address, first, index);
                return Err(DistributionError::DuplicateAddress {
                    address: address.clone(),
                    first,
                    second: index,
                });
            }
        }

        tracing::debug!("Distribution table verified: {} unique addresses", expected);
        Ok(())
    }

    /// `verify` against the genesis address count.
    pub fn verify_genesis(&self) -> Result<()> {
        self.verify(DISTRIBUTION_ADDRESSES_TOTAL)
    }
}

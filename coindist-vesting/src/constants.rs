//! Tokenomics constants for the genesis distribution.
//!
//! Consumed by transaction validation and by wallet/explorer displays.

/// Maximum supply of coins.
///
/// Older commentary quotes one hundred million; the ledger has always used
/// this value.
pub const MAX_COIN_SUPPLY: u64 = 300_000_000;

/// Number of distribution addresses.
pub const DISTRIBUTION_ADDRESSES_TOTAL: usize = 100;

/// Coins allocated to each distribution address at genesis.
pub const DISTRIBUTION_ADDRESS_INITIAL_BALANCE: u64 =
    MAX_COIN_SUPPLY / DISTRIBUTION_ADDRESSES_TOTAL as u64;

/// Number of addresses unlocked from genesis.
///
/// Equal to the total, so no distribution address is currently locked.
pub const INITIAL_UNLOCKED_COUNT: usize = 100;

/// Addresses unlocked per `UNLOCK_TIME_INTERVAL` once a schedule is enabled.
pub const UNLOCK_ADDRESS_RATE: usize = 5;

/// Unlock interval in seconds (one year).
pub const UNLOCK_TIME_INTERVAL: u64 = 60 * 60 * 24 * 365;

const _: () = assert!(
    MAX_COIN_SUPPLY % DISTRIBUTION_ADDRESSES_TOTAL as u64 == 0,
    "MAX_COIN_SUPPLY must be perfectly divisible by DISTRIBUTION_ADDRESSES_TOTAL"
);

const _: () = assert!(
    INITIAL_UNLOCKED_COUNT <= DISTRIBUTION_ADDRESSES_TOTAL,
    "INITIAL_UNLOCKED_COUNT cannot exceed DISTRIBUTION_ADDRESSES_TOTAL"
);

use coindist_common::{Address, AddressError};
use thiserror::Error;

/// Configuration and data defects detected while building the distribution.
///
/// None of these can occur once a registry exists: classification itself
/// never fails.
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("max supply {max_supply} is not divisible by {total} distribution addresses")]
    IndivisibleSupply { max_supply: u64, total: u64 },

    #[error("distribution address table is empty")]
    EmptyRegistry,

    #[error("expected {expected} distribution addresses, found {found}")]
    AddressCount { expected: usize, found: usize },

    #[error("duplicate distribution address {address} at positions {first} and {second}")]
    DuplicateAddress {
        address: Address,
        first: usize,
        second: usize,
    },

    #[error("malformed distribution address at position {index}: {source}")]
    InvalidAddress {
        index: usize,
        #[source]
        source: AddressError,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DistributionError>;

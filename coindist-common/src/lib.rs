//! Types shared between the distribution policy and its consumers.
//!
//! Nothing in this crate knows about vesting: it only describes the ledger
//! entities the policy reads (addresses and spent outputs).

pub mod address;
pub mod transactions;
pub mod utils;

pub use address::{address::Address, errors::AddressError};
pub use transactions::TransactionInput;

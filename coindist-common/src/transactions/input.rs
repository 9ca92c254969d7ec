use serde::{Deserialize, Serialize};

use crate::address::address::Address;

/// An unspent output referenced by a transaction that wants to spend it.
///
/// Owned by the transaction layer; the distribution policy borrows it and
/// only ever reads `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Hash of the output being spent.
    #[serde(with = "hex::serde")]
    pub uxid: [u8; 32],
    /// Address that owns the output.
    pub address: Address,
    pub coins: u64,
    #[serde(default)]
    pub hours: u64,
}

impl TransactionInput {
    pub fn new(uxid: [u8; 32], address: Address, coins: u64, hours: u64) -> Self {
        Self {
            uxid,
            address,
            coins,
            hours,
        }
    }

    pub fn owner(&self) -> &Address {
        &self.address
    }

    pub fn uxid_hex(&self) -> String {
        hex::encode(self.uxid)
    }
}

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::errors::AddressError;

/// Length of the public-key hash carried by an address.
pub const KEY_HASH_LEN: usize = 20;

/// Length of the checksum appended to the encoded payload.
pub const CHECKSUM_LEN: usize = 4;

/// Decoded payload size: key hash, version byte, checksum.
pub const ADDRESS_BYTES_LEN: usize = KEY_HASH_LEN + 1 + CHECKSUM_LEN;

/// The only address version accepted by the ledger.
pub const ADDRESS_VERSION: u8 = 0;

/// A base58-encoded public-key hash.
///
/// Equality and hashing work on the encoded string, which is canonical for a
/// given key hash and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Address::key_hash_from_str(&s)?;
        Ok(Address(s))
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Address::key_hash_from_str(s)?;
        Ok(Address(s.to_string()))
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl std::ops::Deref for Address {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Address {
    /// Wraps an encoded address without checking it.
    ///
    /// Meant for hardcoded tables whose contents are verified by a separate
    /// self-check; anything read from the outside goes through `TryFrom`.
    pub fn new_unchecked(s: impl Into<String>) -> Self {
        Address(s.into())
    }

    /// Encodes a key hash with the ledger's address version.
    pub fn from_key_hash(key_hash: &[u8; KEY_HASH_LEN]) -> Self {
        let mut payload = Vec::with_capacity(ADDRESS_BYTES_LEN);
        payload.extend_from_slice(key_hash);
        payload.push(ADDRESS_VERSION);
        let checksum = checksum(&payload);
        payload.extend_from_slice(&checksum);

        Address(bs58::encode(payload).into_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the given string is a well-formed address.
    pub fn is_valid(address: &str) -> bool {
        Self::key_hash_from_str(address).is_ok()
    }

    /// Returns whether this value would pass `TryFrom` validation.
    pub fn is_well_formed(&self) -> bool {
        Self::is_valid(&self.0)
    }

    /// Decodes an address string and returns the public-key hash it carries.
    pub fn key_hash_from_str(address: &str) -> Result<[u8; KEY_HASH_LEN], AddressError> {
        let bytes = bs58::decode(address).into_vec()?;

        if bytes.len() != ADDRESS_BYTES_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }

        let (body, expected) = bytes.split_at(KEY_HASH_LEN + 1);
        let version = body[KEY_HASH_LEN];
        if version != ADDRESS_VERSION {
            return Err(AddressError::InvalidVersion(version));
        }

        if checksum(body) != expected {
            return Err(AddressError::ChecksumMismatch);
        }

        let mut key_hash = [0u8; KEY_HASH_LEN];
        key_hash.copy_from_slice(&body[..KEY_HASH_LEN]);
        Ok(key_hash)
    }
}

fn checksum(body: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(body);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

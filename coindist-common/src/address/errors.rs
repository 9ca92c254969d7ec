use thiserror::Error;

/// Errors related specifically to address formatting and encoding.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The string is not valid base58.
    #[error("Failed to decode base58 address: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// Decoded payload is not key hash + version + checksum.
    #[error("Invalid address length: {0} bytes")]
    InvalidLength(usize),

    #[error("Invalid address version: {0}")]
    InvalidVersion(u8),

    /// The trailing 4 bytes do not match SHA-256(key hash || version).
    #[error("Address checksum mismatch")]
    ChecksumMismatch,
}

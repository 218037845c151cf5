//! # Hashing Utilities
//!
//! SHA-256, and only SHA-256. The transaction digest format is defined over
//! it and is a compatibility surface — reference digests must reproduce
//! bit-for-bit — so there is exactly one hash function in this crate and no
//! temptation to "upgrade" it.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input and return a fixed-size array.
///
/// This is the form the signing path wants: ECDSA signs the raw 32-byte
/// digest, not its hex rendering.
///
/// # Example
///
/// ```
/// use vela_ledger::crypto::sha256;
///
/// let digest = sha256(b"vela");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the SHA-256 hash and return it as a lowercase hex string.
///
/// This is the form callers compare and store: transaction hashes are
/// exchanged as 64-character hex strings.
///
/// # Example
///
/// ```
/// use vela_ledger::crypto::sha256_hex;
///
/// let digest = sha256_hex(b"vela");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

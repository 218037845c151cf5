//! # Cryptographic Primitives for Vela
//!
//! Everything security-relevant in the ledger flows through this module:
//! every digest, every signature, every key comparison.
//!
//! We deliberately chose boring, widely-deployed cryptography:
//!
//! - **secp256k1 / ECDSA** for signatures — the curve the rest of the
//!   ledger world already speaks, so payer identities and signatures are
//!   interoperable with existing tooling.
//! - **SHA-256** for digests — the transaction hash format is a
//!   compatibility surface and SHA-256 is what it is defined over.
//! - **RFC 6979 deterministic nonces** for signing — no RNG at signing
//!   time, no k-value disasters, and reproducible reference signatures.
//!
//! Everything here is a thin, type-safe wrapper around the `k256` and
//! `sha2` crates. If you're tempted to optimize these functions, go read
//! about timing attacks first and come back when you've lost the urge.

pub mod hash;
pub mod keys;
pub mod signatures;

// Re-export the things people actually need so they don't have to memorize
// the module hierarchy.
pub use hash::{sha256, sha256_hex};
pub use keys::{KeyError, VelaKeypair, VelaPublicKey};
pub use signatures::{sign_digest, verify_digest};

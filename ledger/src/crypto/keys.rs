//! # Key Management
//!
//! secp256k1 keypair handling for Vela payer identities.
//!
//! A payer identity on the ledger is nothing more than a hex-encoded
//! secp256k1 public key. This module handles generation, decoding, and the
//! encoding-normalized comparisons the signing path depends on.
//!
//! ## Why secp256k1?
//!
//! - It is the curve payer identities are encoded on, and the transaction
//!   signature format (DER-encoded ECDSA) is a compatibility surface.
//! - RFC 6979 deterministic nonces remove the classic ECDSA RNG footgun at
//!   signing time.
//! - Well-audited, constant-time implementations exist (`k256`).
//!
//! ## Security considerations
//!
//! - Key generation uses the OS CSPRNG (`OsRng`). If that is broken, this
//!   ledger is the least of your worries.
//! - Secret key bytes are never logged and never appear in `Debug` output.
//!   If you add logging to this module, you will be asked to leave.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while decoding key material.
///
/// Intentionally vague about *why* decoding failed — leaking details about
/// key material through error messages is a classic footgun.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid secret key: not a valid secp256k1 scalar")]
    InvalidSecretKey,

    #[error("invalid public key: not a valid SEC1-encoded secp256k1 point")]
    InvalidPublicKey,
}

/// A Vela keypair wrapping a secp256k1 signing key.
///
/// This is what a wallet holds. The signing key is the crown jewel —
/// whoever has it can move the associated funds, full stop.
///
/// ## Serialization
///
/// `VelaKeypair` intentionally does NOT implement `Serialize`/`Deserialize`.
/// Serializing private keys should be a deliberate, conscious act, not
/// something that happens because someone shoved a keypair into a JSON
/// response.
///
/// # Examples
///
/// ```
/// use vela_ledger::crypto::VelaKeypair;
///
/// let kp = VelaKeypair::generate();
/// let identity = kp.public_key_hex();
/// assert!(identity.starts_with("04")); // uncompressed SEC1 point
/// ```
pub struct VelaKeypair {
    signing_key: SigningKey,
}

/// The public half of a Vela identity, safe to share with the world.
///
/// This is the thing that appears as `payer` on a transaction (hex-encoded).
/// Comparisons go through the decoded curve point, so the same key matches
/// itself regardless of whether it was handed to us compressed or
/// uncompressed.
#[derive(Clone)]
pub struct VelaPublicKey {
    key: VerifyingKey,
}

impl VelaKeypair {
    /// Generate a fresh keypair using the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Reconstruct a keypair from raw 32-byte secret scalar material.
    ///
    /// Fails if the bytes are zero or not below the curve order — not every
    /// 32-byte string is a valid secp256k1 secret key.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    /// Reconstruct a keypair from a hex-encoded secret key.
    ///
    /// Convenience for loading test fixtures and devnet keys. Please don't
    /// put raw hex keys in config files in production — but for devnet,
    /// we're not going to pretend you won't do it anyway.
    pub fn from_secret_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidSecretKey)?;
        if bytes.len() != 32 {
            return Err(KeyError::InvalidSecretKey);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Self::from_secret_bytes(&arr)
    }

    /// Returns the public key associated with this keypair.
    pub fn public_key(&self) -> VelaPublicKey {
        VelaPublicKey {
            key: VerifyingKey::from(&self.signing_key),
        }
    }

    /// The payer identity for this keypair: the uncompressed SEC1 public
    /// key, lowercase hex. This is the string that belongs in
    /// `Transaction::payer`.
    pub fn public_key_hex(&self) -> String {
        self.public_key().to_hex()
    }

    /// Get a reference to the underlying `SigningKey`.
    ///
    /// Needed by the signing path, which talks directly to `k256`.
    /// Try not to pass this around more than necessary.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl Clone for VelaKeypair {
    /// Cloning a keypair is allowed but should make you uncomfortable.
    /// Every copy of a private key is another thing to protect.
    fn clone(&self) -> Self {
        Self {
            signing_key: self.signing_key.clone(),
        }
    }
}

impl fmt::Debug for VelaKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print secret key material in debug output. Not even "partially."
        write!(f, "VelaKeypair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for VelaKeypair {
    /// Two keypairs are equal if their public keys match. Comparing secret
    /// material in a non-constant-time way is a bad habit, and for identity
    /// purposes the public key is what matters.
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for VelaKeypair {}

// ---------------------------------------------------------------------------
// VelaPublicKey
// ---------------------------------------------------------------------------

impl VelaPublicKey {
    /// Decode a public key from SEC1 bytes (compressed or uncompressed).
    ///
    /// Rejects anything that is not a valid point on secp256k1, including
    /// the identity point. "33 or 65 bytes long" is not the same thing as
    /// "a public key."
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let key = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self { key })
    }

    /// Decode a public key from hex-encoded SEC1 bytes.
    ///
    /// Both the compressed (66 hex chars) and uncompressed (130 hex chars)
    /// encodings are accepted; the decoded point is what gets compared, so
    /// the two forms of the same key are interchangeable everywhere.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    /// The canonical identity encoding: uncompressed SEC1, lowercase hex.
    ///
    /// 130 characters starting with `04`. This is the form payer identities
    /// are written in.
    pub fn to_hex(&self) -> String {
        hex::encode(self.key.to_encoded_point(false).as_bytes())
    }

    /// The compact encoding: compressed SEC1, lowercase hex (66 characters).
    pub fn to_compressed_hex(&self) -> String {
        hex::encode(self.key.to_encoded_point(true).as_bytes())
    }

    /// Verify a DER-encoded ECDSA signature over a 32-byte digest.
    ///
    /// Returns `false` for a wrong signature, a signature over a different
    /// digest, or DER bytes that don't parse — an unparseable signature
    /// certainly doesn't verify, and we don't give callers a reason oracle.
    pub fn verify_digest(&self, digest: &[u8; 32], signature_der: &[u8]) -> bool {
        let Ok(signature) = Signature::from_der(signature_der) else {
            return false;
        };
        self.key.verify_prehash(digest, &signature).is_ok()
    }

    /// Access the underlying `VerifyingKey` for code that talks to `k256`.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.key
    }
}

impl PartialEq for VelaPublicKey {
    /// Point equality, not string equality. The compressed and uncompressed
    /// hex forms of the same key compare equal after decoding.
    fn eq(&self, other: &Self) -> bool {
        self.key.to_encoded_point(true) == other.key.to_encoded_point(true)
    }
}

impl Eq for VelaPublicKey {}

impl fmt::Debug for VelaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VelaPublicKey({})", self.to_compressed_hex())
    }
}

impl fmt::Display for VelaPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

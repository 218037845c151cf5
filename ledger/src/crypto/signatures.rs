//! # Digital Signatures
//!
//! ECDSA over secp256k1 — the mechanism that binds a transaction to its
//! payer. The ledger signs *digests*, never raw transaction bytes: the
//! canonical SHA-256 digest is computed first, and the 32 digest bytes are
//! what ECDSA sees.
//!
//! ## Determinism
//!
//! Nonces come from RFC 6979 and signatures are low-S normalized, so the
//! same (key, digest) pair always yields the same signature. That's what
//! makes reference signatures possible — and what keeps a bad RNG at
//! signing time from leaking the private key (see: PlayStation 3 master
//! key incident, 2010).
//!
//! ## Wire format
//!
//! Signatures travel as DER-encoded hex. DER, not fixed-width `r || s`,
//! because the digest-and-signature formats here are compatibility
//! surfaces shared with existing tooling.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::Signature;
use thiserror::Error;

use super::keys::{VelaKeypair, VelaPublicKey};

/// Errors during signature production.
///
/// Verification never errors — it returns a boolean. We don't give
/// attackers a reason oracle.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The ECDSA primitive rejected the operation. With a valid key and a
    /// 32-byte digest this is astronomically unlikely, but the primitive
    /// returns a `Result` and so do we.
    #[error("ECDSA signing failed")]
    SigningFailed,
}

/// Sign a 32-byte digest and return the DER-encoded signature as hex.
///
/// Deterministic: the same keypair and digest always produce the same hex
/// string (RFC 6979 nonces, low-S normalized).
///
/// # Example
///
/// ```
/// use vela_ledger::crypto::{sign_digest, verify_digest, sha256, VelaKeypair};
///
/// let kp = VelaKeypair::generate();
/// let digest = sha256(b"pay alice 10");
/// let sig = sign_digest(&kp, &digest).unwrap();
/// assert!(verify_digest(&kp.public_key(), &digest, &sig));
/// ```
pub fn sign_digest(keypair: &VelaKeypair, digest: &[u8; 32]) -> Result<String, SignatureError> {
    let signature: Signature = keypair
        .signing_key()
        .sign_prehash(digest)
        .map_err(|_| SignatureError::SigningFailed)?;
    Ok(hex::encode(signature.to_der().as_bytes()))
}

/// Verify a hex-encoded DER signature over a 32-byte digest.
///
/// Returns `true` iff the signature was produced by the private key behind
/// `public_key` over exactly this digest. Malformed hex or DER simply
/// returns `false` — an unparseable signature doesn't verify, and we don't
/// distinguish "garbage" from "wrong."
pub fn verify_digest(public_key: &VelaPublicKey, digest: &[u8; 32], signature_hex: &str) -> bool {
    let Ok(der_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    public_key.verify_digest(digest, &der_bytes)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

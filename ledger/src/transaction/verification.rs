//! Deciding whether a signed transaction still matches what was signed.
//!
//! Validation recomputes the canonical digest from the transaction's
//! *current* field values and verifies the stored signature against the
//! payer's public key. A transaction that was mutated after signing simply
//! fails verification — the digest no longer matches — which is the entire
//! tamper-detection story of this crate.
//!
//! ## Error vs boolean
//!
//! Two very different things can go wrong here, and they must not be
//! collapsed:
//!
//! - **No signature at all** — the caller asked "is this valid?" about a
//!   transaction nobody ever signed. That is misuse, and it surfaces as
//!   [`ValidationError::MissingSignature`], never as `Ok(false)`.
//! - **A signature that doesn't verify** — genuine tampering, or a
//!   signature lifted from a different digest. That is a *finding*, and it
//!   surfaces as `Ok(false)`, never as an error.

use thiserror::Error;
use tracing::debug;

use crate::crypto::keys::{KeyError, VelaPublicKey};
use crate::crypto::signatures::verify_digest;
use crate::transaction::types::{is_system_payer, Transaction};

/// Errors raised when a transaction cannot be validated at all.
///
/// Note what is *not* here: a failed signature check. That outcome is the
/// `Ok(false)` return of [`validate_transaction`], not an error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The transaction has no (or an empty) signature. Validating an
    /// unsigned transaction is caller misuse, not a tampering finding.
    #[error("no signature in this transaction")]
    MissingSignature,

    /// The payer identity cannot be decoded as a secp256k1 public key, so
    /// there is nothing to verify the signature against. Distinct from both
    /// the misuse and the tampering cases — this is a format problem local
    /// to the key-handling step.
    #[error("payer identity is not a valid public key: {0}")]
    InvalidPayerKey(#[from] KeyError),
}

/// Checks a transaction's signature against its current content.
///
/// The policy, in order:
///
/// 1. A system-originated transaction ([`is_system_payer`] on the payer)
///    returns `Ok(true)` unconditionally — there is no signing party.
/// 2. A missing or empty signature is
///    [`ValidationError::MissingSignature`].
/// 3. A payer identity that doesn't decode as a public key is
///    [`ValidationError::InvalidPayerKey`].
/// 4. Otherwise, the canonical digest is recomputed from the *current*
///    field values and the signature is verified against the payer's key.
///    `Ok(true)` iff it verifies; any mismatch — tampering after signing,
///    or a signature belonging to some other digest — is `Ok(false)`.
///
/// Pure query: never mutates the transaction, and repeated calls on an
/// unchanged transaction return the same result.
pub fn validate_transaction(tx: &Transaction) -> Result<bool, ValidationError> {
    // Reward-style transactions have no signer to hold accountable.
    if is_system_payer(&tx.payer) {
        return Ok(true);
    }

    let signature = match tx.signature.as_deref() {
        Some(sig) if !sig.is_empty() => sig,
        _ => return Err(ValidationError::MissingSignature),
    };

    let payer_key = VelaPublicKey::from_hex(&tx.payer)?;

    let valid = verify_digest(&payer_key, &tx.hash_bytes(), signature);
    if !valid {
        debug!(tx = %tx, "signature does not match current transaction content");
    }
    Ok(valid)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

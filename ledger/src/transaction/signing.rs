//! Binding a transaction to its payer's keypair.
//!
//! Signing is a separate step from construction because the keypair may not
//! be available at construction time (hardware wallet, remote signer, or
//! just a block builder assembling transactions it didn't author). The
//! signed content is the canonical digest from
//! [`Transaction::calculate_hash`], so everything that digest covers is
//! tamper-evident from this point on.

use thiserror::Error;
use tracing::debug;

use crate::crypto::keys::{KeyError, VelaKeypair, VelaPublicKey};
use crate::crypto::signatures::{self, sign_digest};
use crate::transaction::types::Transaction;

/// Errors raised while signing a transaction.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The keypair's public key does not match the transaction's payer.
    /// One party must not be able to sign a transaction that names a
    /// different party as payer.
    #[error("you cannot sign transactions for other wallets")]
    ForeignWallet,

    /// The payer identity does not decode to a secp256k1 public key at all.
    /// A placeholder or garbage payer can never be signed — there is no key
    /// it could match.
    #[error("payer identity is not a valid public key: {0}")]
    InvalidPayerKey(#[from] KeyError),

    /// The ECDSA primitive failed. Effectively unreachable with a valid
    /// keypair, but propagated rather than swallowed.
    #[error(transparent)]
    Signature(#[from] signatures::SignatureError),
}

/// Signs a transaction in place with the payer's keypair.
///
/// The procedure:
///
/// 1. Decode `tx.payer` as a secp256k1 public key and compare it to the
///    keypair's public key *as curve points* — so a compressed-hex payer
///    still matches the same key in uncompressed form. Any mismatch is
///    [`SigningError::ForeignWallet`]; an undecodable payer is
///    [`SigningError::InvalidPayerKey`].
/// 2. Compute the canonical 32-byte digest of the current field values.
/// 3. Produce a deterministic ECDSA signature over the digest and store it
///    as DER-encoded hex in `tx.signature`.
///
/// On any error, `tx.signature` is left untouched (still unset for a fresh
/// transaction). No other field is ever modified.
pub fn sign_transaction(tx: &mut Transaction, keypair: &VelaKeypair) -> Result<(), SigningError> {
    let payer_key = VelaPublicKey::from_hex(&tx.payer)?;
    if payer_key != keypair.public_key() {
        debug!(payer = %tx.payer, "refusing to sign for a foreign wallet");
        return Err(SigningError::ForeignWallet);
    }

    let digest = tx.hash_bytes();
    tx.signature = Some(sign_digest(keypair, &digest)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // The fixed wallet key behind the crate's reference signature.
    const SECRET_HEX: &str = "3d6f54430830d388052865b95c10b4aeb1bbe33c01334cf2cfa8b520062a0ce3";

    fn correctly_signed_tx() -> (Transaction, VelaKeypair) {
        let kp = VelaKeypair::from_secret_hex(SECRET_HEX).unwrap();
        let mut tx = Transaction::new(kp.public_key_hex(), "wallet2".into(), 10);
        tx.timestamp = 1;
        sign_transaction(&mut tx, &kp).unwrap();
        (tx, kp)
    }

    #[test]
    fn sign_sets_signature() {
        let (tx, _) = correctly_signed_tx();
        assert!(tx.is_signed());
    }

    #[test]
    fn golden_reference_signature() {
        // Deterministic ECDSA (RFC 6979, low-S) over the fixed test vector
        // must reproduce the reference DER signature exactly.
        let (tx, _) = correctly_signed_tx();
        assert_eq!(
            tx.signature.as_deref().unwrap(),
            "3044022023fb1d818a0888f7563e1a3ccdd68b28e23070d6c0c1c5\
             004721ee1013f1d769022037da026cda35f95ef1ee5ced5b9f7d70\
             e102fcf841e6240950c61e8f9b6ef9f8"
        );
    }

    #[test]
    fn refuses_to_sign_for_other_wallets() {
        let signer = VelaKeypair::generate();
        let other = VelaKeypair::generate();
        let mut tx = Transaction::new(other.public_key_hex(), "wallet2".into(), 10);
        tx.timestamp = 1;

        match sign_transaction(&mut tx, &signer) {
            Err(SigningError::ForeignWallet) => {}
            other => panic!("expected ForeignWallet, got {:?}", other),
        }
        assert!(tx.signature.is_none(), "signature must stay unset on error");
    }

    #[test]
    fn refuses_to_sign_non_key_payer() {
        let signer = VelaKeypair::generate();
        let mut tx = Transaction::new("not a correct wallet key".into(), "wallet2".into(), 10);
        tx.timestamp = 1;

        match sign_transaction(&mut tx, &signer) {
            Err(SigningError::InvalidPayerKey(_)) => {}
            other => panic!("expected InvalidPayerKey, got {:?}", other),
        }
        assert!(tx.signature.is_none());
    }

    #[test]
    fn compressed_payer_identity_still_matches() {
        // Encoding normalization: the payer wrote their key compressed, but
        // it is the same point, so signing must succeed.
        let kp = VelaKeypair::from_secret_hex(SECRET_HEX).unwrap();
        let mut tx = Transaction::new(kp.public_key().to_compressed_hex(), "wallet2".into(), 10);
        tx.timestamp = 1;
        assert!(sign_transaction(&mut tx, &kp).is_ok());
        assert!(tx.is_signed());
    }

    #[test]
    fn signing_is_deterministic_across_calls() {
        let (tx1, kp) = correctly_signed_tx();
        let mut tx2 = Transaction::new(kp.public_key_hex(), "wallet2".into(), 10);
        tx2.timestamp = 1;
        sign_transaction(&mut tx2, &kp).unwrap();
        assert_eq!(tx1.signature, tx2.signature);
    }

    #[test]
    fn signing_leaves_other_fields_alone() {
        let kp = VelaKeypair::generate();
        let mut tx = Transaction::new(kp.public_key_hex(), "wallet2".into(), 42);
        tx.timestamp = 7;
        let (payer, payee, amount, ts) = (
            tx.payer.clone(),
            tx.payee.clone(),
            tx.amount,
            tx.timestamp,
        );

        sign_transaction(&mut tx, &kp).unwrap();

        assert_eq!(tx.payer, payer);
        assert_eq!(tx.payee, payee);
        assert_eq!(tx.amount, amount);
        assert_eq!(tx.timestamp, ts);
    }
}

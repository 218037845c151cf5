//! The `Transaction` entity and its canonical content digest.
//!
//! The digest format defined here is a compatibility surface: SHA-256 over
//! the bare concatenation `payer || payee || amount || timestamp` with *no*
//! separators, amount and timestamp rendered as decimal strings. Reference
//! digests must reproduce bit-for-bit, so this format never changes.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::hash::{sha256, sha256_hex};
use crate::crypto::keys::VelaKeypair;
use crate::transaction::signing::{sign_transaction, SigningError};
use crate::transaction::verification::{validate_transaction, ValidationError};

/// The sentinel payer identity for system-originated transactions.
///
/// Reward payouts and other ledger-internal transfers have no signing party;
/// they carry this identity instead of a public key and validate
/// unconditionally. Always test for it through [`is_system_payer`] — the
/// constant itself should appear exactly twice in this crate: here, and
/// wherever the block builder mints rewards.
pub const SYSTEM_PAYER: &str = "SYSTEM";

/// Returns `true` if the given payer identity is the system sentinel.
///
/// This is the *only* place the special case is decided. Validation, block
/// building, and display logic all go through this predicate rather than
/// comparing strings themselves.
pub fn is_system_payer(identity: &str) -> bool {
    identity == SYSTEM_PAYER
}

/// A single value transfer: payer, payee, amount, timestamp, and (once
/// signed) the payer's signature over the canonical digest of those fields.
///
/// All fields are public and stay mutable after signing — deliberately.
/// The signature is bound to the field values *at signing time*; mutate
/// anything afterwards and the transaction will fail validation, but nothing
/// stops the mutation itself. Callers who want a write-proof handle can
/// convert into a [`SealedTransaction`](crate::transaction::SealedTransaction).
///
/// # Examples
///
/// ```
/// use vela_ledger::{Transaction, VelaKeypair};
///
/// let kp = VelaKeypair::generate();
/// let mut tx = Transaction::new(kp.public_key_hex(), "wallet2".into(), 10);
/// tx.sign(&kp).unwrap();
/// assert!(tx.is_valid().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Hex-encoded secp256k1 public key of the sender, or [`SYSTEM_PAYER`].
    /// Opaque until a cryptographic operation touches it.
    pub payer: String,
    /// Opaque recipient identifier. This core never validates it.
    pub payee: String,
    /// Transfer quantity. Signed on purpose: this core inherits the
    /// source ledger's permissiveness and enforces no non-negativity.
    pub amount: i64,
    /// Milliseconds since the Unix epoch, stamped at construction. Part of
    /// the signed content, so overwrite it *before* signing if you need a
    /// deterministic value.
    pub timestamp: u64,
    /// Hex-encoded DER ECDSA signature, `None` until [`sign`](Self::sign).
    pub signature: Option<String>,
}

impl Transaction {
    /// Create a new unsigned transaction, stamped with the current
    /// wall-clock time.
    ///
    /// No format validation happens here — payer and payee are opaque
    /// strings until signing or validation needs to decode them.
    pub fn new(payer: String, payee: String, amount: i64) -> Self {
        Self {
            payer,
            payee,
            amount,
            timestamp: Utc::now().timestamp_millis() as u64,
            signature: None,
        }
    }

    /// The canonical signing preimage: `payer || payee || amount || timestamp`,
    /// decimal-rendered numbers, no separators. This exact byte layout is
    /// what reference digests are defined over.
    fn preimage(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            self.payer.len() + self.payee.len() + 24, // rough room for the two numbers
        );
        bytes.extend_from_slice(self.payer.as_bytes());
        bytes.extend_from_slice(self.payee.as_bytes());
        bytes.extend_from_slice(self.amount.to_string().as_bytes());
        bytes.extend_from_slice(self.timestamp.to_string().as_bytes());
        bytes
    }

    /// Compute the content digest as raw bytes — what ECDSA actually signs.
    pub fn hash_bytes(&self) -> [u8; 32] {
        sha256(&self.preimage())
    }

    /// Compute the content digest as a 64-character lowercase hex string.
    ///
    /// Pure and idempotent: it reads the current field values and mutates
    /// nothing, so calling it twice on an unchanged transaction yields the
    /// same string. Golden vector: payer `a1`, payee `b1`, amount 10,
    /// timestamp 1 hashes to
    /// `21894bb7b0e56aab9eb48d4402d94628a9a179bc277542a5703f417900275153`.
    pub fn calculate_hash(&self) -> String {
        sha256_hex(&self.preimage())
    }

    /// `true` iff a non-empty signature is present.
    ///
    /// This is the one definition of "signed" in the crate. An empty string
    /// in the signature slot counts as unsigned.
    pub fn is_signed(&self) -> bool {
        self.signature.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Sign this transaction with the payer's keypair.
    /// See [`sign_transaction`] for the full contract.
    pub fn sign(&mut self, keypair: &VelaKeypair) -> Result<(), SigningError> {
        sign_transaction(self, keypair)
    }

    /// Check this transaction's signature against its current content.
    /// See [`validate_transaction`] for the full contract.
    pub fn is_valid(&self) -> Result<bool, ValidationError> {
        validate_transaction(self)
    }
}

impl fmt::Display for Transaction {
    /// Log-friendly rendering. Identities are truncated and the signature
    /// bytes are reduced to a signed/unsigned flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn short(s: &str) -> String {
            if s.chars().count() > 12 {
                let prefix: String = s.chars().take(12).collect();
                format!("{}…", prefix)
            } else {
                s.to_string()
            }
        }
        write!(
            f,
            "Transaction({} -> {}, amount={}, ts={}, {})",
            short(&self.payer),
            short(&self.payee),
            self.amount,
            self.timestamp,
            if self.is_signed() { "signed" } else { "unsigned" },
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_stamps_current_time() {
        let before = Utc::now().timestamp_millis() as u64 - 1_000;
        let tx = Transaction::new("payer".into(), "payee".into(), 9_999);
        let after = Utc::now().timestamp_millis() as u64 + 1_000;
        assert!(
            tx.timestamp > before && tx.timestamp < after,
            "timestamp {} outside [{}, {}]",
            tx.timestamp,
            before,
            after
        );
    }

    #[test]
    fn constructor_saves_fields_verbatim() {
        let tx = Transaction::new("a1".into(), "b1".into(), 10);
        assert_eq!(tx.payer, "a1");
        assert_eq!(tx.payee, "b1");
        assert_eq!(tx.amount, 10);
        assert_eq!(tx.signature, None);
        assert!(!tx.is_signed());
    }

    #[test]
    fn golden_digest_vector() {
        // SHA-256("a1b1101") — the concatenation has no separators.
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        tx.timestamp = 1;
        assert_eq!(
            tx.calculate_hash(),
            "21894bb7b0e56aab9eb48d4402d94628a9a179bc277542a5703f417900275153"
        );
    }

    #[test]
    fn hash_is_idempotent() {
        let tx = Transaction::new("a1".into(), "b1".into(), 10);
        assert_eq!(tx.calculate_hash(), tx.calculate_hash());
    }

    #[test]
    fn hash_changes_when_any_field_changes() {
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        tx.timestamp = 1;
        let original = tx.calculate_hash();

        let mut tampered = tx.clone();
        tampered.amount = 100;
        assert_ne!(tampered.calculate_hash(), original);

        let mut tampered = tx.clone();
        tampered.payer = "a2".into();
        assert_ne!(tampered.calculate_hash(), original);

        let mut tampered = tx.clone();
        tampered.payee = "b2".into();
        assert_ne!(tampered.calculate_hash(), original);

        let mut tampered = tx.clone();
        tampered.timestamp = 2;
        assert_ne!(tampered.calculate_hash(), original);
    }

    #[test]
    fn hash_ignores_signature_field() {
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        let before = tx.calculate_hash();
        tx.signature = Some("cafe".into());
        assert_eq!(tx.calculate_hash(), before);
    }

    #[test]
    fn negative_amounts_are_representable() {
        // Permissive by design: this core does not police amounts.
        let mut tx = Transaction::new("a1".into(), "b1".into(), -5);
        tx.timestamp = 1;
        // The canonical stringification of -5 is "-5".
        assert_eq!(tx.calculate_hash(), crate::crypto::sha256_hex(b"a1b1-51"));
    }

    #[test]
    fn empty_signature_counts_as_unsigned() {
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        tx.signature = Some(String::new());
        assert!(!tx.is_signed());
        tx.signature = Some("30".into());
        assert!(tx.is_signed());
    }

    #[test]
    fn system_payer_predicate() {
        assert!(is_system_payer(SYSTEM_PAYER));
        assert!(!is_system_payer("system"));
        assert!(!is_system_payer(""));
        assert!(!is_system_payer("04deadbeef"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        tx.timestamp = 1;
        tx.signature = Some("3044cafe".into());
        let json = serde_json::to_string(&tx).unwrap();
        let recovered: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, recovered);
    }

    #[test]
    fn display_hides_signature_bytes() {
        let mut tx = Transaction::new("a1".into(), "b1".into(), 10);
        tx.signature = Some("3044deadbeef".into());
        let rendered = tx.to_string();
        assert!(rendered.contains("signed"));
        assert!(!rendered.contains("3044deadbeef"));
    }
}

//! A read-only wrapper for transactions that have passed validation.
//!
//! The base [`Transaction`] keeps its fields mutable after signing and
//! relies on lazy detection — that is its contract. Some callers (a block
//! builder holding transactions for minutes, an audit log) would rather not
//! be *able* to tamper. [`SealedTransaction`] is that option: validation
//! happens once at the boundary, and afterwards the content is only
//! reachable through `&self` getters.
//!
//! Sealing is additive. Nothing in the crate requires it, and
//! [`SealedTransaction::into_inner`] hands the mutable form back whenever
//! a caller needs it.

use serde::Serialize;
use thiserror::Error;

use crate::transaction::types::Transaction;
use crate::transaction::verification::{validate_transaction, ValidationError};

/// Errors raised when sealing a transaction.
#[derive(Debug, Error)]
pub enum SealError {
    /// The transaction has a signature, but it does not verify against the
    /// current content. Sealing tampered goods is not a service we offer.
    #[error("transaction signature does not verify against its content")]
    InvalidSignature,

    /// The transaction could not be validated at all (unsigned, or the
    /// payer identity is not a key).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A transaction that validated at seal time and cannot be mutated since.
///
/// Field access is getter-only. The wrapper deliberately does not implement
/// `Deserialize` — a sealed transaction can only come into existence through
/// [`SealedTransaction::seal`], so holding one is proof that validation ran.
///
/// # Examples
///
/// ```
/// use vela_ledger::{SealedTransaction, Transaction, VelaKeypair};
///
/// let kp = VelaKeypair::generate();
/// let mut tx = Transaction::new(kp.public_key_hex(), "wallet2".into(), 10);
/// tx.sign(&kp).unwrap();
///
/// let sealed = SealedTransaction::seal(tx).unwrap();
/// assert_eq!(sealed.amount(), 10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SealedTransaction {
    inner: Transaction,
}

impl SealedTransaction {
    /// Validate `tx` and seal it if it passes.
    ///
    /// System-payer transactions seal like any other valid transaction.
    /// A transaction whose signature doesn't verify is rejected with
    /// [`SealError::InvalidSignature`]; one that can't be validated at all
    /// propagates the underlying [`ValidationError`].
    pub fn seal(tx: Transaction) -> Result<Self, SealError> {
        if !validate_transaction(&tx)? {
            return Err(SealError::InvalidSignature);
        }
        Ok(Self { inner: tx })
    }

    pub fn payer(&self) -> &str {
        &self.inner.payer
    }

    pub fn payee(&self) -> &str {
        &self.inner.payee
    }

    pub fn amount(&self) -> i64 {
        self.inner.amount
    }

    pub fn timestamp(&self) -> u64 {
        self.inner.timestamp
    }

    /// The signature as stored at seal time, if the transaction had one
    /// (system-payer transactions don't).
    pub fn signature(&self) -> Option<&str> {
        self.inner.signature.as_deref()
    }

    /// The canonical content digest. Stable for the lifetime of the seal,
    /// since nothing inside can change.
    pub fn calculate_hash(&self) -> String {
        self.inner.calculate_hash()
    }

    /// Borrow the sealed transaction.
    pub fn as_transaction(&self) -> &Transaction {
        &self.inner
    }

    /// Give up the seal and get the mutable transaction back.
    pub fn into_inner(self) -> Transaction {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

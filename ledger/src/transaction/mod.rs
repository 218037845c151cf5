//! # Transaction Module
//!
//! Construction, canonical hashing, signing, and validation of Vela
//! transactions — the complete lifecycle of the ledger's value-transfer
//! primitive.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — The Transaction entity, the canonical digest, and the
//!                   system-payer sentinel
//! signing.rs      — Binding a transaction to its payer's keypair
//! verification.rs — Deciding whether a signed transaction still matches
//!                   what was signed
//! sealed.rs       — Optional read-only wrapper for post-signing safety
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Construct** — [`Transaction::new`] stamps the wall-clock timestamp.
//! 2. **Hash** — [`Transaction::calculate_hash`] derives the canonical
//!    content digest. Pure; call it as often as you like.
//! 3. **Sign** — [`sign_transaction`] checks that the keypair actually
//!    *is* the payer, then stores a DER-hex ECDSA signature over the digest.
//! 4. **Validate** — [`validate_transaction`] recomputes the digest from the
//!    *current* field values and verifies the signature against the payer's
//!    public key.
//!
//! ## Design Decisions
//!
//! - Fields stay mutable after signing. Tampering is detected lazily at
//!   validation time, when the recomputed digest no longer matches the
//!   signature. Callers who want mutation prevented as well can seal a
//!   transaction into a [`SealedTransaction`].
//! - "No signature" is an error from validation, not a `false`. An unsigned
//!   transaction being validated is caller misuse; a signed-then-tampered
//!   transaction is a finding. The two must stay distinguishable.
//! - System-originated transactions (e.g. mining rewards) carry the
//!   [`SYSTEM_PAYER`] sentinel and validate unconditionally — there is no
//!   signing party to check. The special case lives behind a single
//!   predicate, [`is_system_payer`], and nowhere else.

pub mod sealed;
pub mod signing;
pub mod types;
pub mod verification;

pub use sealed::{SealError, SealedTransaction};
pub use signing::{sign_transaction, SigningError};
pub use types::{is_system_payer, Transaction, SYSTEM_PAYER};
pub use verification::{validate_transaction, ValidationError};

// Copyright (c) 2026 Vela Contributors. MIT License.
// See LICENSE for details.

//! # Vela Ledger — Transaction Core
//!
//! The smallest thing that can honestly be called a ledger primitive: a
//! [`Transaction`] that names a payer, a payee, and an amount, and that can
//! be cryptographically welded to the payer's identity with an ECDSA
//! signature over secp256k1.
//!
//! Everything else a ledger needs — blocks, consensus, persistence, peers —
//! lives outside this crate and consumes the four-operation contract defined
//! here: construct, hash, sign, validate.
//!
//! ## Architecture
//!
//! - **crypto** — secp256k1 keypairs, SHA-256 digests, DER signatures.
//!   Thin, type-safe wrappers over audited implementations; nothing clever.
//! - **transaction** — The `Transaction` entity and its lifecycle:
//!   construction, canonical hashing, signing, validation, and an optional
//!   sealed (read-only) form.
//!
//! ## Design Philosophy
//!
//! 1. The digest format is a compatibility surface. It never changes.
//! 2. Signing binds content at a point in time; tampering is detected
//!    lazily at validation, never prevented by the type system (a sealed
//!    wrapper exists for callers who want prevention too).
//! 3. Misuse (validating an unsigned transaction) is an error. Tampering
//!    is a boolean. The two are never collapsed into one another.
//! 4. If it touches money, it has tests. Plural.

pub mod crypto;
pub mod transaction;

pub use crypto::{VelaKeypair, VelaPublicKey};
pub use transaction::{
    is_system_payer, sign_transaction, validate_transaction, SealedTransaction, SigningError,
    Transaction, ValidationError, SYSTEM_PAYER,
};

//! CLI demo of the Vela transaction lifecycle.
//!
//! Walks through wallet creation, transaction construction, canonical
//! hashing, signing, validation, a tampering attempt, and a system reward
//! transaction.
//!
//! Run with:
//!   cargo run --example demo

use vela_ledger::{
    sign_transaction, validate_transaction, SealedTransaction, Transaction, VelaKeypair,
    SYSTEM_PAYER,
};

fn main() {
    println!("== Vela transaction lifecycle ==\n");

    // A wallet is just a secp256k1 keypair; the payer identity is its
    // public key in hex.
    let wallet = VelaKeypair::generate();
    println!("wallet identity: {}…", &wallet.public_key_hex()[..24]);

    let mut tx = Transaction::new(wallet.public_key_hex(), "wallet2".to_string(), 10);
    println!("constructed:     {}", tx);
    println!("digest:          {}", tx.calculate_hash());

    sign_transaction(&mut tx, &wallet).expect("our own wallet signs our own transaction");
    println!("signed:          {}", tx);
    println!(
        "valid:           {}",
        validate_transaction(&tx).expect("signed transaction validates")
    );

    // Tamper with the amount. The signature was bound to the original
    // content, so validation now reports false.
    let mut tampered = tx.clone();
    tampered.amount = 1_000_000;
    println!(
        "after tampering: valid = {}",
        validate_transaction(&tampered).expect("tampered but signed")
    );

    // Reward transactions carry the system sentinel and need no signature.
    let reward = Transaction::new(SYSTEM_PAYER.to_string(), "wallet2".to_string(), 50);
    println!(
        "reward tx:       valid = {}",
        validate_transaction(&reward).expect("system transactions validate")
    );

    // For callers who want tampering prevented, not just detected:
    let sealed = SealedTransaction::seal(tx).expect("valid transaction seals");
    println!("sealed:          digest {}", sealed.calculate_hash());
}

//! Fuzz target for key parsing and `SecretBox` decryption
//!
//! Feeds adversarial key text and blobs to the crate's public surface.
//!
//! # Strategy
//!
//! - Arbitrary key text (valid, wrong length, non-alphabet)
//! - Arbitrary blobs around the minimum size boundary
//! - Encrypt/decrypt with fixed-nonce entropy
//! - Single-byte corruption of valid blobs
//!
//! # Invariants
//!
//! - Key parsing never panics
//! - Decrypt never panics on arbitrary input
//! - Blobs below the minimum size always fail with `TooSmall`
//! - Encrypt/decrypt roundtrip succeeds
//! - Corrupted blobs fail with `AuthFailed`

#![no_main]

use arbitrary::Arbitrary;
use crypter::{CrypterError, Entropy, Key, SecretBox, MIN_CIPHERTEXT_SIZE, NONCE_SIZE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct BoxScenario {
    /// Key text, either well-formed or arbitrary
    key: KeyInput,
    /// Operations against the box
    operations: Vec<BoxOperation>,
    /// Byte used to fill nonces
    nonce_byte: u8,
}

#[derive(Debug, Clone, Arbitrary)]
enum KeyInput {
    Raw([u8; 32]),
    Text(String),
}

#[derive(Debug, Clone, Arbitrary)]
enum BoxOperation {
    /// Decrypt arbitrary bytes
    Decrypt { blob: Vec<u8> },
    /// Encrypt then decrypt a message
    Roundtrip { message: Vec<u8> },
    /// Encrypt, corrupt one byte, decrypt
    Corrupt { message: Vec<u8>, position: usize, mask: u8 },
}

struct FixedEntropy(u8);

impl Entropy for FixedEntropy {
    fn fill(&self, buffer: &mut [u8]) {
        buffer.fill(self.0);
    }
}

fuzz_target!(|scenario: BoxScenario| {
    let key = match scenario.key {
        KeyInput::Raw(raw) => Key::from_bytes(&raw),
        KeyInput::Text(text) => Key::from(text),
    };

    // INVARIANT 1: Construction never panics
    let Ok(sealed_box) = SecretBox::new(&key) else {
        return;
    };

    let entropy = FixedEntropy(scenario.nonce_byte);

    for op in scenario.operations {
        match op {
            BoxOperation::Decrypt { blob } => {
                // INVARIANT 2: Decrypt never panics
                let result = sealed_box.decrypt(&blob);

                // INVARIANT 3: Short blobs are rejected by size alone
                if blob.len() < MIN_CIPHERTEXT_SIZE {
                    assert!(
                        matches!(result, Err(CrypterError::TooSmall { .. })),
                        "short blob must be TooSmall"
                    );
                }
            },

            BoxOperation::Roundtrip { message } => {
                let blob = sealed_box.encrypt_with(&message, &entropy);
                assert_eq!(&blob[..NONCE_SIZE], &[scenario.nonce_byte; NONCE_SIZE][..]);

                // INVARIANT 4: Roundtrip succeeds
                let decrypted = sealed_box.decrypt(&blob);
                assert_eq!(decrypted.as_deref(), Ok(message.as_slice()));
            },

            BoxOperation::Corrupt { message, position, mask } => {
                if mask == 0 {
                    continue;
                }

                let mut blob = sealed_box.encrypt_with(&message, &entropy);
                let index = position % blob.len();
                blob[index] ^= mask;

                // INVARIANT 5: Corruption fails authentication
                let result = sealed_box.decrypt(&blob);
                assert_eq!(result, Err(CrypterError::AuthFailed), "corrupted blob must fail");
            },
        }
    }
});

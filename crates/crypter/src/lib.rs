//! Crypter: authenticated encryption of small messages
//!
//! A [`Key`] is 32 random bytes carried as URL-safe, unpadded base64 text. A
//! [`SecretBox`] is built from a key and seals or opens single-shot messages
//! with NaCl `secretbox` (`XSalsa20-Poly1305`).
//!
//! # Ciphertext Layout
//!
//! ```text
//! offset 0           24                              len
//!        ├───────────┼───────────────────────────────┤
//!        │  nonce    │ Poly1305 tag (16) ║ ciphertext│
//!        └───────────┴───────────────────────────────┘
//! ```
//!
//! The nonce is drawn fresh from the entropy source for every message and
//! travels in the clear at the front of the blob. Anything shorter than
//! [`MIN_CIPHERTEXT_SIZE`] is rejected before the cipher is touched.
//!
//! # Security
//!
//! Entropy:
//! - Keys and nonces come from the OS RNG ([`OsEntropy`])
//! - RNG failure panics; no key or nonce is ever produced from a broken source
//!
//! Authenticity:
//! - Any modification of nonce, ciphertext or tag -> [`CrypterError::AuthFailed`]
//! - Wrong key and tampered data are indistinguishable to the caller
//!
//! Key Hygiene:
//! - [`Key`] and [`SecretBox`] zeroize their buffers on drop
//! - `Debug` output never contains key material
//!
//! # Example
//!
//! ```
//! use crypter::{Key, SecretBox};
//!
//! let key = Key::generate();
//! let sealed_box = SecretBox::new(&key)?;
//!
//! let blob = sealed_box.encrypt(b"small clear");
//! assert_eq!(sealed_box.decrypt(&blob)?, b"small clear");
//! # Ok::<(), crypter::CrypterError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod entropy;
pub mod error;
pub mod key;
pub mod secret_box;

pub use entropy::{Entropy, OsEntropy};
pub use error::CrypterError;
pub use key::{KEY_SIZE, Key};
pub use secret_box::{MIN_CIPHERTEXT_SIZE, NONCE_SIZE, OVERHEAD, SecretBox};

//! Single-shot authenticated encryption using NaCl `secretbox`
//! (`XSalsa20-Poly1305`)
//!
//! A [`SecretBox`] only reads its key after construction, so one instance can
//! be shared across threads without locking. Every call allocates its own
//! nonce and output buffer.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use crypto_secretbox::{
    XSalsa20Poly1305,
    aead::{Aead, KeyInit, Nonce},
};
use zeroize::{Zeroize, Zeroizing};

use crate::{
    entropy::{Entropy, OsEntropy},
    error::CrypterError,
    key::{KEY_SIZE, Key},
};

/// Size of the nonce prefix (24 bytes)
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size added by the cipher (16 bytes)
pub const OVERHEAD: usize = 16;

/// Smallest blob that can be opened: nonce plus an empty sealed message
pub const MIN_CIPHERTEXT_SIZE: usize = NONCE_SIZE + OVERHEAD;

/// Encrypts and decrypts small messages under one 32-byte key.
///
/// Output of [`encrypt`](Self::encrypt) is `nonce || tag || ciphertext`, the
/// same bytes NaCl produces when the nonce is prepended to a `secretbox`.
pub struct SecretBox {
    key: [u8; KEY_SIZE],
}

impl SecretBox {
    /// Build a box from key text.
    ///
    /// # Errors
    ///
    /// - `BadEncoding`: key text is not URL-safe, unpadded base64
    /// - `BadLength`: key text decodes to anything other than 32 bytes
    pub fn new(key: &Key) -> Result<Self, CrypterError> {
        let decoded = Zeroizing::new(
            URL_SAFE_NO_PAD.decode(key.as_str()).map_err(|_| CrypterError::BadEncoding)?,
        );

        let raw = <[u8; KEY_SIZE]>::try_from(decoded.as_slice()).map_err(|_| {
            CrypterError::BadLength { expected: KEY_SIZE, actual: decoded.len() }
        })?;

        Ok(Self { key: raw })
    }

    /// Build a box directly from raw key bytes.
    pub fn from_raw(key: &[u8; KEY_SIZE]) -> Self {
        Self { key: *key }
    }

    /// Seal `data` under a fresh nonce from the OS RNG.
    ///
    /// # Panics
    ///
    /// Panics if the OS RNG fails (see [`OsEntropy`]).
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        self.encrypt_with(data, &OsEntropy)
    }

    /// Seal `data` under a fresh nonce drawn from `entropy`.
    ///
    /// The nonce is written verbatim as the first [`NONCE_SIZE`] bytes of the
    /// returned blob, followed by the sealed output (tag, then ciphertext).
    /// Empty input yields a blob of exactly [`MIN_CIPHERTEXT_SIZE`] bytes.
    pub fn encrypt_with(&self, data: &[u8], entropy: &impl Entropy) -> Vec<u8> {
        let mut nonce = [0u8; NONCE_SIZE];
        entropy.fill(&mut nonce);

        let cipher = XSalsa20Poly1305::new((&self.key).into());
        let Ok(sealed) = cipher.encrypt(Nonce::<XSalsa20Poly1305>::from_slice(&nonce), data) else {
            unreachable!("XSalsa20-Poly1305 encryption cannot fail with valid inputs");
        };

        let mut blob = Vec::with_capacity(NONCE_SIZE + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);
        blob
    }

    /// Open a blob produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// - `TooSmall`: blob is shorter than [`MIN_CIPHERTEXT_SIZE`]; nothing is
    ///   split or opened
    /// - `AuthFailed`: tag did not verify. Wrong key, altered nonce and
    ///   altered ciphertext all land here
    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>, CrypterError> {
        if blob.len() < MIN_CIPHERTEXT_SIZE {
            return Err(CrypterError::TooSmall { minimum: MIN_CIPHERTEXT_SIZE, actual: blob.len() });
        }

        let (nonce, sealed) = blob.split_at(NONCE_SIZE);

        let cipher = XSalsa20Poly1305::new((&self.key).into());
        cipher
            .decrypt(Nonce::<XSalsa20Poly1305>::from_slice(nonce), sealed)
            .map_err(|_| CrypterError::AuthFailed)
    }
}

impl std::fmt::Debug for SecretBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBox").finish_non_exhaustive()
    }
}

// Zeroize key material
impl Drop for SecretBox {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

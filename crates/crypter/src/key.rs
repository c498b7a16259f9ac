//! Text-encoded secret keys.
//!
//! A key is [`KEY_SIZE`] random bytes written as URL-safe base64 without
//! padding. `Key` is a passive value: it never validates its text. Shape
//! checks happen when a [`SecretBox`](crate::SecretBox) is built from it.

use std::{convert::Infallible, fmt, str::FromStr};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use zeroize::Zeroize;

use crate::entropy::{Entropy, OsEntropy};

/// Raw key length in bytes (32)
pub const KEY_SIZE: usize = 32;

/// A secret key in its textual form.
///
/// Distinct from `String` so that arbitrary text cannot be passed where a key
/// is expected. The text is zeroized on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct Key(String);

impl Key {
    /// Generate a new key from the OS RNG.
    ///
    /// # Panics
    ///
    /// Panics if the OS RNG fails (see [`OsEntropy`]).
    pub fn generate() -> Self {
        Self::generate_with(&OsEntropy)
    }

    /// Generate a new key from the given entropy source.
    pub fn generate_with(entropy: &impl Entropy) -> Self {
        let mut raw = [0u8; KEY_SIZE];
        entropy.fill(&mut raw);

        let key = Self::from_bytes(&raw);
        raw.zeroize();
        key
    }

    /// Encode raw key bytes into their textual form.
    pub fn from_bytes(raw: &[u8; KEY_SIZE]) -> Self {
        Self(URL_SAFE_NO_PAD.encode(raw))
    }

    /// The key text (URL-safe base64, no padding).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

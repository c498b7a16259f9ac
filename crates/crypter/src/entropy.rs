//! Secure random source used for keys and nonces.
//!
//! Production code uses [`OsEntropy`]. Tests and simulations supply their own
//! [`Entropy`] to make keys and nonces reproducible.

/// A source of cryptographically secure random bytes.
///
/// # Invariants
///
/// - `fill` populates the entire buffer or does not return
/// - Production implementations draw from a CSPRNG
///
/// There is no error path. A source that cannot deliver entropy must halt
/// instead of handing back a weak buffer, since every caller turns the bytes
/// straight into a key or a nonce.
pub trait Entropy {
    /// Fills `buffer` with random bytes.
    fn fill(&self, buffer: &mut [u8]);
}

/// Operating system RNG (getrandom).
///
/// # Panics
///
/// Panics if the OS RNG fails. A process without working cryptographic
/// randomness cannot produce safe keys or nonces, and retrying does not fix
/// entropy starvation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl Entropy for OsEntropy {
    #[allow(clippy::expect_used)]
    fn fill(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer)
            .expect("invariant: OS RNG failure is unrecoverable - cannot produce keys or nonces");
    }
}

impl<E: Entropy + ?Sized> Entropy for &E {
    fn fill(&self, buffer: &mut [u8]) {
        (**self).fill(buffer);
    }
}

//! CLI error types

use thiserror::Error;

/// Errors surfaced by the `crypter` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key construction or decryption failed
    #[error(transparent)]
    Crypter(#[from] crypter::CrypterError),

    /// Armored input is not URL-safe, unpadded base64
    #[error("invalid armored input: {0}")]
    Armor(#[from] base64::DecodeError),

    /// Input exceeds the configured size limit
    #[error("input too large: limit is {limit} bytes")]
    InputTooLarge {
        /// Configured limit in bytes
        limit: usize,
    },

    /// No key given on the command line or in the environment
    #[error("no key provided (use --key or CRYPTER_KEY)")]
    MissingKey,
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// `2` for key problems (missing or malformed key), `1` for everything
    /// else, including input that fails to decrypt.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingKey => 2,
            Self::Crypter(e) if e.is_key_error() => 2,
            Self::Io(_) | Self::Crypter(_) | Self::Armor(_) | Self::InputTooLarge { .. } => 1,
        }
    }
}

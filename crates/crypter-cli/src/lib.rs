//! Crypter command-line front end.
//!
//! Commands read their whole input and produce their whole output in memory
//! before anything is written, so a failed command never touches the output
//! file and the input and output may name the same file. Logging never
//! includes key text or plaintext, only sizes and outcomes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

use std::{
    io::{self, Read, Write},
    path::Path,
};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use crypter::{Key, SecretBox};
use tempfile::NamedTempFile;

pub use error::CliError;

/// Default input size limit (1 MiB)
pub const DEFAULT_MAX_SIZE: usize = 1024 * 1024;

/// How blobs are read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoOptions {
    /// Raw bytes instead of base64 text
    pub binary: bool,
    /// Largest accepted input in bytes
    pub max_size: usize,
}

impl Default for IoOptions {
    fn default() -> Self {
        Self { binary: false, max_size: DEFAULT_MAX_SIZE }
    }
}

/// Build a box from key text, reporting which check failed.
pub fn open_box(key: Option<&Key>) -> Result<SecretBox, CliError> {
    let key = key.ok_or(CliError::MissingKey)?;
    let sealed_box = SecretBox::new(key).inspect_err(|e| tracing::warn!("Rejected key: {}", e))?;
    Ok(sealed_box)
}

/// A freshly generated key followed by a newline.
pub fn keygen() -> Vec<u8> {
    let key = Key::generate();
    tracing::info!("Generated new key");

    format!("{}\n", key.as_str()).into_bytes()
}

/// Encrypt everything read from `input` into a single blob.
///
/// Armored blobs are base64 text ending in a newline.
pub fn encrypt(
    sealed_box: &SecretBox,
    input: &mut impl Read,
    options: IoOptions,
) -> Result<Vec<u8>, CliError> {
    let plaintext = read_limited(input, options.max_size)?;
    let blob = sealed_box.encrypt(&plaintext);

    tracing::debug!("Encrypted {} bytes into {} byte blob", plaintext.len(), blob.len());

    if options.binary {
        Ok(blob)
    } else {
        Ok(format!("{}\n", URL_SAFE_NO_PAD.encode(&blob)).into_bytes())
    }
}

/// Decrypt a single blob read from `input`.
pub fn decrypt(
    sealed_box: &SecretBox,
    input: &mut impl Read,
    options: IoOptions,
) -> Result<Vec<u8>, CliError> {
    let raw = read_limited(input, options.max_size)?;
    let blob = if options.binary { raw } else { URL_SAFE_NO_PAD.decode(raw.trim_ascii())? };

    let plaintext = sealed_box
        .decrypt(&blob)
        .inspect_err(|e| tracing::warn!("Decryption of {} byte blob failed: {}", blob.len(), e))?;

    tracing::debug!("Decrypted {} byte blob into {} bytes", blob.len(), plaintext.len());
    Ok(plaintext)
}

/// Write `bytes` to `path`, or to stdout if `path` is `None`.
///
/// Files are replaced atomically: the bytes go to a temporary file in the
/// same directory, which is renamed over `path` once fully written.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read all of `input`, refusing anything larger than `limit` bytes.
fn read_limited(input: &mut impl Read, limit: usize) -> Result<Vec<u8>, CliError> {
    let mut buffer = Vec::new();
    input.take((limit as u64).saturating_add(1)).read_to_end(&mut buffer)?;

    if buffer.len() > limit {
        return Err(CliError::InputTooLarge { limit });
    }
    Ok(buffer)
}

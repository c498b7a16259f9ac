//! End-to-end tests running the `crypter` binary.
//!
//! Output files must only change when a command succeeds, and a command may
//! read and write the same file.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use crypter::Key;

fn crypter(key: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crypter"))
        .args(args)
        .env("CRYPTER_KEY", key)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn encrypt_in_place_keeps_plaintext_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let note = dir.path().join("note.txt");
    fs::write(&note, b"precious plaintext").unwrap();

    let key = Key::generate();
    let out = crypter(
        key.as_str(),
        &["encrypt", "--binary", "-i", path_str(&note), "-o", path_str(&note)],
    );
    assert!(out.status.success());

    let blob = fs::read(&note).unwrap();
    assert_eq!(blob.len(), crypter::MIN_CIPHERTEXT_SIZE + b"precious plaintext".len());

    let out = crypter(
        key.as_str(),
        &["decrypt", "--binary", "-i", path_str(&note), "-o", path_str(&note)],
    );
    assert!(out.status.success());

    assert_eq!(fs::read(&note).unwrap(), b"precious plaintext");
}

#[test]
fn failed_decrypt_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("clear.bin");
    let output = dir.path().join("keep.txt");
    fs::write(&input, b"small clear").unwrap();
    fs::write(&output, b"keep me").unwrap();

    let key = Key::generate();
    let out = crypter(
        key.as_str(),
        &["decrypt", "--binary", "-i", path_str(&input), "-o", path_str(&output)],
    );

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(&output).unwrap(), b"keep me");
    assert_eq!(fs::read(&input).unwrap(), b"small clear");
}

#[test]
fn failed_in_place_decrypt_keeps_input() {
    let dir = tempfile::tempdir().unwrap();
    let note = dir.path().join("note.bin");
    fs::write(&note, [0u8; 64]).unwrap();

    let key = Key::generate();
    let out = crypter(
        key.as_str(),
        &["decrypt", "--binary", "-i", path_str(&note), "-o", path_str(&note)],
    );

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(&note).unwrap(), [0u8; 64]);
}

#[test]
fn oversized_encrypt_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let note = dir.path().join("note.txt");
    fs::write(&note, b"more than eight bytes").unwrap();

    let key = Key::generate();
    let out = crypter(
        key.as_str(),
        &["encrypt", "--max-size", "8", "-i", path_str(&note), "-o", path_str(&note)],
    );

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(fs::read(&note).unwrap(), b"more than eight bytes");
}

#[test]
fn bad_key_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let note = dir.path().join("note.txt");
    fs::write(&note, b"hello").unwrap();

    let out = crypter("badkey2", &["encrypt", "-i", path_str(&note), "-o", path_str(&note)]);

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad key"));
    assert_eq!(fs::read(&note).unwrap(), b"hello");
}

#[test]
fn keygen_prints_usable_key() {
    let out = crypter("", &["keygen"]);
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    let key = Key::from(text.trim_end());

    assert!(crypter::SecretBox::new(&key).is_ok());
}

//! Crypter command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Generate a key
//! export CRYPTER_KEY=$(crypter keygen)
//!
//! # Encrypt stdin to armored text, then decrypt it again
//! echo "small clear" | crypter encrypt > blob.txt
//! crypter decrypt --input blob.txt
//!
//! # Raw binary blobs
//! crypter encrypt --binary --input note.txt --output note.bin
//! ```

use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args as ClapArgs, Parser, Subcommand};
use crypter::Key;
use crypter_cli::{CliError, DEFAULT_MAX_SIZE, IoOptions};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Authenticated encryption of small messages
#[derive(Parser, Debug)]
#[command(name = "crypter")]
#[command(about = "Encrypt and decrypt small messages under a shared key")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a newly generated key
    Keygen,
    /// Encrypt input into a single blob
    Encrypt(BlobArgs),
    /// Decrypt a blob produced by `encrypt`
    Decrypt(BlobArgs),
}

#[derive(ClapArgs, Debug)]
struct BlobArgs {
    /// Key text (URL-safe base64, no padding).
    ///
    /// Passing the key on the command line exposes it in the process list
    /// and shell history. Prefer setting `CRYPTER_KEY`.
    #[arg(short, long, env = "CRYPTER_KEY", hide_env_values = true)]
    key: Option<Key>,

    /// Input file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted); may be the same as the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read and write raw bytes instead of base64 text
    #[arg(long)]
    binary: bool,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
}

impl BlobArgs {
    fn options(&self) -> IoOptions {
        IoOptions { binary: self.binary, max_size: self.max_size }
    }

    fn reader(&self) -> io::Result<Box<dyn Read>> {
        Ok(match &self.input {
            Some(path) => Box::new(File::open(path)?),
            None => Box::new(io::stdin().lock()),
        })
    }
}

fn run(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Keygen => crypter_cli::write_output(None, &crypter_cli::keygen()),
        Command::Encrypt(blob) => {
            let sealed_box = crypter_cli::open_box(blob.key.as_ref())?;
            let output = crypter_cli::encrypt(&sealed_box, &mut blob.reader()?, blob.options())?;
            crypter_cli::write_output(blob.output.as_deref(), &output)
        },
        Command::Decrypt(blob) => {
            let sealed_box = crypter_cli::open_box(blob.key.as_ref())?;
            let output = crypter_cli::decrypt(&sealed_box, &mut blob.reader()?, blob.options())?;
            crypter_cli::write_output(blob.output.as_deref(), &output)
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(io::stderr().lock(), "crypter: {e}");
            ExitCode::from(e.exit_code())
        },
    }
}

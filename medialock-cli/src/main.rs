//! MediaLock DRM simulator.
//!
//! Usage:
//!   medialock generate-license
//!   medialock encrypt <input> <output>
//!   medialock decrypt <input> <output>
//!   medialock sample [path]
//!
//! Encrypt and decrypt are gated on a valid license for the current machine
//! identity. The identity is resolved fresh each run (see the licensing
//! crate docs), so a license only validates within the run that issued it
//! unless the identifier is supplied externally.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use medialock_cli::{check_license, create_sample, decrypt_file, encrypt_file, generate_license};
use medialock_crypto::{CipherKey, OsRandom};
use medialock_license::{EphemeralIdentity, IdentityProvider, MachineId, SecretKeyStore};
use medialock_store::FsStore;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "medialock")]
#[command(about = "Device-bound licensing and content-protection simulator")]
struct Cli {
    /// Path to the shared secret key file
    #[arg(long, default_value = "secret.key")]
    secret_key: PathBuf,

    /// Path to the license file
    #[arg(long, default_value = "license.key")]
    license: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Issue and persist a license for the current machine identity
    GenerateLicense,
    /// Encrypt a file into a self-contained container (license required)
    Encrypt { input: PathBuf, output: PathBuf },
    /// Decrypt a container back into plaintext (license required)
    Decrypt { input: PathBuf, output: PathBuf },
    /// Create a placeholder sample media file
    Sample {
        /// Where to write the sample
        #[arg(default_value = "sample_video.txt")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Unknown or malformed commands exit 1, not clap's default 2.
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = FsStore;
    let mut rng = OsRandom;

    match cli.command {
        Command::Sample { path } => create_sample(&store, &path),
        Command::GenerateLicense => {
            let (machine, secret) = resolve(&store, &cli.secret_key, &mut rng);
            let license = generate_license(&store, &cli.license, &machine, &secret)?;
            println!("license generated: {license}");
            Ok(())
        }
        Command::Encrypt { input, output } => {
            let (machine, secret) = resolve(&store, &cli.secret_key, &mut rng);
            check_license(&store, &cli.license, &machine, &secret)?;
            encrypt_file(&store, &input, &output, &mut rng)
        }
        Command::Decrypt { input, output } => {
            let (machine, secret) = resolve(&store, &cli.secret_key, &mut rng);
            check_license(&store, &cli.license, &machine, &secret)?;
            decrypt_file(&store, &input, &output)
        }
    }
}

/// Resolves the machine identity and the shared secret, each exactly once
/// per run. Every protocol command starts here.
fn resolve(store: &FsStore, secret_path: &Path, rng: &mut OsRandom) -> (MachineId, CipherKey) {
    let machine = EphemeralIdentity::new(OsRandom).current_identity();
    let secret = SecretKeyStore::load_or_generate(store, secret_path, rng);
    (machine, secret)
}

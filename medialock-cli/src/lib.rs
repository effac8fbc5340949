//! Command implementations for the MediaLock CLI.
//!
//! The binary half parses arguments and maps results to exit codes; the
//! functions here run the actual pipeline, so integration tests drive them
//! without spawning a process.
//!
//! Protected-operation flow:
//!
//! ```text
//! resolve identity -> resolve secret -> issue license            (generate)
//! resolve identity -> resolve secret -> load + validate -> op    (encrypt/decrypt)
//! ```
//!
//! Identity and secret are resolved once per run by the caller; validation
//! failure aborts before any cipher work starts.

use std::path::Path;

use anyhow::{bail, Context, Result};
use medialock_crypto::{open, seal, CipherKey, SecureRandom};
use medialock_license::{
    load_license, store_license, License, LicenseAuthority, LicenseError, MachineId,
};
use medialock_store::ByteStore;
use tracing::{info, warn};

/// Issues a license for `machine` and persists it.
pub fn generate_license(
    store: &dyn ByteStore,
    license_path: &Path,
    machine: &MachineId,
    secret: &CipherKey,
) -> Result<License> {
    let license = LicenseAuthority::issue(machine, secret);
    store_license(store, license_path, &license)
        .with_context(|| format!("could not persist license to {}", license_path.display()))?;
    info!("license issued for machine {machine}");
    Ok(license)
}

/// Runs the license gate: loads the persisted license and validates it
/// against `machine` and `secret`.
///
/// # Errors
///
/// [`LicenseError::Missing`] when no usable license is on disk;
/// [`LicenseError::Rejected`] when the digest does not match. Both abort the
/// requested operation.
pub fn check_license(
    store: &dyn ByteStore,
    license_path: &Path,
    machine: &MachineId,
    secret: &CipherKey,
) -> Result<()> {
    let license = load_license(store, license_path)
        .with_context(|| format!("no usable license at {}", license_path.display()))?;
    if !LicenseAuthority::validate(machine, &license, secret) {
        warn!("license does not match machine {machine}");
        return Err(LicenseError::Rejected.into());
    }
    info!("license validated for machine {machine}");
    Ok(())
}

/// Encrypts `input` into a self-contained container at `output`.
///
/// Callers must pass the license gate first. Empty input is refused.
pub fn encrypt_file(
    store: &dyn ByteStore,
    input: &Path,
    output: &Path,
    rng: &mut dyn SecureRandom,
) -> Result<()> {
    let plaintext = store
        .read(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    if plaintext.is_empty() {
        bail!("refusing to encrypt empty input {}", input.display());
    }

    let blob = seal(&plaintext, rng);
    store
        .write(output, &blob)
        .with_context(|| format!("could not write {}", output.display()))?;
    info!(
        "encrypted {} ({} bytes) into {} ({} bytes)",
        input.display(),
        plaintext.len(),
        output.display(),
        blob.len()
    );
    Ok(())
}

/// Decrypts a container at `input` back into plaintext at `output`.
///
/// Callers must pass the license gate first.
pub fn decrypt_file(store: &dyn ByteStore, input: &Path, output: &Path) -> Result<()> {
    let blob = store
        .read(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    let plaintext =
        open(&blob).with_context(|| format!("could not decrypt {}", input.display()))?;
    store
        .write(output, &plaintext)
        .with_context(|| format!("could not write {}", output.display()))?;
    info!(
        "decrypted {} into {} ({} bytes)",
        input.display(),
        output.display(),
        plaintext.len()
    );
    Ok(())
}

/// Writes a small placeholder media file to experiment with.
pub fn create_sample(store: &dyn ByteStore, path: &Path) -> Result<()> {
    const SAMPLE: &[u8] = b"This is a sample video file content.\n";
    store
        .write(path, SAMPLE)
        .with_context(|| format!("could not write sample to {}", path.display()))?;
    info!("sample media created at {}", path.display());
    Ok(())
}

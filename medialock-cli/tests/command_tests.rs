use std::path::Path;

use medialock_cli::{check_license, create_sample, decrypt_file, encrypt_file, generate_license};
use medialock_crypto::{CipherKey, OsRandom, SeededRandom, HEADER_SIZE};
use medialock_license::{EphemeralIdentity, IdentityProvider, LicenseError, SecretKeyStore};
use medialock_store::{ByteStore, MemStore};
use pretty_assertions::assert_eq;

const SECRET_PATH: &str = "secret.key";
const LICENSE_PATH: &str = "license.key";

fn resolve(store: &MemStore, seed: u64) -> (medialock_license::MachineId, CipherKey) {
    let machine = EphemeralIdentity::new(SeededRandom::from_seed(seed)).current_identity();
    let secret = SecretKeyStore::load_or_generate(
        store,
        Path::new(SECRET_PATH),
        &mut SeededRandom::from_seed(seed.wrapping_add(1)),
    );
    (machine, secret)
}

// ── License gate ─────────────────────────────────────────────────

#[test]
fn gate_passes_after_issuing_within_the_same_run() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 1);

    generate_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();
    check_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();
}

#[test]
fn gate_aborts_when_no_license_exists() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 2);

    let err = check_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::Missing)
    ));
}

#[test]
fn gate_aborts_on_an_empty_license_file() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 3);
    store.write(Path::new(LICENSE_PATH), b"\n").unwrap();

    assert!(check_license(&store, Path::new(LICENSE_PATH), &machine, &secret).is_err());
}

// A license issued for one identity never validates for the next; with the
// ephemeral provider that is every subsequent run.
#[test]
fn gate_aborts_for_a_stale_identity() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 4);
    generate_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();

    let next_machine = EphemeralIdentity::new(SeededRandom::from_seed(5)).current_identity();
    let err = check_license(&store, Path::new(LICENSE_PATH), &next_machine, &secret).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LicenseError>(),
        Some(LicenseError::Rejected)
    ));
}

#[test]
fn gate_aborts_after_the_secret_is_regenerated() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 6);
    generate_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();

    // Corrupt the stored secret; the next resolve discards and replaces it.
    store.write(Path::new(SECRET_PATH), b"garbage").unwrap();
    let fresh_secret =
        SecretKeyStore::load_or_generate(&store, Path::new(SECRET_PATH), &mut OsRandom);

    assert!(check_license(&store, Path::new(LICENSE_PATH), &machine, &fresh_secret).is_err());
}

// ── Encrypt / decrypt commands ───────────────────────────────────

#[test]
fn encrypt_decrypt_roundtrip_through_the_store() {
    let store = MemStore::new();
    let plaintext = b"This is a sample video file content.\n".to_vec();
    store.write(Path::new("video.txt"), &plaintext).unwrap();

    encrypt_file(
        &store,
        Path::new("video.txt"),
        Path::new("video.locked"),
        &mut OsRandom,
    )
    .unwrap();

    let blob = store.read(Path::new("video.locked")).unwrap();
    assert_eq!(blob.len(), HEADER_SIZE + 48);

    decrypt_file(&store, Path::new("video.locked"), Path::new("video.out")).unwrap();
    assert_eq!(store.read(Path::new("video.out")).unwrap(), plaintext);
}

#[test]
fn encrypt_refuses_missing_input() {
    let store = MemStore::new();
    assert!(encrypt_file(
        &store,
        Path::new("absent.txt"),
        Path::new("out.locked"),
        &mut OsRandom,
    )
    .is_err());
    assert!(!store.contains(Path::new("out.locked")));
}

#[test]
fn encrypt_refuses_empty_input() {
    let store = MemStore::new();
    store.write(Path::new("empty.txt"), b"").unwrap();

    assert!(encrypt_file(
        &store,
        Path::new("empty.txt"),
        Path::new("out.locked"),
        &mut OsRandom,
    )
    .is_err());
}

#[test]
fn decrypt_refuses_a_truncated_container() {
    let store = MemStore::new();
    store
        .write(Path::new("short.locked"), &vec![0u8; HEADER_SIZE - 1])
        .unwrap();

    assert!(decrypt_file(&store, Path::new("short.locked"), Path::new("out.txt")).is_err());
    assert!(!store.contains(Path::new("out.txt")));
}

#[test]
fn decrypt_refuses_corrupted_ciphertext() {
    let store = MemStore::new();
    store.write(Path::new("tiny.txt"), b"tiny").unwrap();
    encrypt_file(
        &store,
        Path::new("tiny.txt"),
        Path::new("tiny.locked"),
        &mut OsRandom,
    )
    .unwrap();

    // Single-block payload: flipping the final IV byte breaks the padding.
    let mut blob = store.read(Path::new("tiny.locked")).unwrap();
    blob[HEADER_SIZE - 1] ^= 0xFF;
    store.write(Path::new("tiny.locked"), &blob).unwrap();

    assert!(decrypt_file(&store, Path::new("tiny.locked"), Path::new("out.txt")).is_err());
}

// ── Sample creation ──────────────────────────────────────────────

#[test]
fn sample_writes_placeholder_media() {
    let store = MemStore::new();
    create_sample(&store, Path::new("sample_video.txt")).unwrap();

    let content = store.read(Path::new("sample_video.txt")).unwrap();
    assert_eq!(content, b"This is a sample video file content.\n");
}

#[test]
fn commands_work_against_real_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = medialock_store::FsStore;
    let input = dir.path().join("clip.txt");
    let locked = dir.path().join("clip.locked");
    let output = dir.path().join("clip.out");

    std::fs::write(&input, b"a real file on disk").unwrap();
    encrypt_file(&store, &input, &locked, &mut OsRandom).unwrap();
    decrypt_file(&store, &locked, &output).unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"a real file on disk");
}

// ── Full pipeline ────────────────────────────────────────────────

#[test]
fn licensed_run_encrypts_and_decrypts_end_to_end() {
    let store = MemStore::new();
    let (machine, secret) = resolve(&store, 7);

    generate_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();
    check_license(&store, Path::new(LICENSE_PATH), &machine, &secret).unwrap();

    create_sample(&store, Path::new("sample_video.txt")).unwrap();
    encrypt_file(
        &store,
        Path::new("sample_video.txt"),
        Path::new("sample_video.locked"),
        &mut OsRandom,
    )
    .unwrap();
    decrypt_file(
        &store,
        Path::new("sample_video.locked"),
        Path::new("sample_video.out"),
    )
    .unwrap();

    assert_eq!(
        store.read(Path::new("sample_video.out")).unwrap(),
        store.read(Path::new("sample_video.txt")).unwrap()
    );
}

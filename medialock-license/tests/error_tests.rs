use std::path::Path;

use medialock_license::{LicenseError, MachineId};
use medialock_store::{ByteStore, MemStore};

#[test]
fn error_display_missing() {
    let err = LicenseError::Missing;
    assert!(format!("{err}").contains("missing or empty"));
}

#[test]
fn error_display_rejected() {
    let err = LicenseError::Rejected;
    assert!(format!("{err}").contains("rejected"));
}

#[test]
fn error_display_decode() {
    let err = MachineId::parse("zz").unwrap_err();
    assert!(format!("{err}").contains("invalid hex material"));
}

#[test]
fn error_display_invalid_id_length() {
    let err = LicenseError::InvalidIdLength {
        expected: 16,
        actual: 4,
    };
    let msg = format!("{err}");
    assert!(msg.contains("16"));
    assert!(msg.contains("4"));
}

#[test]
fn error_from_store() {
    let store_err = MemStore::new().read(Path::new("absent")).unwrap_err();
    let license_err: LicenseError = store_err.into();
    assert!(format!("{license_err}").contains("store error"));
}

#[test]
fn error_is_debug() {
    let err = LicenseError::Missing;
    let _ = format!("{err:?}");
}

//! Integration test: vkmock CLI commands
//!
//! Builds manifests the way `vkmock manifest` does and checks that the
//! loader handshake fails when no driver library is present.
//!
//! Run with: cargo test -p vkmock-cli --test cli_test -- --nocapture

use std::path::Path;

use vkmock_cli::{manifest, probe};
use vkmock_common::manifest::FILE_FORMAT_VERSION;
use vkmock_common::platform::icd_library_name;
use vkmock_common::IcdManifest;

#[test]
fn test_manifest_from_options() {
    let built = manifest::build_manifest(Some("/opt/vkmock/libvkmock_icd.so".into()), Some("1.3"))
        .expect("build manifest");
    let json = built.to_json().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["file_format_version"], FILE_FORMAT_VERSION);
    assert_eq!(value["ICD"]["library_path"], "/opt/vkmock/libvkmock_icd.so");
    assert_eq!(value["ICD"]["api_version"], "1.3.0");
}

#[test]
fn test_manifest_defaults() {
    let built = manifest::build_manifest(None, None).expect("build manifest");
    assert_eq!(built.icd.library_path, format!("./{}", icd_library_name()));
    assert_eq!(built.icd.api_version, manifest::header_api_version());
    assert!(built.icd.api_version.starts_with("1."));
}

#[test]
fn test_manifest_rejects_bad_version() {
    let err = manifest::build_manifest(None, Some("one.three")).unwrap_err();
    assert!(err.to_string().contains("one.three"), "{}", err);
    assert!(manifest::build_manifest(None, Some("1.3.280.1")).is_err());
}

#[test]
fn test_manifest_written_to_file() {
    let path = std::env::temp_dir().join(format!("vkmock_cli_test_{}.json", std::process::id()));
    let built = manifest::build_manifest(Some("./libvkmock_icd.so".into()), Some("1.2.190")).unwrap();
    manifest::write_manifest(&built, Some(&path)).expect("write manifest");

    let text = std::fs::read_to_string(&path).expect("read back");
    std::fs::remove_file(&path).ok();
    assert!(text.ends_with('\n'));
    let back = IcdManifest::from_json(&text).expect("parse");
    assert_eq!(back, built);
    assert_eq!(back.icd.api_version, "1.2.190");
}

#[test]
fn test_handshake_needs_a_library() {
    let missing = Path::new("/nonexistent/vkmock/libvkmock_icd.so");
    let err = probe::run_probe(missing).expect_err("handshake must fail without a library");
    let message = format!("{:#}", err);
    assert!(message.contains("cannot load"), "{}", message);
    assert!(message.contains("/nonexistent/vkmock/libvkmock_icd.so"), "{}", message);
}

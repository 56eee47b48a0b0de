//! Integration test: ICD manifest
//!
//! Run with: cargo test -p vkmock-common --test manifest_test

use vkmock_common::manifest::{parse_api_version, IcdManifest, FILE_FORMAT_VERSION};
use vkmock_common::platform::{icd_library_name, icd_manifest_name};

#[test]
fn test_manifest_layout() {
    let manifest = IcdManifest::new("./libvkmock_icd.so", "1.3.280");
    let json = manifest.to_json().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["file_format_version"], FILE_FORMAT_VERSION);
    assert_eq!(value["ICD"]["library_path"], "./libvkmock_icd.so");
    assert_eq!(value["ICD"]["api_version"], "1.3.280");

    let back = IcdManifest::from_json(&json).expect("parse");
    assert_eq!(back, manifest);
}

#[test]
fn test_manifest_rejects_missing_icd_section() {
    let err = IcdManifest::from_json(r#"{"file_format_version": "1.0.1"}"#);
    assert!(err.is_err());
}

#[test]
fn test_parse_api_version() {
    assert_eq!(parse_api_version("1.3.280"), Some((1, 3, 280)));
    assert_eq!(parse_api_version("1.2"), Some((1, 2, 0)));
    assert_eq!(parse_api_version(" 1.0.0 "), Some((1, 0, 0)));
    assert_eq!(parse_api_version("1"), None);
    assert_eq!(parse_api_version("1.x.0"), None);
    assert_eq!(parse_api_version("1.2.3.4"), None);
}

#[test]
fn test_platform_names() {
    assert!(icd_library_name().contains("vkmock_icd"));
    assert!(icd_manifest_name().ends_with(".json"));
}

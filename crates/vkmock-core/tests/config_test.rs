//! Integration test: MockConfig parsing
//!
//! Run with: cargo test -p vkmock-core --test config_test

use vkmock_core::{DriverError, MockConfig};

#[test]
fn test_defaults() {
    let config = MockConfig::default();
    assert_eq!(config.device.name, "Vulkan Mock Device");
    assert_eq!(config.device.vendor_id, 0xba5e_ba11);
    assert_eq!(config.memory.heap_size, 8_000_000_000);
    assert!(config.queue.fail_submit_on_export_fence);
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(MockConfig::from_toml_str("").unwrap(), MockConfig::default());
}

#[test]
fn test_partial_sections() {
    let config = MockConfig::from_toml_str(
        r#"
[device]
name = "CI GPU"

[queue]
fail_submit_on_export_fence = false
"#,
    )
    .unwrap();
    assert_eq!(config.device.name, "CI GPU");
    assert_eq!(config.device.device_id, 0xf005_ba11);
    assert_eq!(config.memory.heap_size, 8_000_000_000);
    assert!(!config.queue.fail_submit_on_export_fence);
}

#[test]
fn test_bad_toml_is_config_error() {
    match MockConfig::from_toml_str("[memory]\nheap_size = \"lots\"") {
        Err(DriverError::Config(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_falls_back() {
    assert!(MockConfig::load("/nonexistent/vkmock.toml").is_err());
    assert_eq!(
        MockConfig::load_or_default("/nonexistent/vkmock.toml"),
        MockConfig::default()
    );
}

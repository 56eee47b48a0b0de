/// File name of the driver library produced by the `vkmock-icd` crate.
pub fn icd_library_name() -> &'static str {
    #[cfg(target_os = "windows")]
    { "vkmock_icd.dll" }
    #[cfg(target_os = "macos")]
    { "libvkmock_icd.dylib" }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    { "libvkmock_icd.so" }
}

/// File name the loader expects for our ICD manifest.
pub fn icd_manifest_name() -> &'static str {
    "vkmock_icd.json"
}

/// Returns the platform name string.
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "windows")]
    { "windows" }
    #[cfg(target_os = "linux")]
    { "linux" }
    #[cfg(target_os = "macos")]
    { "macos" }
    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    { "unknown" }
}

//! The `manifest` subcommand.

use std::path::Path;

use anyhow::Context;
use ash::vk;
use tracing::info;
use vkmock_common::manifest::parse_api_version;
use vkmock_common::{platform, IcdManifest};

/// API version of the headers the driver was built against, as `major.minor.patch`.
pub fn header_api_version() -> String {
    format!(
        "{}.{}.{}",
        vk::api_version_major(vk::HEADER_VERSION_COMPLETE),
        vk::api_version_minor(vk::HEADER_VERSION_COMPLETE),
        vk::api_version_patch(vk::HEADER_VERSION_COMPLETE)
    )
}

/// Build the manifest from the command line options.
///
/// The library defaults to the platform's driver file name next to the
/// manifest; the API version defaults to [`header_api_version`].
pub fn build_manifest(library: Option<String>, api_version: Option<&str>) -> anyhow::Result<IcdManifest> {
    let library = library.unwrap_or_else(|| format!("./{}", platform::icd_library_name()));
    let api_version = match api_version {
        Some(text) => {
            let (major, minor, patch) =
                parse_api_version(text).ok_or_else(|| anyhow::anyhow!("invalid API version '{}'", text))?;
            format!("{}.{}.{}", major, minor, patch)
        }
        None => header_api_version(),
    };
    Ok(IcdManifest::new(library, api_version))
}

/// Write `manifest` to `output`, or to stdout when no path is given.
pub fn write_manifest(manifest: &IcdManifest, output: Option<&Path>) -> anyhow::Result<()> {
    let json = manifest.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!("wrote {} manifest to {}", platform::platform_name(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

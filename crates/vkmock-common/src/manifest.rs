//! Loader ICD manifest (`*_icd.json`).

use serde::{Deserialize, Serialize};

/// Manifest schema version understood by every loader that supports
/// interface version 5.
pub const FILE_FORMAT_VERSION: &str = "1.0.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcdManifest {
    pub file_format_version: String,
    #[serde(rename = "ICD")]
    pub icd: IcdEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcdEntry {
    pub library_path: String,
    pub api_version: String,
}

impl IcdManifest {
    pub fn new(library_path: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            file_format_version: FILE_FORMAT_VERSION.to_string(),
            icd: IcdEntry {
                library_path: library_path.into(),
                api_version: api_version.into(),
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Parse a dotted `major.minor[.patch]` API version.
pub fn parse_api_version(text: &str) -> Option<(u32, u32, u32)> {
    let mut parts = text.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// Environment variable naming the TOML file the driver reads at load time.
pub const CONFIG_ENV: &str = "VKMOCK_CONFIG";

/// Top-level mock driver configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub queue: QueueConfig,
}

/// Identity reported by `vkGetPhysicalDeviceProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device name, truncated to fit `VK_MAX_PHYSICAL_DEVICE_NAME_SIZE`
    #[serde(default = "default_device_name")]
    pub name: String,
    #[serde(default = "default_vendor_id")]
    pub vendor_id: u32,
    #[serde(default = "default_device_id")]
    pub device_id: u32,
    #[serde(default = "default_driver_version")]
    pub driver_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Size in bytes reported for each of the two memory heaps
    #[serde(default = "default_heap_size")]
    pub heap_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Make `vkQueueSubmit` report device loss when the first submit carries
    /// a lone `VkExportFenceCreateInfo` in its pNext chain
    #[serde(default = "default_true")]
    pub fail_submit_on_export_fence: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: default_device_name(),
            vendor_id: default_vendor_id(),
            device_id: default_device_id(),
            driver_version: default_driver_version(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            heap_size: default_heap_size(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            fail_submit_on_export_fence: true,
        }
    }
}

impl MockConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, DriverError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        toml::from_str(content).map_err(|e| DriverError::Config(e.to_string()))
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default mock configuration, {} unusable: {}", path, e);
                Self::default()
            }
        }
    }

    /// Configuration named by `VKMOCK_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }
}

fn default_device_name() -> String {
    "Vulkan Mock Device".to_string()
}

fn default_vendor_id() -> u32 {
    0xba5e_ba11
}

fn default_device_id() -> u32 {
    0xf005_ba11
}

fn default_driver_version() -> u32 {
    1
}

fn default_heap_size() -> u64 {
    8_000_000_000
}

fn default_true() -> bool {
    true
}

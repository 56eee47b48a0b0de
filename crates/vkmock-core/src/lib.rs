//! Host-side state of the mock Vulkan driver.
//!
//! Nothing in here talks to a GPU. The crate owns the handle counter, the
//! compiled-in description of the fake physical device and the registry
//! that maps live handles to whatever the entry points need to remember
//! about them. The `vkmock-icd` crate wraps all of this behind the Vulkan
//! loader-to-driver ABI.

pub mod caps;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod handles;
pub mod registry;

pub use config::MockConfig;
pub use error::DriverError;
pub use handles::{DispatchableObject, HandleAllocator, ICD_LOADER_MAGIC};
pub use registry::{BufferRecord, DisplayRecord, DriverState, ObjectKind};

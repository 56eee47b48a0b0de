//! Mock Vulkan ICD (Installable Client Driver)
//!
//! This cdylib implements the loader-to-driver interface entirely in host
//! memory. It exposes one synthetic GPU, hands out real dispatchable and
//! non-dispatchable handles and answers capability queries with canned
//! values, so loader and layer code can be exercised without hardware.

use std::ffi::c_char;
use std::sync::OnceLock;

use ash::vk;
use vkmock_core::{DriverState, MockConfig};

pub mod acceleration;
pub mod chain;
pub mod command;
pub mod descriptor;
pub mod device;
pub mod dispatch;
pub mod display;
pub mod image;
pub mod instance;
pub mod memory;
pub mod physical_device;
pub mod pipeline;
pub mod renderpass;
pub mod swapchain;
pub mod sync;

// ── Driver singleton ────────────────────────────────────────

static DRIVER: OnceLock<DriverState> = OnceLock::new();

/// Process-wide driver state, created on first use.
pub fn driver() -> &'static DriverState {
    DRIVER.get_or_init(|| {
        vkmock_common::try_init_driver_logging();
        DriverState::new(MockConfig::from_env())
    })
}

/// Write a freshly created handle to its output slot.
pub(crate) unsafe fn write_handle<H: vk::Handle>(
    created: Result<H, vkmock_core::DriverError>,
    p_out: *mut H,
) -> vk::Result {
    if p_out.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    match created {
        Ok(handle) => {
            *p_out = handle;
            vk::Result::SUCCESS
        }
        Err(e) => {
            tracing::warn!("{}", e);
            e.to_vk_result()
        }
    }
}

/// Register a stateless object and write its handle.
pub(crate) unsafe fn create_object<H: vk::Handle>(
    kind: vkmock_core::ObjectKind,
    p_out: *mut H,
) -> vk::Result {
    write_handle(driver().create_object(kind).map(H::from_raw), p_out)
}

pub(crate) fn destroy_object<H: vk::Handle + Copy>(handle: H) {
    if !handle.is_null() {
        driver().destroy_object(handle.as_raw());
    }
}

// ── ICD Negotiation ─────────────────────────────────────────

/// Negotiate the ICD interface version with the Vulkan loader.
#[no_mangle]
pub unsafe extern "system" fn vk_icdNegotiateLoaderICDInterfaceVersion(
    p_supported_version: *mut u32,
) -> vk::Result {
    if p_supported_version.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    match driver().negotiate_interface_version(*p_supported_version) {
        Ok(version) => {
            *p_supported_version = version;
            vk::Result::SUCCESS
        }
        Err(e) => {
            tracing::warn!("{}", e);
            e.to_vk_result()
        }
    }
}

/// Returns function pointers for Vulkan functions.
/// The Vulkan loader calls this to resolve all Vulkan entry points.
#[no_mangle]
pub unsafe extern "system" fn vk_icdGetInstanceProcAddr(
    instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    instance::vkGetInstanceProcAddr(instance, p_name)
}

/// Returns function pointers for physical-device-level functions only.
#[no_mangle]
pub unsafe extern "system" fn vk_icdGetPhysicalDeviceProcAddr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    dispatch::resolve_physical_device(p_name)
}

//! VK_KHR_display: one 1920x1080 display with a single plane per physical device.

use std::ffi::CStr;

use ash::vk;
use tracing::warn;
use vkmock_core::enumerate::enumerate;
use vkmock_core::{DisplayRecord, ObjectKind};

use crate::{create_object, driver};

const DISPLAY_NAME: &CStr = c"Vulkan Mock Display";
const RESOLUTION: vk::Extent2D = vk::Extent2D {
    width: 1920,
    height: 1080,
};
/// Millihertz.
const REFRESH_RATE: u32 = 60_000;

fn attached(physical_device: vk::PhysicalDevice) -> Option<DisplayRecord> {
    match driver().display(physical_device) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

// ── Physical device queries ────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceDisplayPropertiesKHR(
    physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    p_properties: *mut vk::DisplayPropertiesKHR<'_>,
) -> vk::Result {
    let Some(record) = attached(physical_device) else {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    };
    let props = vk::DisplayPropertiesKHR {
        display: record.display,
        display_name: DISPLAY_NAME.as_ptr(),
        physical_dimensions: vk::Extent2D {
            width: 527,
            height: 296,
        },
        physical_resolution: RESOLUTION,
        supported_transforms: vk::SurfaceTransformFlagsKHR::IDENTITY,
        plane_reorder_possible: vk::FALSE,
        persistent_content: vk::FALSE,
        ..Default::default()
    };
    enumerate(&[props], p_property_count, p_properties)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceDisplayPlanePropertiesKHR(
    physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    p_properties: *mut vk::DisplayPlanePropertiesKHR,
) -> vk::Result {
    let Some(record) = attached(physical_device) else {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    };
    let plane = vk::DisplayPlanePropertiesKHR {
        current_display: record.display,
        current_stack_index: 0,
    };
    enumerate(&[plane], p_property_count, p_properties)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDisplayPlaneSupportedDisplaysKHR(
    physical_device: vk::PhysicalDevice,
    plane_index: u32,
    p_display_count: *mut u32,
    p_displays: *mut vk::DisplayKHR,
) -> vk::Result {
    if plane_index != 0 {
        return enumerate::<vk::DisplayKHR>(&[], p_display_count, p_displays);
    }
    let Some(record) = attached(physical_device) else {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    };
    enumerate(&[record.display], p_display_count, p_displays)
}

/// Only the display's native mode is listed.
#[no_mangle]
pub unsafe extern "system" fn vkGetDisplayModePropertiesKHR(
    physical_device: vk::PhysicalDevice,
    display: vk::DisplayKHR,
    p_property_count: *mut u32,
    p_properties: *mut vk::DisplayModePropertiesKHR,
) -> vk::Result {
    let Some(record) = attached(physical_device) else {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    };
    if display != record.display {
        return enumerate::<vk::DisplayModePropertiesKHR>(&[], p_property_count, p_properties);
    }
    let mode = vk::DisplayModePropertiesKHR {
        display_mode: record.mode,
        parameters: vk::DisplayModeParametersKHR {
            visible_region: RESOLUTION,
            refresh_rate: REFRESH_RATE,
        },
    };
    enumerate(&[mode], p_property_count, p_properties)
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateDisplayModeKHR(
    _physical_device: vk::PhysicalDevice,
    _display: vk::DisplayKHR,
    _p_create_info: *const vk::DisplayModeCreateInfoKHR<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_mode: *mut vk::DisplayModeKHR,
) -> vk::Result {
    create_object(ObjectKind::DisplayMode, p_mode)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDisplayPlaneCapabilitiesKHR(
    _physical_device: vk::PhysicalDevice,
    _mode: vk::DisplayModeKHR,
    _plane_index: u32,
    p_capabilities: *mut vk::DisplayPlaneCapabilitiesKHR,
) -> vk::Result {
    if p_capabilities.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let one = vk::Extent2D {
        width: 1,
        height: 1,
    };
    *p_capabilities = vk::DisplayPlaneCapabilitiesKHR {
        supported_alpha: vk::DisplayPlaneAlphaFlagsKHR::OPAQUE,
        min_src_position: vk::Offset2D::default(),
        max_src_position: vk::Offset2D::default(),
        min_src_extent: one,
        max_src_extent: RESOLUTION,
        min_dst_position: vk::Offset2D::default(),
        max_dst_position: vk::Offset2D::default(),
        min_dst_extent: one,
        max_dst_extent: RESOLUTION,
    };
    vk::Result::SUCCESS
}

// ── Surface ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateDisplayPlaneSurfaceKHR(
    _instance: vk::Instance,
    p_create_info: *const vk::DisplaySurfaceCreateInfoKHR<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_surface: *mut vk::SurfaceKHR,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    create_object(ObjectKind::Surface, p_surface)
}

//! Vulkan instance and enumeration functions.

use std::ffi::c_char;

use ash::vk;
use tracing::{info, warn};
use vkmock_core::caps;
use vkmock_core::enumerate::{enumerate, enumerate_extensions, enumerate_with};

use crate::{dispatch, driver, write_handle};

#[no_mangle]
pub unsafe extern "system" fn vkCreateInstance(
    p_create_info: *const vk::InstanceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    if p_create_info.is_null() || p_instance.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    let ci = &*p_create_info;
    let api_version = if ci.p_application_info.is_null() {
        vk::API_VERSION_1_0
    } else {
        (*ci.p_application_info).api_version
    };

    // Loaders at interface version 4 or older cannot drive a 1.1+ instance.
    let state = driver();
    let negotiated = state.loader_interface_version();
    if negotiated <= 4 && api_version > vk::API_VERSION_1_0 {
        warn!(
            "instance for API {}.{} refused, loader interface version is {}",
            vk::api_version_major(api_version),
            vk::api_version_minor(api_version),
            negotiated
        );
        return vk::Result::ERROR_INCOMPATIBLE_DRIVER;
    }

    let result = write_handle(state.create_instance(), p_instance);
    if result == vk::Result::SUCCESS {
        info!(
            "created instance for API {}.{}.{}",
            vk::api_version_major(api_version),
            vk::api_version_minor(api_version),
            vk::api_version_patch(api_version)
        );
    }
    result
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyInstance(
    instance: vk::Instance,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if instance == vk::Instance::null() {
        return;
    }
    driver().destroy_instance(instance);
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateInstanceVersion(p_api_version: *mut u32) -> vk::Result {
    if p_api_version.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_api_version = vk::HEADER_VERSION_COMPLETE;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateInstanceExtensionProperties(
    p_layer_name: *const c_char,
    p_property_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    enumerate_extensions(
        &caps::instance_extensions(),
        p_layer_name,
        p_property_count,
        p_properties,
    )
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateInstanceLayerProperties(
    p_property_count: *mut u32,
    p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    enumerate::<vk::LayerProperties>(&[], p_property_count, p_properties)
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumeratePhysicalDevices(
    instance: vk::Instance,
    p_physical_device_count: *mut u32,
    p_physical_devices: *mut vk::PhysicalDevice,
) -> vk::Result {
    let physical_devices = driver().physical_devices(instance);
    enumerate(&physical_devices, p_physical_device_count, p_physical_devices)
}

/// One group holding the single physical device.
#[no_mangle]
pub unsafe extern "system" fn vkEnumeratePhysicalDeviceGroups(
    instance: vk::Instance,
    p_group_count: *mut u32,
    p_groups: *mut vk::PhysicalDeviceGroupProperties<'_>,
) -> vk::Result {
    let physical_devices = driver().physical_devices(instance);
    let groups = usize::from(!physical_devices.is_empty());
    enumerate_with(groups, p_group_count, p_groups, |_, group| {
        group.physical_device_count = physical_devices.len() as u32;
        for (slot, pd) in group.physical_devices.iter_mut().zip(&physical_devices) {
            *slot = *pd;
        }
        group.subset_allocation = vk::FALSE;
    })
}

#[no_mangle]
pub unsafe extern "system" fn vkGetInstanceProcAddr(
    _instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    dispatch::resolve(p_name)
}

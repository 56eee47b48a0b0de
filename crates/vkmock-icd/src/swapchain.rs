//! Surfaces, surface queries, swapchains and presentation.

use ash::vk;
use vkmock_core::caps;
use vkmock_core::enumerate::{enumerate, enumerate_with};
use vkmock_core::ObjectKind;

use crate::{chain, create_object, destroy_object, driver, write_handle};

// ── Surfaces ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateHeadlessSurfaceEXT(
    _instance: vk::Instance,
    _p_create_info: *const vk::HeadlessSurfaceCreateInfoEXT<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_surface: *mut vk::SurfaceKHR,
) -> vk::Result {
    create_object(ObjectKind::Surface, p_surface)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroySurfaceKHR(
    _instance: vk::Instance,
    surface: vk::SurfaceKHR,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(surface);
}

/// Every queue family can present to every surface.
#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfaceSupportKHR(
    _physical_device: vk::PhysicalDevice,
    _queue_family_index: u32,
    _surface: vk::SurfaceKHR,
    p_supported: *mut vk::Bool32,
) -> vk::Result {
    if p_supported.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_supported = vk::TRUE;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfaceCapabilitiesKHR(
    _physical_device: vk::PhysicalDevice,
    _surface: vk::SurfaceKHR,
    p_surface_capabilities: *mut vk::SurfaceCapabilitiesKHR,
) -> vk::Result {
    if p_surface_capabilities.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_surface_capabilities = caps::surface_capabilities();
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfaceCapabilities2KHR(
    physical_device: vk::PhysicalDevice,
    p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR<'_>,
    p_surface_capabilities: *mut vk::SurfaceCapabilities2KHR<'_>,
) -> vk::Result {
    if p_surface_info.is_null() || p_surface_capabilities.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let out = &mut *p_surface_capabilities;
    let result = vkGetPhysicalDeviceSurfaceCapabilitiesKHR(
        physical_device,
        (*p_surface_info).surface,
        &mut out.surface_capabilities,
    );

    if let Some(compat) = chain::find_out::<vk::SurfacePresentModeCompatibilityEXT<'_>>(out.p_next) {
        const COMPATIBLE: [vk::PresentModeKHR; 3] = [
            vk::PresentModeKHR::IMMEDIATE,
            vk::PresentModeKHR::FIFO,
            vk::PresentModeKHR::SHARED_DEMAND_REFRESH,
        ];
        enumerate(
            &COMPATIBLE,
            &mut compat.present_mode_count,
            compat.p_present_modes,
        );
    }
    result
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfaceFormatsKHR(
    _physical_device: vk::PhysicalDevice,
    _surface: vk::SurfaceKHR,
    p_surface_format_count: *mut u32,
    p_surface_formats: *mut vk::SurfaceFormatKHR,
) -> vk::Result {
    enumerate(&caps::SURFACE_FORMATS, p_surface_format_count, p_surface_formats)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfaceFormats2KHR(
    _physical_device: vk::PhysicalDevice,
    _p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR<'_>,
    p_surface_format_count: *mut u32,
    p_surface_formats: *mut vk::SurfaceFormat2KHR<'_>,
) -> vk::Result {
    enumerate_with(
        caps::SURFACE_FORMATS.len(),
        p_surface_format_count,
        p_surface_formats,
        |i, slot| slot.surface_format = caps::SURFACE_FORMATS[i],
    )
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSurfacePresentModesKHR(
    _physical_device: vk::PhysicalDevice,
    _surface: vk::SurfaceKHR,
    p_present_mode_count: *mut u32,
    p_present_modes: *mut vk::PresentModeKHR,
) -> vk::Result {
    enumerate(&caps::PRESENT_MODES, p_present_mode_count, p_present_modes)
}

// ── Swapchains ──────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateSwapchainKHR(
    _device: vk::Device,
    p_create_info: *const vk::SwapchainCreateInfoKHR<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_swapchain: *mut vk::SwapchainKHR,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    write_handle(driver().create_swapchain(), p_swapchain)
}

/// Removes only `swapchain`; other swapchains keep their images.
#[no_mangle]
pub unsafe extern "system" fn vkDestroySwapchainKHR(
    _device: vk::Device,
    swapchain: vk::SwapchainKHR,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if swapchain == vk::SwapchainKHR::null() {
        return;
    }
    driver().destroy_swapchain(swapchain);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetSwapchainImagesKHR(
    _device: vk::Device,
    swapchain: vk::SwapchainKHR,
    p_swapchain_image_count: *mut u32,
    p_swapchain_images: *mut vk::Image,
) -> vk::Result {
    let images = driver().swapchain_images(swapchain).unwrap_or_default();
    enumerate(&images, p_swapchain_image_count, p_swapchain_images)
}

#[no_mangle]
pub unsafe extern "system" fn vkAcquireNextImageKHR(
    _device: vk::Device,
    _swapchain: vk::SwapchainKHR,
    _timeout: u64,
    _semaphore: vk::Semaphore,
    _fence: vk::Fence,
    p_image_index: *mut u32,
) -> vk::Result {
    if p_image_index.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_image_index = 0;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkAcquireNextImage2KHR(
    _device: vk::Device,
    _p_acquire_info: *const vk::AcquireNextImageInfoKHR<'_>,
    p_image_index: *mut u32,
) -> vk::Result {
    if p_image_index.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_image_index = 0;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkQueuePresentKHR(
    _queue: vk::Queue,
    p_present_info: *const vk::PresentInfoKHR<'_>,
) -> vk::Result {
    if p_present_info.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let info = &*p_present_info;
    if !info.p_results.is_null() {
        std::slice::from_raw_parts_mut(info.p_results, info.swapchain_count as usize)
            .fill(vk::Result::SUCCESS);
    }
    vk::Result::SUCCESS
}

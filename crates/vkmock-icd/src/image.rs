//! Image, image view and sampler functions for the Vulkan ICD.

use ash::vk;
use vkmock_core::caps;
use vkmock_core::enumerate::{enumerate, enumerate_with};
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object, driver, write_handle};

#[no_mangle]
pub unsafe extern "system" fn vkCreateImage(
    device: vk::Device,
    p_create_info: *const vk::ImageCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_image: *mut vk::Image,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    let size = caps::image_size(&*p_create_info);
    write_handle(driver().create_image(device, size), p_image)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyImage(
    device: vk::Device,
    image: vk::Image,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if image == vk::Image::null() {
        return;
    }
    driver().destroy_image(device, image);
}

#[no_mangle]
pub unsafe extern "system" fn vkBindImageMemory(
    _device: vk::Device,
    _image: vk::Image,
    _memory: vk::DeviceMemory,
    _memory_offset: vk::DeviceSize,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkBindImageMemory2(
    _device: vk::Device,
    _bind_info_count: u32,
    _p_bind_infos: *const vk::BindImageMemoryInfo<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetImageMemoryRequirements(
    device: vk::Device,
    image: vk::Image,
    p_memory_requirements: *mut vk::MemoryRequirements,
) {
    if p_memory_requirements.is_null() {
        return;
    }
    let size = driver().image_size(device, image);
    *p_memory_requirements = caps::image_memory_requirements(size);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetImageMemoryRequirements2(
    device: vk::Device,
    p_info: *const vk::ImageMemoryRequirementsInfo2<'_>,
    p_memory_requirements: *mut vk::MemoryRequirements2<'_>,
) {
    if p_info.is_null() || p_memory_requirements.is_null() {
        return;
    }
    vkGetImageMemoryRequirements(
        device,
        (*p_info).image,
        &mut (*p_memory_requirements).memory_requirements,
    );
}

/// Requirements for an image that was never created.
#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceImageMemoryRequirements(
    _device: vk::Device,
    p_info: *const vk::DeviceImageMemoryRequirements<'_>,
    p_memory_requirements: *mut vk::MemoryRequirements2<'_>,
) {
    if p_info.is_null() || p_memory_requirements.is_null() {
        return;
    }
    let create_info = (*p_info).p_create_info;
    let size = (!create_info.is_null()).then(|| caps::image_size(&*create_info));
    (*p_memory_requirements).memory_requirements = caps::image_memory_requirements(size);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetImageSparseMemoryRequirements(
    _device: vk::Device,
    _image: vk::Image,
    p_sparse_memory_requirement_count: *mut u32,
    p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements,
) {
    enumerate(
        &[caps::image_sparse_memory_requirements()],
        p_sparse_memory_requirement_count,
        p_sparse_memory_requirements,
    );
}

#[no_mangle]
pub unsafe extern "system" fn vkGetImageSparseMemoryRequirements2(
    _device: vk::Device,
    _p_info: *const vk::ImageSparseMemoryRequirementsInfo2<'_>,
    p_sparse_memory_requirement_count: *mut u32,
    p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements2<'_>,
) {
    enumerate_with(
        1,
        p_sparse_memory_requirement_count,
        p_sparse_memory_requirements,
        |_, slot| slot.memory_requirements = caps::image_sparse_memory_requirements(),
    );
}

#[no_mangle]
pub unsafe extern "system" fn vkGetImageSubresourceLayout(
    _device: vk::Device,
    _image: vk::Image,
    _p_subresource: *const vk::ImageSubresource,
    p_layout: *mut vk::SubresourceLayout,
) {
    if !p_layout.is_null() {
        *p_layout = vk::SubresourceLayout::default();
    }
}

// ── Image views ─────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateImageView(
    _device: vk::Device,
    _p_create_info: *const vk::ImageViewCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_view: *mut vk::ImageView,
) -> vk::Result {
    create_object(ObjectKind::ImageView, p_view)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyImageView(
    _device: vk::Device,
    image_view: vk::ImageView,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(image_view);
}

// ── Samplers ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateSampler(
    _device: vk::Device,
    _p_create_info: *const vk::SamplerCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_sampler: *mut vk::Sampler,
) -> vk::Result {
    create_object(ObjectKind::Sampler, p_sampler)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroySampler(
    _device: vk::Device,
    sampler: vk::Sampler,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(sampler);
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateSamplerYcbcrConversion(
    _device: vk::Device,
    _p_create_info: *const vk::SamplerYcbcrConversionCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_ycbcr_conversion: *mut vk::SamplerYcbcrConversion,
) -> vk::Result {
    create_object(ObjectKind::SamplerYcbcrConversion, p_ycbcr_conversion)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroySamplerYcbcrConversion(
    _device: vk::Device,
    ycbcr_conversion: vk::SamplerYcbcrConversion,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(ycbcr_conversion);
}

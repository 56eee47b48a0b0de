//! Descriptor set layout, pool, set and update template functions.
//!
//! Descriptor sets are registered as children of the pool they were
//! allocated from, so destroying or resetting the pool reclaims them.

use ash::vk;
use ash::vk::Handle;
use tracing::warn;
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object, driver};

// ── Set layouts ─────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateDescriptorSetLayout(
    _device: vk::Device,
    _p_create_info: *const vk::DescriptorSetLayoutCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_set_layout: *mut vk::DescriptorSetLayout,
) -> vk::Result {
    create_object(ObjectKind::DescriptorSetLayout, p_set_layout)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyDescriptorSetLayout(
    _device: vk::Device,
    set_layout: vk::DescriptorSetLayout,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(set_layout);
}

/// Every layout is reported as supported.
#[no_mangle]
pub unsafe extern "system" fn vkGetDescriptorSetLayoutSupport(
    _device: vk::Device,
    _p_create_info: *const vk::DescriptorSetLayoutCreateInfo<'_>,
    p_support: *mut vk::DescriptorSetLayoutSupport<'_>,
) {
    if !p_support.is_null() {
        (*p_support).supported = vk::TRUE;
    }
}

/// Non-zero so descriptor buffer users can size their allocations.
#[no_mangle]
pub unsafe extern "system" fn vkGetDescriptorSetLayoutSizeEXT(
    _device: vk::Device,
    _layout: vk::DescriptorSetLayout,
    p_layout_size_in_bytes: *mut vk::DeviceSize,
) {
    if !p_layout_size_in_bytes.is_null() {
        *p_layout_size_in_bytes = 4;
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDescriptorSetLayoutBindingOffsetEXT(
    _device: vk::Device,
    _layout: vk::DescriptorSetLayout,
    _binding: u32,
    p_offset: *mut vk::DeviceSize,
) {
    if !p_offset.is_null() {
        *p_offset = 0;
    }
}

// ── Pools ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateDescriptorPool(
    _device: vk::Device,
    _p_create_info: *const vk::DescriptorPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_descriptor_pool: *mut vk::DescriptorPool,
) -> vk::Result {
    create_object(ObjectKind::DescriptorPool, p_descriptor_pool)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyDescriptorPool(
    _device: vk::Device,
    descriptor_pool: vk::DescriptorPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(descriptor_pool);
}

#[no_mangle]
pub unsafe extern "system" fn vkResetDescriptorPool(
    _device: vk::Device,
    descriptor_pool: vk::DescriptorPool,
    _flags: vk::DescriptorPoolResetFlags,
) -> vk::Result {
    if !descriptor_pool.is_null() {
        driver().reset_children(descriptor_pool.as_raw());
    }
    vk::Result::SUCCESS
}

// ── Sets ────────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkAllocateDescriptorSets(
    _device: vk::Device,
    p_allocate_info: *const vk::DescriptorSetAllocateInfo<'_>,
    p_descriptor_sets: *mut vk::DescriptorSet,
) -> vk::Result {
    if p_allocate_info.is_null() || p_descriptor_sets.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let info = &*p_allocate_info;
    let pool = info.descriptor_pool.as_raw();
    let out = std::slice::from_raw_parts_mut(p_descriptor_sets, info.descriptor_set_count as usize);

    for i in 0..out.len() {
        match driver().create_object_in(ObjectKind::DescriptorSet, Some(pool)) {
            Ok(raw) => out[i] = vk::DescriptorSet::from_raw(raw),
            Err(e) => {
                warn!("descriptor set allocation failed: {}", e);
                for set in &mut out[..i] {
                    destroy_object(*set);
                    *set = vk::DescriptorSet::null();
                }
                return e.to_vk_result();
            }
        }
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkFreeDescriptorSets(
    _device: vk::Device,
    _descriptor_pool: vk::DescriptorPool,
    descriptor_set_count: u32,
    p_descriptor_sets: *const vk::DescriptorSet,
) -> vk::Result {
    if !p_descriptor_sets.is_null() {
        let sets = std::slice::from_raw_parts(p_descriptor_sets, descriptor_set_count as usize);
        for &set in sets {
            destroy_object(set);
        }
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkUpdateDescriptorSets(
    _device: vk::Device,
    _descriptor_write_count: u32,
    _p_descriptor_writes: *const vk::WriteDescriptorSet<'_>,
    _descriptor_copy_count: u32,
    _p_descriptor_copies: *const vk::CopyDescriptorSet<'_>,
) {
}

// ── Update templates ────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateDescriptorUpdateTemplate(
    _device: vk::Device,
    _p_create_info: *const vk::DescriptorUpdateTemplateCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_template: *mut vk::DescriptorUpdateTemplate,
) -> vk::Result {
    create_object(ObjectKind::DescriptorUpdateTemplate, p_template)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyDescriptorUpdateTemplate(
    _device: vk::Device,
    template: vk::DescriptorUpdateTemplate,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(template);
}

#[no_mangle]
pub unsafe extern "system" fn vkUpdateDescriptorSetWithTemplate(
    _device: vk::Device,
    _descriptor_set: vk::DescriptorSet,
    _template: vk::DescriptorUpdateTemplate,
    _p_data: *const std::ffi::c_void,
) {
}

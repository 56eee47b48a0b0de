//! Device memory and buffer functions for the Vulkan ICD.
//!
//! Every map call is backed by a fresh zeroed host allocation that lives
//! until the memory object is unmapped or freed.

use std::ffi::{c_int, c_void};

use ash::vk;
use ash::vk::Handle;
use tracing::warn;
use vkmock_core::caps;
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object, driver, write_handle};

// ── vkAllocateMemory / vkFreeMemory ─────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkAllocateMemory(
    _device: vk::Device,
    p_allocate_info: *const vk::MemoryAllocateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_memory: *mut vk::DeviceMemory,
) -> vk::Result {
    if p_allocate_info.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    let size = (*p_allocate_info).allocation_size;
    write_handle(driver().allocate_memory(size), p_memory)
}

/// Frees the allocation, releasing any mapping still outstanding.
#[no_mangle]
pub unsafe extern "system" fn vkFreeMemory(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if memory == vk::DeviceMemory::null() {
        return;
    }
    driver().free_memory(memory);
}

// ── vkMapMemory / vkUnmapMemory ─────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkMapMemory(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    offset: vk::DeviceSize,
    size: vk::DeviceSize,
    _flags: vk::MemoryMapFlags,
    pp_data: *mut *mut c_void,
) -> vk::Result {
    if pp_data.is_null() {
        return vk::Result::ERROR_MEMORY_MAP_FAILED;
    }
    match driver().map_memory(memory, offset, size) {
        Ok(ptr) => {
            *pp_data = ptr;
            vk::Result::SUCCESS
        }
        Err(e) => {
            warn!("mapping {:?} failed: {}", memory, e);
            *pp_data = std::ptr::null_mut();
            e.to_vk_result()
        }
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkUnmapMemory(_device: vk::Device, memory: vk::DeviceMemory) {
    driver().unmap_memory(memory);
}

#[no_mangle]
pub unsafe extern "system" fn vkMapMemory2KHR(
    device: vk::Device,
    p_memory_map_info: *const vk::MemoryMapInfoKHR<'_>,
    pp_data: *mut *mut c_void,
) -> vk::Result {
    if p_memory_map_info.is_null() {
        return vk::Result::ERROR_MEMORY_MAP_FAILED;
    }
    let info = &*p_memory_map_info;
    vkMapMemory(device, info.memory, info.offset, info.size, info.flags, pp_data)
}

#[no_mangle]
pub unsafe extern "system" fn vkUnmapMemory2KHR(
    device: vk::Device,
    p_memory_unmap_info: *const vk::MemoryUnmapInfoKHR<'_>,
) -> vk::Result {
    if !p_memory_unmap_info.is_null() {
        vkUnmapMemory(device, (*p_memory_unmap_info).memory);
    }
    vk::Result::SUCCESS
}

/// Mappings are host memory, so there is nothing to flush.
#[no_mangle]
pub unsafe extern "system" fn vkFlushMappedMemoryRanges(
    _device: vk::Device,
    _memory_range_count: u32,
    _p_memory_ranges: *const vk::MappedMemoryRange<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkInvalidateMappedMemoryRanges(
    _device: vk::Device,
    _memory_range_count: u32,
    _p_memory_ranges: *const vk::MappedMemoryRange<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceMemoryCommitment(
    _device: vk::Device,
    memory: vk::DeviceMemory,
    p_committed_memory_in_bytes: *mut vk::DeviceSize,
) {
    if p_committed_memory_in_bytes.is_null() {
        return;
    }
    *p_committed_memory_in_bytes = driver().memory_size(memory).unwrap_or(0);
}

// ── Buffers ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateBuffer(
    device: vk::Device,
    p_create_info: *const vk::BufferCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_buffer: *mut vk::Buffer,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    let created = driver()
        .create_buffer(device, &*p_create_info)
        .map(|(buffer, _)| buffer);
    write_handle(created, p_buffer)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyBuffer(
    device: vk::Device,
    buffer: vk::Buffer,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if buffer == vk::Buffer::null() {
        return;
    }
    driver().destroy_buffer(device, buffer);
}

#[no_mangle]
pub unsafe extern "system" fn vkBindBufferMemory(
    _device: vk::Device,
    _buffer: vk::Buffer,
    _memory: vk::DeviceMemory,
    _memory_offset: vk::DeviceSize,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkBindBufferMemory2(
    _device: vk::Device,
    _bind_info_count: u32,
    _p_bind_infos: *const vk::BindBufferMemoryInfo<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetBufferMemoryRequirements(
    device: vk::Device,
    buffer: vk::Buffer,
    p_memory_requirements: *mut vk::MemoryRequirements,
) {
    if p_memory_requirements.is_null() {
        return;
    }
    let size = driver().buffer(device, buffer).map(|record| record.size);
    *p_memory_requirements = caps::buffer_memory_requirements(size);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetBufferMemoryRequirements2(
    device: vk::Device,
    p_info: *const vk::BufferMemoryRequirementsInfo2<'_>,
    p_memory_requirements: *mut vk::MemoryRequirements2<'_>,
) {
    if p_info.is_null() || p_memory_requirements.is_null() {
        return;
    }
    vkGetBufferMemoryRequirements(
        device,
        (*p_info).buffer,
        &mut (*p_memory_requirements).memory_requirements,
    );
}

/// Requirements for a buffer that was never created.
#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceBufferMemoryRequirements(
    _device: vk::Device,
    p_info: *const vk::DeviceBufferMemoryRequirements<'_>,
    p_memory_requirements: *mut vk::MemoryRequirements2<'_>,
) {
    if p_info.is_null() || p_memory_requirements.is_null() {
        return;
    }
    let create_info = (*p_info).p_create_info;
    let size = (!create_info.is_null()).then(|| (*create_info).size);
    (*p_memory_requirements).memory_requirements = caps::buffer_memory_requirements(size);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetBufferDeviceAddress(
    device: vk::Device,
    p_info: *const vk::BufferDeviceAddressInfo<'_>,
) -> vk::DeviceAddress {
    if p_info.is_null() {
        return 0;
    }
    driver()
        .buffer(device, (*p_info).buffer)
        .map_or(0, |record| record.address)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetBufferOpaqueCaptureAddress(
    device: vk::Device,
    p_info: *const vk::BufferDeviceAddressInfo<'_>,
) -> u64 {
    vkGetBufferDeviceAddress(device, p_info)
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceMemoryOpaqueCaptureAddress(
    _device: vk::Device,
    p_info: *const vk::DeviceMemoryOpaqueCaptureAddressInfo<'_>,
) -> u64 {
    if p_info.is_null() {
        return 0;
    }
    (*p_info).memory.as_raw()
}

// ── Buffer views ───────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateBufferView(
    _device: vk::Device,
    _p_create_info: *const vk::BufferViewCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_view: *mut vk::BufferView,
) -> vk::Result {
    create_object(ObjectKind::BufferView, p_view)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyBufferView(
    _device: vk::Device,
    buffer_view: vk::BufferView,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(buffer_view);
}

// ── External memory ────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetMemoryFdKHR(
    _device: vk::Device,
    _p_get_fd_info: *const vk::MemoryGetFdInfoKHR<'_>,
    p_fd: *mut c_int,
) -> vk::Result {
    if p_fd.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_fd = 1;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetMemoryHostPointerPropertiesEXT(
    _device: vk::Device,
    _handle_type: vk::ExternalMemoryHandleTypeFlags,
    _p_host_pointer: *const c_void,
    p_memory_host_pointer_properties: *mut vk::MemoryHostPointerPropertiesEXT<'_>,
) -> vk::Result {
    if p_memory_host_pointer_properties.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    (*p_memory_host_pointer_properties).memory_type_bits = caps::HOST_POINTER_MEMORY_TYPE_BITS;
    vk::Result::SUCCESS
}

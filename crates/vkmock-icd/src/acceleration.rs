//! Acceleration structure objects and their size queries.

use ash::vk;
use vkmock_core::{caps, ObjectKind};

use crate::{create_object, destroy_object};

/// Device address reported for every acceleration structure; 256-byte aligned.
pub const ACCELERATION_STRUCTURE_ADDRESS: vk::DeviceAddress = 0x262144;

#[no_mangle]
pub unsafe extern "system" fn vkCreateAccelerationStructureKHR(
    _device: vk::Device,
    _p_create_info: *const vk::AccelerationStructureCreateInfoKHR<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_acceleration_structure: *mut vk::AccelerationStructureKHR,
) -> vk::Result {
    create_object(ObjectKind::AccelerationStructure, p_acceleration_structure)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyAccelerationStructureKHR(
    _device: vk::Device,
    acceleration_structure: vk::AccelerationStructureKHR,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(acceleration_structure);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetAccelerationStructureBuildSizesKHR(
    _device: vk::Device,
    _build_type: vk::AccelerationStructureBuildTypeKHR,
    _p_build_info: *const vk::AccelerationStructureBuildGeometryInfoKHR<'_>,
    _p_max_primitive_counts: *const u32,
    p_size_info: *mut vk::AccelerationStructureBuildSizesInfoKHR<'_>,
) {
    if p_size_info.is_null() {
        return;
    }
    let sizes = &mut *p_size_info;
    sizes.acceleration_structure_size = 4;
    sizes.update_scratch_size = 4;
    sizes.build_scratch_size = 4;
}

#[no_mangle]
pub unsafe extern "system" fn vkGetAccelerationStructureMemoryRequirementsNV(
    _device: vk::Device,
    _p_info: *const vk::AccelerationStructureMemoryRequirementsInfoNV<'_>,
    p_memory_requirements: *mut vk::MemoryRequirements2<'_>,
) {
    if p_memory_requirements.is_null() {
        return;
    }
    (*p_memory_requirements).memory_requirements = caps::buffer_memory_requirements(None);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetAccelerationStructureDeviceAddressKHR(
    _device: vk::Device,
    _p_info: *const vk::AccelerationStructureDeviceAddressInfoKHR<'_>,
) -> vk::DeviceAddress {
    ACCELERATION_STRUCTURE_ADDRESS
}

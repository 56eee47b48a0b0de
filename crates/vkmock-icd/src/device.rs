//! Device lifecycle, queues and submission.

use std::ffi::c_char;

use ash::vk;
use ash::vk::Handle;
use tracing::{debug, warn};
use vkmock_core::ObjectKind;

use crate::{chain, create_object, destroy_object, dispatch, driver, write_handle};

#[no_mangle]
pub unsafe extern "system" fn vkCreateDevice(
    physical_device: vk::PhysicalDevice,
    p_create_info: *const vk::DeviceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_device: *mut vk::Device,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    write_handle(driver().create_device(physical_device), p_device)
}

/// Destroys the device together with its queue, buffers, images and the
/// command buffers of its pools.
#[no_mangle]
pub unsafe extern "system" fn vkDestroyDevice(
    device: vk::Device,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if device == vk::Device::null() {
        return;
    }
    driver().destroy_device(device);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceQueue(
    device: vk::Device,
    queue_family_index: u32,
    queue_index: u32,
    p_queue: *mut vk::Queue,
) {
    if p_queue.is_null() {
        return;
    }
    *p_queue = driver()
        .queue(device, queue_family_index, queue_index)
        .unwrap_or_default();
}

#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceQueue2(
    device: vk::Device,
    p_queue_info: *const vk::DeviceQueueInfo2<'_>,
    p_queue: *mut vk::Queue,
) {
    if p_queue_info.is_null() {
        return;
    }
    let info = &*p_queue_info;
    vkGetDeviceQueue(device, info.queue_family_index, info.queue_index, p_queue);
}

#[no_mangle]
pub unsafe extern "system" fn vkDeviceWaitIdle(_device: vk::Device) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkQueueWaitIdle(_queue: vk::Queue) -> vk::Result {
    vk::Result::SUCCESS
}

/// Accepts every submission. A first submit whose pNext chain is a lone
/// `VkExportFenceCreateInfo` reports device loss, a hook validation-layer
/// tests use to provoke `VK_ERROR_DEVICE_LOST`.
#[no_mangle]
pub unsafe extern "system" fn vkQueueSubmit(
    queue: vk::Queue,
    submit_count: u32,
    p_submits: *const vk::SubmitInfo<'_>,
    _fence: vk::Fence,
) -> vk::Result {
    if submit_count > 0
        && !p_submits.is_null()
        && driver().config().queue.fail_submit_on_export_fence
        && chain::is_lone::<vk::ExportFenceCreateInfo<'_>>((*p_submits).p_next)
    {
        debug!("reporting device loss on {:?}", queue);
        return vk::Result::ERROR_DEVICE_LOST;
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkQueueSubmit2(
    _queue: vk::Queue,
    _submit_count: u32,
    _p_submits: *const vk::SubmitInfo2<'_>,
    _fence: vk::Fence,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkQueueBindSparse(
    _queue: vk::Queue,
    _bind_info_count: u32,
    _p_bind_info: *const vk::BindSparseInfo<'_>,
    _fence: vk::Fence,
) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Private data ────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreatePrivateDataSlot(
    _device: vk::Device,
    _p_create_info: *const vk::PrivateDataSlotCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_private_data_slot: *mut vk::PrivateDataSlot,
) -> vk::Result {
    create_object(ObjectKind::PrivateDataSlot, p_private_data_slot)
}

/// Drops the slot and every value stored in it.
#[no_mangle]
pub unsafe extern "system" fn vkDestroyPrivateDataSlot(
    _device: vk::Device,
    private_data_slot: vk::PrivateDataSlot,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(private_data_slot);
}

#[no_mangle]
pub unsafe extern "system" fn vkSetPrivateData(
    _device: vk::Device,
    _object_type: vk::ObjectType,
    object_handle: u64,
    private_data_slot: vk::PrivateDataSlot,
    data: u64,
) -> vk::Result {
    match driver().set_private_data(private_data_slot.as_raw(), object_handle, data) {
        Ok(()) => vk::Result::SUCCESS,
        Err(e) => {
            warn!("{}", e);
            e.to_vk_result()
        }
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPrivateData(
    _device: vk::Device,
    _object_type: vk::ObjectType,
    object_handle: u64,
    private_data_slot: vk::PrivateDataSlot,
    p_data: *mut u64,
) {
    if p_data.is_null() {
        return;
    }
    *p_data = driver().private_data(private_data_slot.as_raw(), object_handle);
}

/// Device-level lookups resolve from the same table as instance-level ones.
#[no_mangle]
pub unsafe extern "system" fn vkGetDeviceProcAddr(
    _device: vk::Device,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    dispatch::resolve(p_name)
}

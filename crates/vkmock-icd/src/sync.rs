//! Fence, semaphore, event and query pool functions for the Vulkan ICD.
//!
//! Nothing ever executes, so every wait is already satisfied.

use std::ffi::{c_int, c_void};
use std::sync::OnceLock;
use std::time::Instant;

use ash::vk;
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object};

// ── Fence ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateFence(
    _device: vk::Device,
    _p_create_info: *const vk::FenceCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_fence: *mut vk::Fence,
) -> vk::Result {
    create_object(ObjectKind::Fence, p_fence)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyFence(
    _device: vk::Device,
    fence: vk::Fence,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(fence);
}

#[no_mangle]
pub unsafe extern "system" fn vkResetFences(
    _device: vk::Device,
    _fence_count: u32,
    _p_fences: *const vk::Fence,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkGetFenceStatus(_device: vk::Device, _fence: vk::Fence) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkWaitForFences(
    _device: vk::Device,
    _fence_count: u32,
    _p_fences: *const vk::Fence,
    _wait_all: vk::Bool32,
    _timeout: u64,
) -> vk::Result {
    vk::Result::SUCCESS
}

/// An fd of -1 stands for a fence that is already signaled.
#[no_mangle]
pub unsafe extern "system" fn vkGetFenceFdKHR(
    _device: vk::Device,
    _p_get_fd_info: *const vk::FenceGetFdInfoKHR<'_>,
    p_fd: *mut c_int,
) -> vk::Result {
    if p_fd.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_fd = -1;
    vk::Result::SUCCESS
}

// ── Semaphore ───────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateSemaphore(
    _device: vk::Device,
    _p_create_info: *const vk::SemaphoreCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_semaphore: *mut vk::Semaphore,
) -> vk::Result {
    create_object(ObjectKind::Semaphore, p_semaphore)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroySemaphore(
    _device: vk::Device,
    semaphore: vk::Semaphore,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(semaphore);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetSemaphoreCounterValue(
    _device: vk::Device,
    _semaphore: vk::Semaphore,
    p_value: *mut u64,
) -> vk::Result {
    if p_value.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_value = 0;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkWaitSemaphores(
    _device: vk::Device,
    _p_wait_info: *const vk::SemaphoreWaitInfo<'_>,
    _timeout: u64,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkSignalSemaphore(
    _device: vk::Device,
    _p_signal_info: *const vk::SemaphoreSignalInfo<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Event ───────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateEvent(
    _device: vk::Device,
    _p_create_info: *const vk::EventCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_event: *mut vk::Event,
) -> vk::Result {
    create_object(ObjectKind::Event, p_event)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyEvent(
    _device: vk::Device,
    event: vk::Event,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(event);
}

/// Events always read as set.
#[no_mangle]
pub unsafe extern "system" fn vkGetEventStatus(_device: vk::Device, _event: vk::Event) -> vk::Result {
    vk::Result::EVENT_SET
}

#[no_mangle]
pub unsafe extern "system" fn vkSetEvent(_device: vk::Device, _event: vk::Event) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkResetEvent(_device: vk::Device, _event: vk::Event) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Query pool ──────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateQueryPool(
    _device: vk::Device,
    _p_create_info: *const vk::QueryPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_query_pool: *mut vk::QueryPool,
) -> vk::Result {
    create_object(ObjectKind::QueryPool, p_query_pool)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyQueryPool(
    _device: vk::Device,
    query_pool: vk::QueryPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(query_pool);
}

/// Results read back as zeros.
#[no_mangle]
pub unsafe extern "system" fn vkGetQueryPoolResults(
    _device: vk::Device,
    _query_pool: vk::QueryPool,
    _first_query: u32,
    _query_count: u32,
    data_size: usize,
    p_data: *mut c_void,
    _stride: vk::DeviceSize,
    _flags: vk::QueryResultFlags,
) -> vk::Result {
    if !p_data.is_null() {
        std::ptr::write_bytes(p_data as *mut u8, 0, data_size);
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkResetQueryPool(
    _device: vk::Device,
    _query_pool: vk::QueryPool,
    _first_query: u32,
    _query_count: u32,
) {
}

// ── Calibrated timestamps ──────────────────────────────────

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Every domain reads the same host clock, in nanoseconds since first use.
#[no_mangle]
pub unsafe extern "system" fn vkGetCalibratedTimestampsKHR(
    _device: vk::Device,
    timestamp_count: u32,
    _p_timestamp_infos: *const vk::CalibratedTimestampInfoKHR<'_>,
    p_timestamps: *mut u64,
    p_max_deviation: *mut u64,
) -> vk::Result {
    if p_timestamps.is_null() || p_max_deviation.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let elapsed = EPOCH.get_or_init(Instant::now).elapsed();
    let now = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    std::slice::from_raw_parts_mut(p_timestamps, timestamp_count as usize).fill(now);
    *p_max_deviation = 1;
    vk::Result::SUCCESS
}

//! Command pool, command buffer and command recording functions.
//!
//! Command buffers are dispatchable handles owned by their pool. Recorded
//! commands are accepted and dropped; nothing executes.

use std::ffi::c_void;

use ash::vk;
use tracing::warn;

use crate::driver;

// ── Command pools ───────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreateCommandPool(
    device: vk::Device,
    p_create_info: *const vk::CommandPoolCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_command_pool: *mut vk::CommandPool,
) -> vk::Result {
    if p_create_info.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    crate::write_handle(driver().create_command_pool(device), p_command_pool)
}

/// Also frees every command buffer still allocated from the pool.
#[no_mangle]
pub unsafe extern "system" fn vkDestroyCommandPool(
    _device: vk::Device,
    command_pool: vk::CommandPool,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    if command_pool == vk::CommandPool::null() {
        return;
    }
    driver().destroy_command_pool(command_pool);
}

#[no_mangle]
pub unsafe extern "system" fn vkResetCommandPool(
    _device: vk::Device,
    _command_pool: vk::CommandPool,
    _flags: vk::CommandPoolResetFlags,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkTrimCommandPool(
    _device: vk::Device,
    _command_pool: vk::CommandPool,
    _flags: vk::CommandPoolTrimFlags,
) {
}

// ── Command buffers ────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkAllocateCommandBuffers(
    _device: vk::Device,
    p_allocate_info: *const vk::CommandBufferAllocateInfo<'_>,
    p_command_buffers: *mut vk::CommandBuffer,
) -> vk::Result {
    if p_allocate_info.is_null() || p_command_buffers.is_null() {
        return vk::Result::ERROR_OUT_OF_HOST_MEMORY;
    }
    let info = &*p_allocate_info;
    match driver().allocate_command_buffers(info.command_pool, info.command_buffer_count) {
        Ok(buffers) => {
            std::ptr::copy_nonoverlapping(buffers.as_ptr(), p_command_buffers, buffers.len());
            vk::Result::SUCCESS
        }
        Err(e) => {
            warn!("{}", e);
            e.to_vk_result()
        }
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkFreeCommandBuffers(
    _device: vk::Device,
    command_pool: vk::CommandPool,
    command_buffer_count: u32,
    p_command_buffers: *const vk::CommandBuffer,
) {
    if p_command_buffers.is_null() || command_buffer_count == 0 {
        return;
    }
    let buffers = std::slice::from_raw_parts(p_command_buffers, command_buffer_count as usize);
    driver().free_command_buffers(command_pool, buffers);
}

#[no_mangle]
pub unsafe extern "system" fn vkBeginCommandBuffer(
    _command_buffer: vk::CommandBuffer,
    _p_begin_info: *const vk::CommandBufferBeginInfo<'_>,
) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkEndCommandBuffer(_command_buffer: vk::CommandBuffer) -> vk::Result {
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkResetCommandBuffer(
    _command_buffer: vk::CommandBuffer,
    _flags: vk::CommandBufferResetFlags,
) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Recording ──────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCmdBindPipeline(
    _command_buffer: vk::CommandBuffer,
    _pipeline_bind_point: vk::PipelineBindPoint,
    _pipeline: vk::Pipeline,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdBindDescriptorSets(
    _command_buffer: vk::CommandBuffer,
    _pipeline_bind_point: vk::PipelineBindPoint,
    _layout: vk::PipelineLayout,
    _first_set: u32,
    _descriptor_set_count: u32,
    _p_descriptor_sets: *const vk::DescriptorSet,
    _dynamic_offset_count: u32,
    _p_dynamic_offsets: *const u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdPushConstants(
    _command_buffer: vk::CommandBuffer,
    _layout: vk::PipelineLayout,
    _stage_flags: vk::ShaderStageFlags,
    _offset: u32,
    _size: u32,
    _p_values: *const c_void,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdBindVertexBuffers(
    _command_buffer: vk::CommandBuffer,
    _first_binding: u32,
    _binding_count: u32,
    _p_buffers: *const vk::Buffer,
    _p_offsets: *const vk::DeviceSize,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdBindIndexBuffer(
    _command_buffer: vk::CommandBuffer,
    _buffer: vk::Buffer,
    _offset: vk::DeviceSize,
    _index_type: vk::IndexType,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdDispatch(
    _command_buffer: vk::CommandBuffer,
    _group_count_x: u32,
    _group_count_y: u32,
    _group_count_z: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdDraw(
    _command_buffer: vk::CommandBuffer,
    _vertex_count: u32,
    _instance_count: u32,
    _first_vertex: u32,
    _first_instance: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdDrawIndexed(
    _command_buffer: vk::CommandBuffer,
    _index_count: u32,
    _instance_count: u32,
    _first_index: u32,
    _vertex_offset: i32,
    _first_instance: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdPipelineBarrier(
    _command_buffer: vk::CommandBuffer,
    _src_stage_mask: vk::PipelineStageFlags,
    _dst_stage_mask: vk::PipelineStageFlags,
    _dependency_flags: vk::DependencyFlags,
    _memory_barrier_count: u32,
    _p_memory_barriers: *const vk::MemoryBarrier<'_>,
    _buffer_memory_barrier_count: u32,
    _p_buffer_memory_barriers: *const vk::BufferMemoryBarrier<'_>,
    _image_memory_barrier_count: u32,
    _p_image_memory_barriers: *const vk::ImageMemoryBarrier<'_>,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdPipelineBarrier2(
    _command_buffer: vk::CommandBuffer,
    _p_dependency_info: *const vk::DependencyInfo<'_>,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdCopyBuffer(
    _command_buffer: vk::CommandBuffer,
    _src_buffer: vk::Buffer,
    _dst_buffer: vk::Buffer,
    _region_count: u32,
    _p_regions: *const vk::BufferCopy,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdCopyBufferToImage(
    _command_buffer: vk::CommandBuffer,
    _src_buffer: vk::Buffer,
    _dst_image: vk::Image,
    _dst_image_layout: vk::ImageLayout,
    _region_count: u32,
    _p_regions: *const vk::BufferImageCopy,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdCopyImageToBuffer(
    _command_buffer: vk::CommandBuffer,
    _src_image: vk::Image,
    _src_image_layout: vk::ImageLayout,
    _dst_buffer: vk::Buffer,
    _region_count: u32,
    _p_regions: *const vk::BufferImageCopy,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdFillBuffer(
    _command_buffer: vk::CommandBuffer,
    _dst_buffer: vk::Buffer,
    _dst_offset: vk::DeviceSize,
    _size: vk::DeviceSize,
    _data: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdUpdateBuffer(
    _command_buffer: vk::CommandBuffer,
    _dst_buffer: vk::Buffer,
    _dst_offset: vk::DeviceSize,
    _data_size: vk::DeviceSize,
    _p_data: *const c_void,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdBeginRenderPass(
    _command_buffer: vk::CommandBuffer,
    _p_render_pass_begin: *const vk::RenderPassBeginInfo<'_>,
    _contents: vk::SubpassContents,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdEndRenderPass(_command_buffer: vk::CommandBuffer) {}

#[no_mangle]
pub unsafe extern "system" fn vkCmdSetViewport(
    _command_buffer: vk::CommandBuffer,
    _first_viewport: u32,
    _viewport_count: u32,
    _p_viewports: *const vk::Viewport,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdSetScissor(
    _command_buffer: vk::CommandBuffer,
    _first_scissor: u32,
    _scissor_count: u32,
    _p_scissors: *const vk::Rect2D,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdResetQueryPool(
    _command_buffer: vk::CommandBuffer,
    _query_pool: vk::QueryPool,
    _first_query: u32,
    _query_count: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdWriteTimestamp(
    _command_buffer: vk::CommandBuffer,
    _pipeline_stage: vk::PipelineStageFlags,
    _query_pool: vk::QueryPool,
    _query: u32,
) {
}

#[no_mangle]
pub unsafe extern "system" fn vkCmdExecuteCommands(
    _command_buffer: vk::CommandBuffer,
    _command_buffer_count: u32,
    _p_command_buffers: *const vk::CommandBuffer,
) {
}

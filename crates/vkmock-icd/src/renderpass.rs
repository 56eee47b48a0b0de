//! Render pass and framebuffer functions for the Vulkan ICD.

use ash::vk;
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object};

#[no_mangle]
pub unsafe extern "system" fn vkCreateRenderPass(
    _device: vk::Device,
    _p_create_info: *const vk::RenderPassCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_render_pass: *mut vk::RenderPass,
) -> vk::Result {
    create_object(ObjectKind::RenderPass, p_render_pass)
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateRenderPass2(
    _device: vk::Device,
    _p_create_info: *const vk::RenderPassCreateInfo2<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_render_pass: *mut vk::RenderPass,
) -> vk::Result {
    create_object(ObjectKind::RenderPass, p_render_pass)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyRenderPass(
    _device: vk::Device,
    render_pass: vk::RenderPass,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(render_pass);
}

/// Any render area is optimal.
#[no_mangle]
pub unsafe extern "system" fn vkGetRenderAreaGranularity(
    _device: vk::Device,
    _render_pass: vk::RenderPass,
    p_granularity: *mut vk::Extent2D,
) {
    if !p_granularity.is_null() {
        *p_granularity = vk::Extent2D { width: 1, height: 1 };
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateFramebuffer(
    _device: vk::Device,
    _p_create_info: *const vk::FramebufferCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_framebuffer: *mut vk::Framebuffer,
) -> vk::Result {
    create_object(ObjectKind::Framebuffer, p_framebuffer)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyFramebuffer(
    _device: vk::Device,
    framebuffer: vk::Framebuffer,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(framebuffer);
}

//! Shader module, pipeline cache, pipeline layout and pipeline functions.

use std::ffi::c_void;

use ash::vk;
use ash::vk::Handle;
use tracing::warn;
use vkmock_core::ObjectKind;

use crate::{create_object, destroy_object, driver};

// ── Shader modules ──────────────────────────────────────────

unsafe fn write_module_identifier(p_identifier: *mut vk::ShaderModuleIdentifierEXT<'_>) {
    if p_identifier.is_null() {
        return;
    }
    let identifier = &mut *p_identifier;
    identifier.identifier_size = 1;
    identifier.identifier[0] = 0x01;
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateShaderModule(
    _device: vk::Device,
    _p_create_info: *const vk::ShaderModuleCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_shader_module: *mut vk::ShaderModule,
) -> vk::Result {
    create_object(ObjectKind::ShaderModule, p_shader_module)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyShaderModule(
    _device: vk::Device,
    shader_module: vk::ShaderModule,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(shader_module);
}

/// Every module shares one single-byte identifier.
#[no_mangle]
pub unsafe extern "system" fn vkGetShaderModuleIdentifierEXT(
    _device: vk::Device,
    _shader_module: vk::ShaderModule,
    p_identifier: *mut vk::ShaderModuleIdentifierEXT<'_>,
) {
    write_module_identifier(p_identifier);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetShaderModuleCreateInfoIdentifierEXT(
    _device: vk::Device,
    _p_create_info: *const vk::ShaderModuleCreateInfo<'_>,
    p_identifier: *mut vk::ShaderModuleIdentifierEXT<'_>,
) {
    write_module_identifier(p_identifier);
}

// ── Pipeline caches ─────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreatePipelineCache(
    _device: vk::Device,
    _p_create_info: *const vk::PipelineCacheCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipeline_cache: *mut vk::PipelineCache,
) -> vk::Result {
    create_object(ObjectKind::PipelineCache, p_pipeline_cache)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyPipelineCache(
    _device: vk::Device,
    pipeline_cache: vk::PipelineCache,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(pipeline_cache);
}

/// Caches are always empty.
#[no_mangle]
pub unsafe extern "system" fn vkGetPipelineCacheData(
    _device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    p_data_size: *mut usize,
    _p_data: *mut c_void,
) -> vk::Result {
    if p_data_size.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    *p_data_size = 0;
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkMergePipelineCaches(
    _device: vk::Device,
    _dst_cache: vk::PipelineCache,
    _src_cache_count: u32,
    _p_src_caches: *const vk::PipelineCache,
) -> vk::Result {
    vk::Result::SUCCESS
}

// ── Pipeline layouts ────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkCreatePipelineLayout(
    _device: vk::Device,
    _p_create_info: *const vk::PipelineLayoutCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipeline_layout: *mut vk::PipelineLayout,
) -> vk::Result {
    create_object(ObjectKind::PipelineLayout, p_pipeline_layout)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyPipelineLayout(
    _device: vk::Device,
    pipeline_layout: vk::PipelineLayout,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(pipeline_layout);
}

// ── Pipelines ───────────────────────────────────────────────

/// Fill `count` pipeline slots with fresh handles.
unsafe fn create_pipelines(count: u32, p_pipelines: *mut vk::Pipeline) -> vk::Result {
    if p_pipelines.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let out = std::slice::from_raw_parts_mut(p_pipelines, count as usize);
    for i in 0..out.len() {
        match driver().create_object(ObjectKind::Pipeline) {
            Ok(raw) => out[i] = vk::Pipeline::from_raw(raw),
            Err(e) => {
                warn!("pipeline creation failed: {}", e);
                for created in &mut out[..i] {
                    destroy_object(*created);
                    *created = vk::Pipeline::null();
                }
                return e.to_vk_result();
            }
        }
    }
    vk::Result::SUCCESS
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateComputePipelines(
    _device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    create_info_count: u32,
    _p_create_infos: *const vk::ComputePipelineCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipelines: *mut vk::Pipeline,
) -> vk::Result {
    create_pipelines(create_info_count, p_pipelines)
}

#[no_mangle]
pub unsafe extern "system" fn vkCreateGraphicsPipelines(
    _device: vk::Device,
    _pipeline_cache: vk::PipelineCache,
    create_info_count: u32,
    _p_create_infos: *const vk::GraphicsPipelineCreateInfo<'_>,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
    p_pipelines: *mut vk::Pipeline,
) -> vk::Result {
    create_pipelines(create_info_count, p_pipelines)
}

#[no_mangle]
pub unsafe extern "system" fn vkDestroyPipeline(
    _device: vk::Device,
    pipeline: vk::Pipeline,
    _p_allocator: *const vk::AllocationCallbacks<'_>,
) {
    destroy_object(pipeline);
}

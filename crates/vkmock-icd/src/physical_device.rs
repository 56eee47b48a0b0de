//! Physical device query functions for the Vulkan ICD.

use std::ffi::{c_char, CStr};
use std::mem::size_of;

use ash::vk;
use vkmock_core::caps;
use vkmock_core::enumerate::{enumerate, enumerate_extensions, enumerate_with};

use crate::chain;
use crate::driver;

const DRIVER_NAME: &CStr = c"Vulkan Mock Device";
const DRIVER_INFO: &CStr = c"Branch: --unknown-- Tag Info: --unknown--";

// ── vkGetPhysicalDeviceProperties ───────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceProperties(
    _physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties,
) {
    if p_properties.is_null() {
        return;
    }
    *p_properties = caps::physical_device_properties(driver().config());
}

/// Core properties plus the extension structs layers cannot fill in themselves.
#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceProperties2(
    physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties2<'_>,
) {
    if p_properties.is_null() {
        return;
    }
    let props = &mut *p_properties;
    vkGetPhysicalDeviceProperties(physical_device, &mut props.properties);
    let p_next = props.p_next;

    if let Some(p) = chain::find_out::<vk::PhysicalDeviceVulkan11Properties<'_>>(p_next) {
        p.subgroup_size = 32;
        p.subgroup_supported_stages = vk::ShaderStageFlags::ALL;
        p.subgroup_supported_operations = vk::SubgroupFeatureFlags::from_raw(0xFF);
        p.max_multiview_view_count = 6;
        p.max_multiview_instance_index = 0x7FF_FFFF;
        p.protected_no_fault = vk::FALSE;
        p.max_per_set_descriptors = 1024;
        p.max_memory_allocation_size = 1 << 30;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceVulkan12Properties<'_>>(p_next) {
        caps::write_c_string(DRIVER_NAME, &mut p.driver_name);
        caps::write_c_string(DRIVER_INFO, &mut p.driver_info);
        p.denorm_behavior_independence = vk::ShaderFloatControlsIndependence::ALL;
        p.rounding_mode_independence = vk::ShaderFloatControlsIndependence::ALL;
        p.max_update_after_bind_descriptors_in_all_pools = 500_000;
        p.max_timeline_semaphore_value_difference = u64::from(u32::MAX);
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceVulkan13Properties<'_>>(p_next) {
        p.storage_texel_buffer_offset_single_texel_alignment = vk::TRUE;
        p.uniform_texel_buffer_offset_single_texel_alignment = vk::TRUE;
        p.storage_texel_buffer_offset_alignment_bytes = 16;
        p.uniform_texel_buffer_offset_alignment_bytes = 16;
        p.max_inline_uniform_block_size = 256;
        p.max_buffer_size = 1 << 30;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceDriverProperties<'_>>(p_next) {
        caps::write_c_string(DRIVER_NAME, &mut p.driver_name);
        caps::write_c_string(DRIVER_INFO, &mut p.driver_info);
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceMaintenance3Properties<'_>>(p_next) {
        p.max_memory_allocation_size = 1 << 30;
        p.max_per_set_descriptors = 1024;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceProtectedMemoryProperties<'_>>(p_next) {
        p.protected_no_fault = vk::FALSE;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceFloatControlsProperties<'_>>(p_next) {
        p.denorm_behavior_independence = vk::ShaderFloatControlsIndependence::ALL;
        p.rounding_mode_independence = vk::ShaderFloatControlsIndependence::ALL;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceTexelBufferAlignmentProperties<'_>>(p_next) {
        p.storage_texel_buffer_offset_single_texel_alignment = vk::TRUE;
        p.uniform_texel_buffer_offset_single_texel_alignment = vk::TRUE;
        p.storage_texel_buffer_offset_alignment_bytes = 16;
        p.uniform_texel_buffer_offset_alignment_bytes = 16;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceDescriptorIndexingProperties<'_>>(p_next) {
        p.max_update_after_bind_descriptors_in_all_pools = 500_000;
        p.max_per_stage_descriptor_update_after_bind_samplers = 500_000;
        p.max_per_stage_descriptor_update_after_bind_uniform_buffers = 12;
        p.max_per_stage_descriptor_update_after_bind_storage_buffers = 500_000;
        p.max_per_stage_descriptor_update_after_bind_sampled_images = 500_000;
        p.max_per_stage_descriptor_update_after_bind_storage_images = 500_000;
        p.max_per_stage_descriptor_update_after_bind_input_attachments = 500_000;
        p.max_per_stage_update_after_bind_resources = 500_000;
        p.max_descriptor_set_update_after_bind_samplers = 500_000;
        p.max_descriptor_set_update_after_bind_uniform_buffers = 72;
        p.max_descriptor_set_update_after_bind_uniform_buffers_dynamic = 8;
        p.max_descriptor_set_update_after_bind_storage_buffers = 500_000;
        p.max_descriptor_set_update_after_bind_storage_buffers_dynamic = 4;
        p.max_descriptor_set_update_after_bind_sampled_images = 500_000;
        p.max_descriptor_set_update_after_bind_storage_images = 500_000;
        p.max_descriptor_set_update_after_bind_input_attachments = 500_000;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceTimelineSemaphoreProperties<'_>>(p_next) {
        p.max_timeline_semaphore_value_difference = u64::from(u32::MAX);
    }
    if let Some(p) =
        chain::find_out::<vk::PhysicalDeviceConservativeRasterizationPropertiesEXT<'_>>(p_next)
    {
        p.primitive_overestimation_size = 0.001_953_13;
        p.conservative_point_and_line_rasterization = vk::TRUE;
        p.degenerate_triangles_rasterized = vk::TRUE;
        p.degenerate_lines_rasterized = vk::TRUE;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceRayTracingPipelinePropertiesKHR<'_>>(p_next) {
        p.shader_group_handle_size = 32;
        p.shader_group_base_alignment = 64;
        p.shader_group_handle_capture_replay_size = 32;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceRayTracingPropertiesNV<'_>>(p_next) {
        p.shader_group_handle_size = 32;
        p.shader_group_base_alignment = 64;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceDescriptorBufferPropertiesEXT<'_>>(p_next) {
        p.combined_image_sampler_descriptor_single_array = vk::TRUE;
        p.bufferless_push_descriptors = vk::TRUE;
        p.allow_sampler_image_view_post_submit_creation = vk::TRUE;
        p.descriptor_buffer_offset_alignment = 4;
    }
    if let Some(p) = chain::find_out::<vk::PhysicalDeviceMeshShaderPropertiesEXT<'_>>(p_next) {
        p.mesh_output_per_vertex_granularity = 32;
        p.mesh_output_per_primitive_granularity = 32;
        p.prefers_local_invocation_vertex_output = vk::TRUE;
        p.prefers_local_invocation_primitive_output = vk::TRUE;
        p.prefers_compact_vertex_output = vk::TRUE;
        p.prefers_compact_primitive_output = vk::TRUE;
    }
    if let Some(p) =
        chain::find_out::<vk::PhysicalDeviceFragmentDensityMap2PropertiesEXT<'_>>(p_next)
    {
        p.subsampled_loads = vk::FALSE;
        p.subsampled_coarse_reconstruction_early_access = vk::FALSE;
        p.max_subsampled_array_layers = 2;
        p.max_descriptor_set_subsampled_samplers = 1;
    }
}

// ── vkGetPhysicalDeviceFeatures ────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceFeatures(
    _physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures,
) {
    if p_features.is_null() {
        return;
    }
    *p_features = caps::features();
}

/// Size of a recognised feature struct made of a header and VkBool32 members.
fn feature_struct_size(s_type: vk::StructureType) -> Option<usize> {
    let size = match s_type {
        vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_1_FEATURES => {
            size_of::<vk::PhysicalDeviceVulkan11Features<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_2_FEATURES => {
            size_of::<vk::PhysicalDeviceVulkan12Features<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_VULKAN_1_3_FEATURES => {
            size_of::<vk::PhysicalDeviceVulkan13Features<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_DESCRIPTOR_INDEXING_FEATURES => {
            size_of::<vk::PhysicalDeviceDescriptorIndexingFeatures<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_BUFFER_DEVICE_ADDRESS_FEATURES => {
            size_of::<vk::PhysicalDeviceBufferDeviceAddressFeatures<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_TIMELINE_SEMAPHORE_FEATURES => {
            size_of::<vk::PhysicalDeviceTimelineSemaphoreFeatures<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_SYNCHRONIZATION_2_FEATURES => {
            size_of::<vk::PhysicalDeviceSynchronization2Features<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_PROTECTED_MEMORY_FEATURES => {
            size_of::<vk::PhysicalDeviceProtectedMemoryFeatures<'_>>()
        }
        vk::StructureType::PHYSICAL_DEVICE_MAINTENANCE_4_FEATURES => {
            size_of::<vk::PhysicalDeviceMaintenance4Features<'_>>()
        }
        _ => return None,
    };
    Some(size)
}

/// Core features plus every member of the recognised feature structs.
#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceFeatures2(
    physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures2<'_>,
) {
    if p_features.is_null() {
        return;
    }
    vkGetPhysicalDeviceFeatures(physical_device, &mut (*p_features).features);

    let header = size_of::<vk::BaseOutStructure<'_>>();
    chain::for_each_out((*p_features).p_next, |node| {
        if let Some(size) = feature_struct_size((*node).s_type) {
            let count = (size - header) / size_of::<vk::Bool32>();
            let first = (node as *mut u8).add(header) as *mut vk::Bool32;
            std::slice::from_raw_parts_mut(first, count).fill(vk::TRUE);
        }
    });
}

// ── Memory and queue families ──────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceMemoryProperties(
    _physical_device: vk::PhysicalDevice,
    p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties,
) {
    if p_memory_properties.is_null() {
        return;
    }
    *p_memory_properties = caps::memory_properties(driver().config());
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceMemoryProperties2(
    physical_device: vk::PhysicalDevice,
    p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties2<'_>,
) {
    if p_memory_properties.is_null() {
        return;
    }
    vkGetPhysicalDeviceMemoryProperties(
        physical_device,
        &mut (*p_memory_properties).memory_properties,
    );
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceQueueFamilyProperties(
    _physical_device: vk::PhysicalDevice,
    p_queue_family_property_count: *mut u32,
    p_queue_family_properties: *mut vk::QueueFamilyProperties,
) {
    enumerate(
        &[caps::queue_family_properties()],
        p_queue_family_property_count,
        p_queue_family_properties,
    );
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceQueueFamilyProperties2(
    _physical_device: vk::PhysicalDevice,
    p_queue_family_property_count: *mut u32,
    p_queue_family_properties: *mut vk::QueueFamilyProperties2<'_>,
) {
    enumerate_with(
        caps::QUEUE_FAMILY_COUNT as usize,
        p_queue_family_property_count,
        p_queue_family_properties,
        |_, slot| slot.queue_family_properties = caps::queue_family_properties(),
    );
}

// ── Formats ────────────────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceFormatProperties(
    _physical_device: vk::PhysicalDevice,
    format: vk::Format,
    p_format_properties: *mut vk::FormatProperties,
) {
    if p_format_properties.is_null() {
        return;
    }
    *p_format_properties = caps::format_properties(format);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceFormatProperties2(
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
    p_format_properties: *mut vk::FormatProperties2<'_>,
) {
    if p_format_properties.is_null() {
        return;
    }
    let props = &mut *p_format_properties;
    vkGetPhysicalDeviceFormatProperties(physical_device, format, &mut props.format_properties);

    if let Some(p3) = chain::find_out::<vk::FormatProperties3<'_>>(props.p_next) {
        let base = props.format_properties;
        p3.linear_tiling_features =
            vk::FormatFeatureFlags2::from_raw(u64::from(base.linear_tiling_features.as_raw()));
        p3.optimal_tiling_features =
            vk::FormatFeatureFlags2::from_raw(u64::from(base.optimal_tiling_features.as_raw()));
        p3.buffer_features = vk::FormatFeatureFlags2::from_raw(u64::from(base.buffer_features.as_raw()));
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceImageFormatProperties(
    _physical_device: vk::PhysicalDevice,
    format: vk::Format,
    _ty: vk::ImageType,
    tiling: vk::ImageTiling,
    _usage: vk::ImageUsageFlags,
    _flags: vk::ImageCreateFlags,
    p_image_format_properties: *mut vk::ImageFormatProperties,
) -> vk::Result {
    if p_image_format_properties.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    match caps::image_format_properties(format, tiling) {
        Ok(props) => {
            *p_image_format_properties = props;
            vk::Result::SUCCESS
        }
        Err(e) => e.to_vk_result(),
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceImageFormatProperties2(
    physical_device: vk::PhysicalDevice,
    p_image_format_info: *const vk::PhysicalDeviceImageFormatInfo2<'_>,
    p_image_format_properties: *mut vk::ImageFormatProperties2<'_>,
) -> vk::Result {
    if p_image_format_info.is_null() || p_image_format_properties.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    let info = &*p_image_format_info;
    let props = &mut *p_image_format_properties;

    let external_info =
        chain::find_in::<vk::PhysicalDeviceExternalImageFormatInfo<'_>>(info.p_next);
    let external_props = chain::find_out::<vk::ExternalImageFormatProperties<'_>>(props.p_next);
    if let (Some(requested), Some(out)) = (external_info, external_props) {
        out.external_memory_properties.external_memory_features =
            vk::ExternalMemoryFeatureFlags::IMPORTABLE | vk::ExternalMemoryFeatureFlags::EXPORTABLE;
        out.external_memory_properties.compatible_handle_types = requested.handle_type;
    }

    vkGetPhysicalDeviceImageFormatProperties(
        physical_device,
        info.format,
        info.ty,
        info.tiling,
        info.usage,
        info.flags,
        &mut props.image_format_properties,
    )
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSparseImageFormatProperties(
    _physical_device: vk::PhysicalDevice,
    format: vk::Format,
    _ty: vk::ImageType,
    _samples: vk::SampleCountFlags,
    _usage: vk::ImageUsageFlags,
    _tiling: vk::ImageTiling,
    p_property_count: *mut u32,
    p_properties: *mut vk::SparseImageFormatProperties,
) {
    enumerate(
        &[caps::sparse_image_format_properties(format)],
        p_property_count,
        p_properties,
    );
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceSparseImageFormatProperties2(
    _physical_device: vk::PhysicalDevice,
    p_format_info: *const vk::PhysicalDeviceSparseImageFormatInfo2<'_>,
    p_property_count: *mut u32,
    p_properties: *mut vk::SparseImageFormatProperties2<'_>,
) {
    if p_format_info.is_null() {
        return;
    }
    let format = (*p_format_info).format;
    enumerate_with(1, p_property_count, p_properties, |_, slot| {
        slot.properties = caps::sparse_image_format_properties(format);
    });
}

// ── External handle capabilities ───────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceExternalBufferProperties(
    _physical_device: vk::PhysicalDevice,
    p_external_buffer_info: *const vk::PhysicalDeviceExternalBufferInfo<'_>,
    p_external_buffer_properties: *mut vk::ExternalBufferProperties<'_>,
) {
    if p_external_buffer_info.is_null() || p_external_buffer_properties.is_null() {
        return;
    }
    let supported = vk::ExternalMemoryHandleTypeFlags::from_raw(0x1FF);
    let handle_type = (*p_external_buffer_info).handle_type;
    let out = &mut (*p_external_buffer_properties).external_memory_properties;

    if handle_type.contains(vk::ExternalMemoryHandleTypeFlags::ANDROID_HARDWARE_BUFFER_ANDROID) {
        // No dedicated allocations for hardware buffers.
        out.external_memory_features =
            vk::ExternalMemoryFeatureFlags::IMPORTABLE | vk::ExternalMemoryFeatureFlags::EXPORTABLE;
        out.export_from_imported_handle_types = handle_type;
        out.compatible_handle_types = handle_type;
    } else if handle_type.intersects(supported) {
        out.external_memory_features = vk::ExternalMemoryFeatureFlags::from_raw(0x7);
        out.export_from_imported_handle_types = supported;
        out.compatible_handle_types = supported;
    } else {
        // A handle type is always compatible with itself.
        out.external_memory_features = vk::ExternalMemoryFeatureFlags::empty();
        out.export_from_imported_handle_types = vk::ExternalMemoryHandleTypeFlags::empty();
        out.compatible_handle_types = handle_type;
    }
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceExternalFenceProperties(
    _physical_device: vk::PhysicalDevice,
    _p_external_fence_info: *const vk::PhysicalDeviceExternalFenceInfo<'_>,
    p_external_fence_properties: *mut vk::ExternalFenceProperties<'_>,
) {
    if p_external_fence_properties.is_null() {
        return;
    }
    let out = &mut *p_external_fence_properties;
    out.export_from_imported_handle_types = vk::ExternalFenceHandleTypeFlags::from_raw(0xF);
    out.compatible_handle_types = vk::ExternalFenceHandleTypeFlags::from_raw(0xF);
    out.external_fence_features = vk::ExternalFenceFeatureFlags::from_raw(0x3);
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceExternalSemaphoreProperties(
    _physical_device: vk::PhysicalDevice,
    _p_external_semaphore_info: *const vk::PhysicalDeviceExternalSemaphoreInfo<'_>,
    p_external_semaphore_properties: *mut vk::ExternalSemaphoreProperties<'_>,
) {
    if p_external_semaphore_properties.is_null() {
        return;
    }
    let out = &mut *p_external_semaphore_properties;
    out.export_from_imported_handle_types = vk::ExternalSemaphoreHandleTypeFlags::from_raw(0x1F);
    out.compatible_handle_types = vk::ExternalSemaphoreHandleTypeFlags::from_raw(0x1F);
    out.external_semaphore_features = vk::ExternalSemaphoreFeatureFlags::from_raw(0x3);
}

// ── Device extensions and layers ───────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateDeviceExtensionProperties(
    _physical_device: vk::PhysicalDevice,
    p_layer_name: *const c_char,
    p_property_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    enumerate_extensions(
        &caps::device_extensions(),
        p_layer_name,
        p_property_count,
        p_properties,
    )
}

#[no_mangle]
pub unsafe extern "system" fn vkEnumerateDeviceLayerProperties(
    _physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    p_properties: *mut vk::LayerProperties,
) -> vk::Result {
    enumerate::<vk::LayerProperties>(&[], p_property_count, p_properties)
}

// ── Extension queries ──────────────────────────────────────

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceMultisamplePropertiesEXT(
    _physical_device: vk::PhysicalDevice,
    _samples: vk::SampleCountFlags,
    p_multisample_properties: *mut vk::MultisamplePropertiesEXT<'_>,
) {
    if p_multisample_properties.is_null() {
        return;
    }
    (*p_multisample_properties).max_sample_location_grid_size = vk::Extent2D {
        width: 32,
        height: 32,
    };
}

/// A single 8x8 rate usable at 1 and 4 samples.
#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceFragmentShadingRatesKHR(
    _physical_device: vk::PhysicalDevice,
    p_fragment_shading_rate_count: *mut u32,
    p_fragment_shading_rates: *mut vk::PhysicalDeviceFragmentShadingRateKHR<'_>,
) -> vk::Result {
    enumerate_with(1, p_fragment_shading_rate_count, p_fragment_shading_rates, |_, slot| {
        slot.sample_counts = vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4;
        slot.fragment_size = vk::Extent2D {
            width: 8,
            height: 8,
        };
    })
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceCalibrateableTimeDomainsKHR(
    _physical_device: vk::PhysicalDevice,
    p_time_domain_count: *mut u32,
    p_time_domains: *mut vk::TimeDomainKHR,
) -> vk::Result {
    enumerate(&[vk::TimeDomainKHR::DEVICE], p_time_domain_count, p_time_domains)
}

const PERFORMANCE_COUNTERS: [(vk::PerformanceCounterScopeKHR, &CStr); 3] = [
    (vk::PerformanceCounterScopeKHR::COMMAND_BUFFER, c"command buffer counter"),
    (vk::PerformanceCounterScopeKHR::RENDER_PASS, c"render pass counter"),
    (vk::PerformanceCounterScopeKHR::COMMAND, c"command counter"),
];

/// Three generic int32 counters, one per query scope.
#[no_mangle]
pub unsafe extern "system" fn vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR(
    _physical_device: vk::PhysicalDevice,
    _queue_family_index: u32,
    p_counter_count: *mut u32,
    p_counters: *mut vk::PerformanceCounterKHR<'_>,
    p_counter_descriptions: *mut vk::PerformanceCounterDescriptionKHR<'_>,
) -> vk::Result {
    if !p_counter_descriptions.is_null() && !p_counter_count.is_null() {
        let mut description_count = *p_counter_count;
        enumerate_with(
            PERFORMANCE_COUNTERS.len(),
            &mut description_count,
            p_counter_descriptions,
            |i, slot| {
                let name = PERFORMANCE_COUNTERS[i].1;
                caps::write_c_string(name, &mut slot.name);
                caps::write_c_string(c"vkmock", &mut slot.category);
                caps::write_c_string(name, &mut slot.description);
            },
        );
    }
    enumerate_with(PERFORMANCE_COUNTERS.len(), p_counter_count, p_counters, |i, slot| {
        slot.unit = vk::PerformanceCounterUnitKHR::GENERIC;
        slot.scope = PERFORMANCE_COUNTERS[i].0;
        slot.storage = vk::PerformanceCounterStorageKHR::INT32;
        slot.uuid = [0; vk::UUID_SIZE];
        slot.uuid[0] = i as u8 + 1;
    })
}

#[no_mangle]
pub unsafe extern "system" fn vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR(
    _physical_device: vk::PhysicalDevice,
    _p_performance_query_create_info: *const vk::QueryPoolPerformanceCreateInfoKHR<'_>,
    p_num_passes: *mut u32,
) {
    if !p_num_passes.is_null() {
        *p_num_passes = 1;
    }
}

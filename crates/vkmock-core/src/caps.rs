//! Compiled-in description of the single synthetic GPU.
//!
//! Every accessor is a pure function of its arguments (and of the immutable
//! [`MockConfig`]), so repeated queries answer bit-identically.

use std::ffi::{c_char, CStr};

use ash::vk;

use crate::config::MockConfig;
use crate::error::DriverError;

/// Physical devices exposed per instance.
pub const PHYSICAL_DEVICE_COUNT: usize = 1;
/// Images backing each swapchain.
pub const SWAPCHAIN_IMAGE_COUNT: usize = 1;
/// Queue families exposed by the physical device.
pub const QUEUE_FAMILY_COUNT: u32 = 1;

/// Loader interface version this driver implements.
pub const ICD_INTERFACE_VERSION: u32 = 5;
/// Oldest interface accepted; physical-device-level proc addresses need 4.
pub const MIN_ICD_INTERFACE_VERSION: u32 = 4;

pub const BUFFER_MEMORY_TYPE_BITS: u32 = 0xFFFF;
/// Memory type 3 (lazily allocated) never backs images.
pub const IMAGE_MEMORY_TYPE_BITS: u32 = 0xFFFF & !(1 << 3);
/// Host pointers import into memory type 5, the device-local-only type.
pub const HOST_POINTER_MEMORY_TYPE_BITS: u32 = 1 << 5;
/// Memory requirement granularity for buffers.
pub const BUFFER_SIZE_GRANULARITY: vk::DeviceSize = 4096;
/// Bytes mapped for `VK_WHOLE_SIZE` on memory the registry does not know.
pub const UNKNOWN_MAPPING_SIZE: vk::DeviceSize = 0x10000;

pub const INSTANCE_EXTENSIONS: &[(&CStr, u32)] = &[
    (c"VK_KHR_surface", 25),
    (c"VK_KHR_get_physical_device_properties2", 2),
    (c"VK_KHR_get_surface_capabilities2", 1),
    (c"VK_KHR_device_group_creation", 1),
    (c"VK_KHR_external_memory_capabilities", 1),
    (c"VK_KHR_external_fence_capabilities", 1),
    (c"VK_KHR_external_semaphore_capabilities", 1),
    (c"VK_EXT_headless_surface", 1),
    (c"VK_KHR_display", 23),
];

pub const DEVICE_EXTENSIONS: &[(&CStr, u32)] = &[
    (c"VK_KHR_swapchain", 70),
    (c"VK_KHR_maintenance1", 2),
    (c"VK_KHR_maintenance3", 1),
    (c"VK_KHR_bind_memory2", 1),
    (c"VK_KHR_get_memory_requirements2", 1),
    (c"VK_KHR_maintenance4", 2),
    (c"VK_KHR_map_memory2", 1),
    (c"VK_KHR_buffer_device_address", 1),
    (c"VK_EXT_buffer_device_address", 2),
    (c"VK_KHR_synchronization2", 1),
    (c"VK_KHR_timeline_semaphore", 2),
    (c"VK_KHR_external_fence", 1),
    (c"VK_KHR_external_fence_fd", 1),
    (c"VK_EXT_descriptor_indexing", 2),
    (c"VK_KHR_external_memory_fd", 1),
    (c"VK_EXT_external_memory_host", 1),
    (c"VK_EXT_sample_locations", 1),
    (c"VK_KHR_fragment_shading_rate", 2),
    (c"VK_KHR_calibrated_timestamps", 1),
    (c"VK_EXT_calibrated_timestamps", 2),
    (c"VK_KHR_performance_query", 1),
    (c"VK_EXT_shader_module_identifier", 1),
    (c"VK_EXT_descriptor_buffer", 1),
    (c"VK_KHR_acceleration_structure", 13),
    (c"VK_EXT_private_data", 1),
];

pub fn instance_extensions() -> Vec<vk::ExtensionProperties> {
    extension_properties(INSTANCE_EXTENSIONS)
}

pub fn device_extensions() -> Vec<vk::ExtensionProperties> {
    extension_properties(DEVICE_EXTENSIONS)
}

fn extension_properties(list: &[(&CStr, u32)]) -> Vec<vk::ExtensionProperties> {
    list.iter()
        .map(|(name, spec_version)| {
            let mut prop = vk::ExtensionProperties {
                spec_version: *spec_version,
                ..Default::default()
            };
            write_c_string(name, &mut prop.extension_name);
            prop
        })
        .collect()
}

/// Copy `src` into a fixed-size C string field, truncating and NUL-terminating.
pub fn write_c_string(src: &CStr, dst: &mut [c_char]) {
    let bytes = src.to_bytes();
    let len = std::cmp::min(bytes.len(), dst.len() - 1);
    for (slot, byte) in dst.iter_mut().zip(&bytes[..len]) {
        *slot = *byte as c_char;
    }
    dst[len] = 0;
}

// Only for structs made of nothing but VkBool32 members.
fn all_true<T: Default>() -> T {
    let mut value = T::default();
    let count = std::mem::size_of::<T>() / std::mem::size_of::<vk::Bool32>();
    unsafe {
        std::slice::from_raw_parts_mut(&mut value as *mut T as *mut vk::Bool32, count)
            .fill(vk::TRUE);
    }
    value
}

pub fn limits() -> vk::PhysicalDeviceLimits {
    let all_samples = vk::SampleCountFlags::from_raw(0x7F);
    vk::PhysicalDeviceLimits {
        max_image_dimension1_d: 4096,
        max_image_dimension2_d: 4096,
        max_image_dimension3_d: 256,
        max_image_dimension_cube: 4096,
        max_image_array_layers: 256,
        max_texel_buffer_elements: 65536,
        max_uniform_buffer_range: 16384,
        max_storage_buffer_range: 134_217_728,
        max_push_constants_size: 128,
        max_memory_allocation_count: 4096,
        max_sampler_allocation_count: 4000,
        buffer_image_granularity: 1,
        sparse_address_space_size: 2_147_483_648,
        max_bound_descriptor_sets: 4,
        max_per_stage_descriptor_samplers: 16,
        max_per_stage_descriptor_uniform_buffers: 12,
        max_per_stage_descriptor_storage_buffers: 4,
        max_per_stage_descriptor_sampled_images: 16,
        max_per_stage_descriptor_storage_images: 4,
        max_per_stage_descriptor_input_attachments: 4,
        max_per_stage_resources: 128,
        max_descriptor_set_samplers: 96,
        max_descriptor_set_uniform_buffers: 72,
        max_descriptor_set_uniform_buffers_dynamic: 8,
        max_descriptor_set_storage_buffers: 24,
        max_descriptor_set_storage_buffers_dynamic: 4,
        max_descriptor_set_sampled_images: 96,
        max_descriptor_set_storage_images: 24,
        max_descriptor_set_input_attachments: 4,
        max_vertex_input_attributes: 16,
        max_vertex_input_bindings: 16,
        max_vertex_input_attribute_offset: 2047,
        max_vertex_input_binding_stride: 2048,
        max_vertex_output_components: 64,
        max_tessellation_generation_level: 64,
        max_tessellation_patch_size: 32,
        max_tessellation_control_per_vertex_input_components: 64,
        max_tessellation_control_per_vertex_output_components: 64,
        max_tessellation_control_per_patch_output_components: 120,
        max_tessellation_control_total_output_components: 2048,
        max_tessellation_evaluation_input_components: 64,
        max_tessellation_evaluation_output_components: 64,
        max_geometry_shader_invocations: 32,
        max_geometry_input_components: 64,
        max_geometry_output_components: 64,
        max_geometry_output_vertices: 256,
        max_geometry_total_output_components: 1024,
        max_fragment_input_components: 64,
        max_fragment_output_attachments: 4,
        max_fragment_dual_src_attachments: 1,
        max_fragment_combined_output_resources: 4,
        max_compute_shared_memory_size: 16384,
        max_compute_work_group_count: [65535, 65535, 65535],
        max_compute_work_group_invocations: 128,
        max_compute_work_group_size: [128, 128, 64],
        sub_pixel_precision_bits: 4,
        sub_texel_precision_bits: 4,
        mipmap_precision_bits: 4,
        max_draw_indexed_index_value: u32::MAX,
        max_draw_indirect_count: u16::MAX as u32,
        max_sampler_lod_bias: 2.0,
        max_sampler_anisotropy: 16.0,
        max_viewports: 16,
        max_viewport_dimensions: [4096, 4096],
        viewport_bounds_range: [-8192.0, 8191.0],
        viewport_sub_pixel_bits: 0,
        min_memory_map_alignment: 64,
        min_texel_buffer_offset_alignment: 16,
        min_uniform_buffer_offset_alignment: 16,
        min_storage_buffer_offset_alignment: 16,
        min_texel_offset: -8,
        max_texel_offset: 7,
        min_texel_gather_offset: -8,
        max_texel_gather_offset: 7,
        min_interpolation_offset: 0.0,
        max_interpolation_offset: 0.5,
        sub_pixel_interpolation_offset_bits: 4,
        max_framebuffer_width: 4096,
        max_framebuffer_height: 4096,
        max_framebuffer_layers: 256,
        framebuffer_color_sample_counts: all_samples,
        framebuffer_depth_sample_counts: all_samples,
        framebuffer_stencil_sample_counts: all_samples,
        framebuffer_no_attachments_sample_counts: all_samples,
        max_color_attachments: 4,
        sampled_image_color_sample_counts: all_samples,
        sampled_image_integer_sample_counts: all_samples,
        sampled_image_depth_sample_counts: all_samples,
        sampled_image_stencil_sample_counts: all_samples,
        storage_image_sample_counts: all_samples,
        max_sample_mask_words: 1,
        timestamp_compute_and_graphics: vk::TRUE,
        timestamp_period: 1.0,
        max_clip_distances: 8,
        max_cull_distances: 8,
        max_combined_clip_and_cull_distances: 8,
        discrete_queue_priorities: 2,
        point_size_range: [1.0, 64.0],
        line_width_range: [1.0, 8.0],
        point_size_granularity: 1.0,
        line_width_granularity: 1.0,
        strict_lines: vk::TRUE,
        standard_sample_locations: vk::TRUE,
        optimal_buffer_copy_offset_alignment: 1,
        optimal_buffer_copy_row_pitch_alignment: 1,
        non_coherent_atom_size: 256,
        ..Default::default()
    }
}

pub fn sparse_properties() -> vk::PhysicalDeviceSparseProperties {
    all_true()
}

pub fn features() -> vk::PhysicalDeviceFeatures {
    all_true()
}

pub fn physical_device_properties(config: &MockConfig) -> vk::PhysicalDeviceProperties {
    let mut props = vk::PhysicalDeviceProperties {
        api_version: vk::HEADER_VERSION_COMPLETE,
        driver_version: config.device.driver_version,
        vendor_id: config.device.vendor_id,
        device_id: config.device.device_id,
        device_type: vk::PhysicalDeviceType::VIRTUAL_GPU,
        limits: limits(),
        sparse_properties: sparse_properties(),
        ..Default::default()
    };
    let name: Vec<u8> = config.device.name.bytes().filter(|b| *b != 0).collect();
    let len = std::cmp::min(name.len(), props.device_name.len() - 1);
    for (dst, src) in props.device_name.iter_mut().zip(&name[..len]) {
        *dst = *src as c_char;
    }
    props.device_name[len] = 0;
    props.pipeline_cache_uuid[0] = 18;
    props
}

pub fn queue_family_properties() -> vk::QueueFamilyProperties {
    vk::QueueFamilyProperties {
        queue_flags: vk::QueueFlags::GRAPHICS
            | vk::QueueFlags::COMPUTE
            | vk::QueueFlags::TRANSFER
            | vk::QueueFlags::SPARSE_BINDING,
        queue_count: 1,
        timestamp_valid_bits: 16,
        min_image_transfer_granularity: vk::Extent3D {
            width: 1,
            height: 1,
            depth: 1,
        },
    }
}

pub fn memory_properties(config: &MockConfig) -> vk::PhysicalDeviceMemoryProperties {
    let mut props = vk::PhysicalDeviceMemoryProperties::default();
    let types = [
        (vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT, 0),
        (vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_CACHED, 0),
        (
            vk::MemoryPropertyFlags::DEVICE_LOCAL
                | vk::MemoryPropertyFlags::HOST_VISIBLE
                | vk::MemoryPropertyFlags::HOST_CACHED
                | vk::MemoryPropertyFlags::HOST_COHERENT,
            1,
        ),
        (vk::MemoryPropertyFlags::DEVICE_LOCAL | vk::MemoryPropertyFlags::LAZILY_ALLOCATED, 1),
        (vk::MemoryPropertyFlags::DEVICE_LOCAL | vk::MemoryPropertyFlags::PROTECTED, 1),
        (vk::MemoryPropertyFlags::DEVICE_LOCAL, 1),
    ];
    props.memory_type_count = types.len() as u32;
    for (slot, (property_flags, heap_index)) in props.memory_types.iter_mut().zip(types) {
        *slot = vk::MemoryType {
            property_flags,
            heap_index,
        };
    }
    props.memory_heap_count = 2;
    props.memory_heaps[0] = vk::MemoryHeap {
        size: config.memory.heap_size,
        flags: vk::MemoryHeapFlags::MULTI_INSTANCE,
    };
    props.memory_heaps[1] = vk::MemoryHeap {
        size: config.memory.heap_size,
        flags: vk::MemoryHeapFlags::DEVICE_LOCAL,
    };
    props
}

fn is_depth_stencil(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::D16_UNORM
            | vk::Format::X8_D24_UNORM_PACK32
            | vk::Format::D32_SFLOAT
            | vk::Format::S8_UINT
            | vk::Format::D16_UNORM_S8_UINT
            | vk::Format::D24_UNORM_S8_UINT
            | vk::Format::D32_SFLOAT_S8_UINT
    )
}

pub fn format_properties(format: vk::Format) -> vk::FormatProperties {
    let (tiling, buffer) = match format {
        vk::Format::UNDEFINED => (0, 0),
        f if is_depth_stencil(f) => (0x00FF_FE7F, 0x00FF_FE7F),
        // Video-capable YCbCr formats also get decode/encode bits.
        vk::Format::G8_B8R8_2PLANE_420_UNORM
        | vk::Format::G8_B8_R8_3PLANE_420_UNORM
        | vk::Format::G8_B8R8_2PLANE_422_UNORM
        | vk::Format::B10X6G10X6R10X6G10X6_422_UNORM_4PACK16
        | vk::Format::G8_B8R8_2PLANE_444_UNORM => (0x1EFF_FDFF, 0x00FF_FDFF),
        _ => (0x00FF_FDFF, 0x00FF_FDFF),
    };
    vk::FormatProperties {
        linear_tiling_features: vk::FormatFeatureFlags::from_raw(tiling),
        optimal_tiling_features: vk::FormatFeatureFlags::from_raw(tiling),
        buffer_features: vk::FormatFeatureFlags::from_raw(buffer),
    }
}

pub fn image_format_properties(
    format: vk::Format,
    tiling: vk::ImageTiling,
) -> Result<vk::ImageFormatProperties, DriverError> {
    if format == vk::Format::E5B9G9R9_UFLOAT_PACK32 {
        return Err(DriverError::FormatNotSupported(format));
    }
    let max_extent = vk::Extent3D {
        width: 4096,
        height: 4096,
        depth: 256,
    };
    let props = if tiling == vk::ImageTiling::LINEAR {
        vk::ImageFormatProperties {
            max_extent,
            max_mip_levels: 1,
            max_array_layers: 1,
            sample_counts: vk::SampleCountFlags::TYPE_1,
            max_resource_size: 4_294_967_296,
        }
    } else {
        vk::ImageFormatProperties {
            max_extent,
            max_mip_levels: 12,
            max_array_layers: 256,
            sample_counts: vk::SampleCountFlags::from_raw(0x7F) & !vk::SampleCountFlags::TYPE_64,
            max_resource_size: 4_294_967_296,
        }
    };
    Ok(props)
}

pub fn sparse_image_format_properties(format: vk::Format) -> vk::SparseImageFormatProperties {
    let aspect_mask = match format {
        vk::Format::D16_UNORM | vk::Format::D32_SFLOAT => vk::ImageAspectFlags::DEPTH,
        vk::Format::S8_UINT => vk::ImageAspectFlags::STENCIL,
        f if is_depth_stencil(f) => vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL,
        _ => vk::ImageAspectFlags::COLOR,
    };
    vk::SparseImageFormatProperties {
        aspect_mask,
        image_granularity: vk::Extent3D {
            width: 4,
            height: 4,
            depth: 4,
        },
        flags: vk::SparseImageFormatFlags::SINGLE_MIPTAIL,
    }
}

pub fn image_sparse_memory_requirements() -> vk::SparseImageMemoryRequirements {
    vk::SparseImageMemoryRequirements {
        format_properties: vk::SparseImageFormatProperties {
            // The image's format is not tracked, so claim every aspect.
            aspect_mask: vk::ImageAspectFlags::COLOR
                | vk::ImageAspectFlags::DEPTH
                | vk::ImageAspectFlags::STENCIL
                | vk::ImageAspectFlags::METADATA,
            image_granularity: vk::Extent3D {
                width: 4,
                height: 4,
                depth: 4,
            },
            flags: vk::SparseImageFormatFlags::SINGLE_MIPTAIL,
        },
        image_mip_tail_first_lod: 0,
        image_mip_tail_size: 8,
        image_mip_tail_offset: 0,
        image_mip_tail_stride: 4,
    }
}

fn plane_count(format: vk::Format) -> u64 {
    match format {
        vk::Format::G8_B8_R8_3PLANE_420_UNORM
        | vk::Format::G8_B8_R8_3PLANE_422_UNORM
        | vk::Format::G8_B8_R8_3PLANE_444_UNORM
        | vk::Format::G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16
        | vk::Format::G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16
        | vk::Format::G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16
        | vk::Format::G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16
        | vk::Format::G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16
        | vk::Format::G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16
        | vk::Format::G16_B16_R16_3PLANE_420_UNORM
        | vk::Format::G16_B16_R16_3PLANE_422_UNORM
        | vk::Format::G16_B16_R16_3PLANE_444_UNORM => 3,
        vk::Format::G8_B8R8_2PLANE_420_UNORM
        | vk::Format::G8_B8R8_2PLANE_422_UNORM
        | vk::Format::G8_B8R8_2PLANE_444_UNORM
        | vk::Format::G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16
        | vk::Format::G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16
        | vk::Format::G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16
        | vk::Format::G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16
        | vk::Format::G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16
        | vk::Format::G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16
        | vk::Format::G16_B16R16_2PLANE_420_UNORM
        | vk::Format::G16_B16R16_2PLANE_422_UNORM
        | vk::Format::G16_B16R16_2PLANE_444_UNORM => 2,
        _ => 1,
    }
}

/// Synthetic byte size of an image: 32 bytes per texel per layer, doubled
/// for a mip chain, times the plane count.
pub fn image_size(create_info: &vk::ImageCreateInfo<'_>) -> vk::DeviceSize {
    let extent = create_info.extent;
    let mips = if create_info.mip_levels > 1 { 2 } else { 1 };
    u64::from(extent.width)
        .saturating_mul(u64::from(extent.height))
        .saturating_mul(u64::from(extent.depth))
        .saturating_mul(32)
        .saturating_mul(u64::from(create_info.array_layers))
        .saturating_mul(mips)
        .saturating_mul(plane_count(create_info.format))
}

/// Buffer sizes round up to the next multiple of 4096.
pub fn buffer_memory_requirements(size: Option<vk::DeviceSize>) -> vk::MemoryRequirements {
    let size = match size {
        Some(size) => size.div_ceil(BUFFER_SIZE_GRANULARITY).saturating_mul(BUFFER_SIZE_GRANULARITY),
        None => BUFFER_SIZE_GRANULARITY,
    };
    vk::MemoryRequirements {
        size,
        alignment: 1,
        memory_type_bits: BUFFER_MEMORY_TYPE_BITS,
    }
}

pub fn image_memory_requirements(size: Option<vk::DeviceSize>) -> vk::MemoryRequirements {
    vk::MemoryRequirements {
        size: size.unwrap_or(0),
        alignment: 1,
        memory_type_bits: IMAGE_MEMORY_TYPE_BITS,
    }
}

pub fn surface_capabilities() -> vk::SurfaceCapabilitiesKHR {
    vk::SurfaceCapabilitiesKHR {
        min_image_count: 1,
        max_image_count: 0,
        current_extent: vk::Extent2D {
            width: u32::MAX,
            height: u32::MAX,
        },
        min_image_extent: vk::Extent2D {
            width: 1,
            height: 1,
        },
        max_image_extent: vk::Extent2D {
            width: 0xFFFF,
            height: 0xFFFF,
        },
        max_image_array_layers: 128,
        supported_transforms: vk::SurfaceTransformFlagsKHR::from_raw(0x1FF),
        current_transform: vk::SurfaceTransformFlagsKHR::IDENTITY,
        supported_composite_alpha: vk::CompositeAlphaFlagsKHR::OPAQUE
            | vk::CompositeAlphaFlagsKHR::PRE_MULTIPLIED
            | vk::CompositeAlphaFlagsKHR::POST_MULTIPLIED
            | vk::CompositeAlphaFlagsKHR::INHERIT,
        supported_usage_flags: vk::ImageUsageFlags::TRANSFER_SRC
            | vk::ImageUsageFlags::TRANSFER_DST
            | vk::ImageUsageFlags::SAMPLED
            | vk::ImageUsageFlags::STORAGE
            | vk::ImageUsageFlags::COLOR_ATTACHMENT
            | vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT
            | vk::ImageUsageFlags::TRANSIENT_ATTACHMENT
            | vk::ImageUsageFlags::INPUT_ATTACHMENT,
    }
}

pub const SURFACE_FORMATS: [vk::SurfaceFormatKHR; 2] = [
    vk::SurfaceFormatKHR {
        format: vk::Format::B8G8R8A8_UNORM,
        color_space: vk::ColorSpaceKHR::SRGB_NONLINEAR,
    },
    vk::SurfaceFormatKHR {
        format: vk::Format::R8G8B8A8_UNORM,
        color_space: vk::ColorSpaceKHR::SRGB_NONLINEAR,
    },
];

pub const PRESENT_MODES: [vk::PresentModeKHR; 6] = [
    vk::PresentModeKHR::IMMEDIATE,
    vk::PresentModeKHR::MAILBOX,
    vk::PresentModeKHR::FIFO,
    vk::PresentModeKHR::FIFO_RELAXED,
    vk::PresentModeKHR::SHARED_DEMAND_REFRESH,
    vk::PresentModeKHR::SHARED_CONTINUOUS_REFRESH,
];

//! Integration test: capability tables
//!
//! Run with: cargo test -p vkmock-core --test caps_test

use ash::vk;
use vkmock_core::caps;
use vkmock_core::{DriverError, MockConfig};

fn as_bytes<T>(value: &T) -> &[u8] {
    unsafe { std::slice::from_raw_parts(value as *const T as *const u8, std::mem::size_of::<T>()) }
}

#[test]
fn test_queries_are_bit_identical() {
    let config = MockConfig::default();
    assert_eq!(as_bytes(&caps::limits()), as_bytes(&caps::limits()));
    assert_eq!(
        as_bytes(&caps::physical_device_properties(&config)),
        as_bytes(&caps::physical_device_properties(&config))
    );
    assert_eq!(
        as_bytes(&caps::memory_properties(&config)),
        as_bytes(&caps::memory_properties(&config))
    );
    assert_eq!(as_bytes(&caps::features()), as_bytes(&caps::features()));
}

#[test]
fn test_queue_family() {
    let family = caps::queue_family_properties();
    assert_eq!(family.queue_count, 1);
    let required = vk::QueueFlags::GRAPHICS
        | vk::QueueFlags::COMPUTE
        | vk::QueueFlags::TRANSFER
        | vk::QueueFlags::SPARSE_BINDING;
    assert!(family.queue_flags.contains(required));
    assert!(family.timestamp_valid_bits > 0);
}

#[test]
fn test_limits_are_plausible() {
    let limits = caps::limits();
    assert_eq!(limits.max_image_dimension2_d, 4096);
    assert_eq!(limits.max_bound_descriptor_sets, 4);
    assert!(limits.max_memory_allocation_count > 0);
    assert!(limits.non_coherent_atom_size > 0);
    assert!(limits.max_compute_work_group_size.iter().all(|v| *v > 0));
}

#[test]
fn test_device_properties_follow_config() {
    let mut config = MockConfig::default();
    config.device.name = "Test GPU".to_string();
    config.device.vendor_id = 0x1234;

    let props = caps::physical_device_properties(&config);
    assert_eq!(props.device_name_as_c_str().unwrap(), c"Test GPU");
    assert_eq!(props.vendor_id, 0x1234);
    assert_eq!(props.device_type, vk::PhysicalDeviceType::VIRTUAL_GPU);
    assert_eq!(props.pipeline_cache_uuid[0], 18);
    assert_eq!(props.sparse_properties.residency_non_resident_strict, vk::TRUE);
}

#[test]
fn test_long_device_name_is_truncated() {
    let mut config = MockConfig::default();
    config.device.name = "x".repeat(400);
    let props = caps::physical_device_properties(&config);
    let name = props.device_name_as_c_str().unwrap();
    assert_eq!(name.to_bytes().len(), vk::MAX_PHYSICAL_DEVICE_NAME_SIZE - 1);
}

#[test]
fn test_memory_layout() {
    let config = MockConfig::default();
    let props = caps::memory_properties(&config);
    assert_eq!(props.memory_type_count, 6);
    assert_eq!(props.memory_heap_count, 2);
    assert_eq!(props.memory_heaps[1].size, 8_000_000_000);
    assert!(props.memory_heaps[1].flags.contains(vk::MemoryHeapFlags::DEVICE_LOCAL));
    for ty in &props.memory_types[..props.memory_type_count as usize] {
        assert!(ty.heap_index < props.memory_heap_count);
    }
    // Type 3 is lazily allocated and excluded from images.
    assert!(props.memory_types[3]
        .property_flags
        .contains(vk::MemoryPropertyFlags::LAZILY_ALLOCATED));
    assert_eq!(caps::IMAGE_MEMORY_TYPE_BITS & (1 << 3), 0);
}

#[test]
fn test_format_properties() {
    let undefined = caps::format_properties(vk::Format::UNDEFINED);
    assert!(undefined.optimal_tiling_features.is_empty());

    let color = caps::format_properties(vk::Format::R8G8B8A8_UNORM);
    assert_eq!(color.optimal_tiling_features.as_raw(), 0x00FF_FDFF);

    let depth = caps::format_properties(vk::Format::D32_SFLOAT);
    assert!(depth
        .optimal_tiling_features
        .contains(vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT));
    assert!(!depth
        .optimal_tiling_features
        .contains(vk::FormatFeatureFlags::COLOR_ATTACHMENT));
}

#[test]
fn test_image_format_properties() {
    match caps::image_format_properties(vk::Format::E5B9G9R9_UFLOAT_PACK32, vk::ImageTiling::OPTIMAL) {
        Err(e @ DriverError::FormatNotSupported(_)) => {
            assert_eq!(e.to_vk_result(), vk::Result::ERROR_FORMAT_NOT_SUPPORTED)
        }
        other => panic!("expected FormatNotSupported, got {:?}", other),
    }

    let linear = caps::image_format_properties(vk::Format::R8G8B8A8_UNORM, vk::ImageTiling::LINEAR).unwrap();
    assert_eq!(linear.max_mip_levels, 1);
    assert_eq!(linear.sample_counts, vk::SampleCountFlags::TYPE_1);

    let optimal = caps::image_format_properties(vk::Format::R8G8B8A8_UNORM, vk::ImageTiling::OPTIMAL).unwrap();
    assert_eq!(optimal.max_mip_levels, 12);
    assert!(!optimal.sample_counts.contains(vk::SampleCountFlags::TYPE_64));
}

#[test]
fn test_image_size() {
    let info = vk::ImageCreateInfo::default()
        .format(vk::Format::R8G8B8A8_UNORM)
        .extent(vk::Extent3D {
            width: 8,
            height: 8,
            depth: 8,
        })
        .mip_levels(1)
        .array_layers(1);
    assert_eq!(caps::image_size(&info), 8 * 8 * 8 * 32);

    let mipped = info.mip_levels(4).array_layers(2);
    assert_eq!(caps::image_size(&mipped), 8 * 8 * 8 * 32 * 2 * 2);

    let planar = info.format(vk::Format::G8_B8_R8_3PLANE_420_UNORM);
    assert_eq!(caps::image_size(&planar), 8 * 8 * 8 * 32 * 3);
}

#[test]
fn test_image_size_high_bit_depth_planes() {
    let info = vk::ImageCreateInfo::default()
        .extent(vk::Extent3D {
            width: 8,
            height: 8,
            depth: 1,
        })
        .mip_levels(1)
        .array_layers(1);
    let base = 8 * 8 * 32;

    let ten_bit = info.format(vk::Format::G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16);
    assert_eq!(caps::image_size(&ten_bit), base * 3);

    let twelve_bit = info.format(vk::Format::G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16);
    assert_eq!(caps::image_size(&twelve_bit), base * 3);

    let two_plane = info.format(vk::Format::G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16);
    assert_eq!(caps::image_size(&two_plane), base * 2);

    let two_plane_444 = info.format(vk::Format::G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16);
    assert_eq!(caps::image_size(&two_plane_444), base * 2);

    let packed = info.format(vk::Format::B10X6G10X6R10X6G10X6_422_UNORM_4PACK16);
    assert_eq!(caps::image_size(&packed), base);
}

#[test]
fn test_memory_requirements() {
    let reqs = caps::buffer_memory_requirements(Some(1));
    assert_eq!(reqs.size, 4096);
    assert_eq!(caps::buffer_memory_requirements(Some(4097)).size, 8192);
    assert_eq!(caps::buffer_memory_requirements(None).size, 4096);
    assert_eq!(reqs.memory_type_bits, 0xFFFF);

    let image = caps::image_memory_requirements(Some(16384));
    assert_eq!(image.size, 16384);
    assert_eq!(image.alignment, 1);
}

#[test]
fn test_write_c_string_truncates() {
    let mut buf = [1 as std::ffi::c_char; 4];
    caps::write_c_string(c"abcdef", &mut buf);
    assert_eq!(buf, [b'a' as _, b'b' as _, b'c' as _, 0]);

    let mut wide = [1 as std::ffi::c_char; 8];
    caps::write_c_string(c"ab", &mut wide);
    assert_eq!(&wide[..4], &[b'a' as _, b'b' as _, 0, 1]);
}

//! Integration test: end-to-end driver scenario
//!
//! Calls the exported entry points the way a loader and application would:
//! negotiate, create an instance, walk the single physical device, build a
//! device and push memory, buffers, images, swapchains and command buffers
//! through it.
//!
//! Run with: cargo test -p vkmock-icd --test scenario_test -- --nocapture

use std::ffi::c_void;
use std::ptr;

use ash::vk;
use ash::vk::Handle;
use vkmock_core::DispatchableObject;
use vkmock_icd::{acceleration, command, descriptor, device, display, driver, image, instance, memory};
use vkmock_icd::{physical_device, pipeline, renderpass, swapchain, sync};

fn negotiate() {
    let mut version = 5u32;
    let result = unsafe { vkmock_icd::vk_icdNegotiateLoaderICDInterfaceVersion(&mut version) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(version, 5);
}

fn create_instance() -> vk::Instance {
    negotiate();
    let app = vk::ApplicationInfo::default().api_version(vk::API_VERSION_1_3);
    let ci = vk::InstanceCreateInfo::default().application_info(&app);
    let mut instance = vk::Instance::null();
    let result = unsafe { instance::vkCreateInstance(&ci, ptr::null(), &mut instance) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(!instance.is_null());
    instance
}

fn first_physical_device(instance: vk::Instance) -> vk::PhysicalDevice {
    let mut count = 0u32;
    let result = unsafe { instance::vkEnumeratePhysicalDevices(instance, &mut count, ptr::null_mut()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(count, 1);

    let mut pd = vk::PhysicalDevice::null();
    let result = unsafe { instance::vkEnumeratePhysicalDevices(instance, &mut count, &mut pd) };
    assert_eq!(result, vk::Result::SUCCESS);
    pd
}

fn create_device(pd: vk::PhysicalDevice) -> vk::Device {
    let priorities = [1.0f32];
    let queue_info = [vk::DeviceQueueCreateInfo::default()
        .queue_family_index(0)
        .queue_priorities(&priorities)];
    let ci = vk::DeviceCreateInfo::default().queue_create_infos(&queue_info);
    let mut dev = vk::Device::null();
    let result = unsafe { device::vkCreateDevice(pd, &ci, ptr::null(), &mut dev) };
    assert_eq!(result, vk::Result::SUCCESS);
    dev
}

#[test]
fn test_instance_and_physical_device() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    assert!(unsafe { DispatchableObject::has_loader_magic(pd) });

    let mut props = vk::PhysicalDeviceProperties::default();
    unsafe { physical_device::vkGetPhysicalDeviceProperties(pd, &mut props) };
    println!("device: {:?}", props.device_name_as_c_str());
    assert_eq!(props.device_name_as_c_str().unwrap(), c"Vulkan Mock Device");
    assert_eq!(props.vendor_id, 0xba5eba11);
    assert_eq!(props.limits.max_image_dimension2_d, 4096);

    let mut family_count = 0u32;
    unsafe {
        physical_device::vkGetPhysicalDeviceQueueFamilyProperties(pd, &mut family_count, ptr::null_mut())
    };
    assert_eq!(family_count, 1);
    let mut family = vk::QueueFamilyProperties::default();
    unsafe { physical_device::vkGetPhysicalDeviceQueueFamilyProperties(pd, &mut family_count, &mut family) };
    assert_eq!(family.queue_count, 1);
    assert!(family.queue_flags.contains(
        vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE | vk::QueueFlags::TRANSFER
    ));

    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_properties2_chain() {
    let instance = create_instance();
    let pd = first_physical_device(instance);

    let mut driver_props = vk::PhysicalDeviceDriverProperties::default();
    let mut props2 = vk::PhysicalDeviceProperties2::default().push_next(&mut driver_props);
    unsafe { physical_device::vkGetPhysicalDeviceProperties2(pd, &mut props2) };
    assert_eq!(props2.properties.vendor_id, 0xba5eba11);
    assert_eq!(driver_props.driver_name_as_c_str().unwrap(), c"Vulkan Mock Device");

    let mut bda = vk::PhysicalDeviceBufferDeviceAddressFeatures::default();
    let mut features2 = vk::PhysicalDeviceFeatures2::default().push_next(&mut bda);
    unsafe { physical_device::vkGetPhysicalDeviceFeatures2(pd, &mut features2) };
    assert_eq!(features2.features.geometry_shader, vk::TRUE);
    assert_eq!(bda.buffer_device_address, vk::TRUE);

    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_extension_enumeration() {
    let mut count = 0u32;
    let result = unsafe {
        instance::vkEnumerateInstanceExtensionProperties(ptr::null(), &mut count, ptr::null_mut())
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(count >= 2);

    let mut props = vec![vk::ExtensionProperties::default(); 1];
    let mut short = 1u32;
    let result = unsafe {
        instance::vkEnumerateInstanceExtensionProperties(ptr::null(), &mut short, props.as_mut_ptr())
    };
    assert_eq!(result, vk::Result::INCOMPLETE);
    assert_eq!(short, 1);
    assert_eq!(props[0].extension_name_as_c_str().unwrap(), c"VK_KHR_surface");

    let layer = c"VK_LAYER_KHRONOS_validation";
    let mut count = 7u32;
    let result = unsafe {
        instance::vkEnumerateInstanceExtensionProperties(layer.as_ptr(), &mut count, ptr::null_mut())
    };
    assert_eq!(result, vk::Result::ERROR_LAYER_NOT_PRESENT);
    assert_eq!(count, 0);
}

#[test]
fn test_device_and_queue() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let mut queue = vk::Queue::null();
    unsafe { device::vkGetDeviceQueue(dev, 0, 0, &mut queue) };
    assert!(!queue.is_null());
    assert!(unsafe { DispatchableObject::has_loader_magic(queue) });

    let mut again = vk::Queue::null();
    unsafe { device::vkGetDeviceQueue(dev, 0, 0, &mut again) };
    assert_eq!(queue, again);

    let mut missing = vk::Queue::from_raw(1);
    unsafe { device::vkGetDeviceQueue(dev, 0, 3, &mut missing) };
    assert!(missing.is_null());

    assert_eq!(unsafe { device::vkQueueSubmit(queue, 0, ptr::null(), vk::Fence::null()) }, vk::Result::SUCCESS);
    assert_eq!(unsafe { device::vkDeviceWaitIdle(dev) }, vk::Result::SUCCESS);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    assert!(!driver().device_exists(dev));
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_submit_with_export_fence_reports_device_loss() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);
    let mut queue = vk::Queue::null();
    unsafe { device::vkGetDeviceQueue(dev, 0, 0, &mut queue) };

    let export = vk::ExportFenceCreateInfo::default();
    let mut submit = vk::SubmitInfo::default();
    submit.p_next = &export as *const vk::ExportFenceCreateInfo<'_> as *const c_void;
    let result = unsafe { device::vkQueueSubmit(queue, 1, &submit, vk::Fence::null()) };
    assert_eq!(result, vk::Result::ERROR_DEVICE_LOST);

    let plain = vk::SubmitInfo::default();
    let result = unsafe { device::vkQueueSubmit(queue, 1, &plain, vk::Fence::null()) };
    assert_eq!(result, vk::Result::SUCCESS);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_memory_map_cycle() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let info = vk::MemoryAllocateInfo::default().allocation_size(4096).memory_type_index(0);
    let mut mem = vk::DeviceMemory::null();
    let result = unsafe { memory::vkAllocateMemory(dev, &info, ptr::null(), &mut mem) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(driver().memory_size(mem), Some(4096));

    // Unmapping memory that was never mapped is harmless.
    unsafe { memory::vkUnmapMemory(dev, mem) };
    assert_eq!(driver().mapping_count(mem), 0);

    let mut data: *mut c_void = ptr::null_mut();
    let result = unsafe {
        memory::vkMapMemory(dev, mem, 0, vk::WHOLE_SIZE, vk::MemoryMapFlags::empty(), &mut data)
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(!data.is_null());
    assert_eq!(driver().mapping_count(mem), 1);

    // Host-visible memory is writable and starts zeroed.
    let bytes = unsafe { std::slice::from_raw_parts_mut(data as *mut u8, 4096) };
    assert!(bytes.iter().all(|&b| b == 0));
    bytes[4095] = 0xAB;

    unsafe { memory::vkUnmapMemory(dev, mem) };
    assert_eq!(driver().mapping_count(mem), 0);

    let map_info = vk::MemoryMapInfoKHR::default().memory(mem).offset(0).size(256);
    let mut data2: *mut c_void = ptr::null_mut();
    let result = unsafe { memory::vkMapMemory2KHR(dev, &map_info, &mut data2) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(driver().mapping_count(mem), 1);

    unsafe { memory::vkFreeMemory(dev, mem, ptr::null()) };
    assert_eq!(driver().memory_size(mem), None);
    assert_eq!(driver().mapping_count(mem), 0);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_buffer_and_image() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let buffer_info = vk::BufferCreateInfo::default()
        .size(1000)
        .usage(vk::BufferUsageFlags::STORAGE_BUFFER | vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS);
    let mut buffer = vk::Buffer::null();
    let result = unsafe { memory::vkCreateBuffer(dev, &buffer_info, ptr::null(), &mut buffer) };
    assert_eq!(result, vk::Result::SUCCESS);

    let mut reqs = vk::MemoryRequirements::default();
    unsafe { memory::vkGetBufferMemoryRequirements(dev, buffer, &mut reqs) };
    assert_eq!(reqs.size, 4096);
    assert_eq!(reqs.memory_type_bits, 0xFFFF);

    let address_info = vk::BufferDeviceAddressInfo::default().buffer(buffer);
    let address = unsafe { memory::vkGetBufferDeviceAddress(dev, &address_info) };
    assert_ne!(address, 0);
    assert_eq!(address % 64, 0);

    let image_info = vk::ImageCreateInfo::default()
        .image_type(vk::ImageType::TYPE_2D)
        .format(vk::Format::R8G8B8A8_UNORM)
        .extent(vk::Extent3D { width: 16, height: 16, depth: 1 })
        .mip_levels(1)
        .array_layers(1)
        .samples(vk::SampleCountFlags::TYPE_1)
        .usage(vk::ImageUsageFlags::SAMPLED);
    let mut img = vk::Image::null();
    let result = unsafe { image::vkCreateImage(dev, &image_info, ptr::null(), &mut img) };
    assert_eq!(result, vk::Result::SUCCESS);

    let mut image_reqs = vk::MemoryRequirements::default();
    unsafe { image::vkGetImageMemoryRequirements(dev, img, &mut image_reqs) };
    assert_eq!(image_reqs.size, 16 * 16 * 32);
    assert_eq!(image_reqs.memory_type_bits & (1 << 3), 0);

    unsafe { image::vkDestroyImage(dev, img, ptr::null()) };
    assert_eq!(driver().image_size(dev, img), None);
    unsafe { memory::vkDestroyBuffer(dev, buffer, ptr::null()) };
    assert_eq!(driver().buffer(dev, buffer), None);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_swapchain_images() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let mut surface = vk::SurfaceKHR::null();
    let surface_info = vk::HeadlessSurfaceCreateInfoEXT::default();
    let result = unsafe {
        swapchain::vkCreateHeadlessSurfaceEXT(instance, &surface_info, ptr::null(), &mut surface)
    };
    assert_eq!(result, vk::Result::SUCCESS);

    let mut format_count = 0u32;
    unsafe {
        swapchain::vkGetPhysicalDeviceSurfaceFormatsKHR(pd, surface, &mut format_count, ptr::null_mut())
    };
    assert_eq!(format_count, 2);

    let ci = vk::SwapchainCreateInfoKHR::default().surface(surface).min_image_count(1);
    let mut sc = vk::SwapchainKHR::null();
    let result = unsafe { swapchain::vkCreateSwapchainKHR(dev, &ci, ptr::null(), &mut sc) };
    assert_eq!(result, vk::Result::SUCCESS);

    let mut count = 0u32;
    unsafe { swapchain::vkGetSwapchainImagesKHR(dev, sc, &mut count, ptr::null_mut()) };
    assert_eq!(count, 1);
    let mut images = [vk::Image::null(); 1];
    let result = unsafe { swapchain::vkGetSwapchainImagesKHR(dev, sc, &mut count, images.as_mut_ptr()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(!images[0].is_null());

    let mut index = u32::MAX;
    let result = unsafe {
        swapchain::vkAcquireNextImageKHR(dev, sc, u64::MAX, vk::Semaphore::null(), vk::Fence::null(), &mut index)
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(index, 0);

    unsafe { swapchain::vkDestroySwapchainKHR(dev, sc, ptr::null()) };
    assert!(driver().swapchain_images(sc).is_none());
    unsafe { swapchain::vkDestroySurfaceKHR(instance, surface, ptr::null()) };

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_command_buffers() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let pool_info = vk::CommandPoolCreateInfo::default().queue_family_index(0);
    let mut pool = vk::CommandPool::null();
    let result = unsafe { command::vkCreateCommandPool(dev, &pool_info, ptr::null(), &mut pool) };
    assert_eq!(result, vk::Result::SUCCESS);

    let alloc = vk::CommandBufferAllocateInfo::default()
        .command_pool(pool)
        .level(vk::CommandBufferLevel::PRIMARY)
        .command_buffer_count(3);
    let mut cbs = [vk::CommandBuffer::null(); 3];
    let result = unsafe { command::vkAllocateCommandBuffers(dev, &alloc, cbs.as_mut_ptr()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(driver().command_buffer_count(pool), 3);
    for cb in cbs {
        assert!(unsafe { DispatchableObject::has_loader_magic(cb) });
    }

    let begin = vk::CommandBufferBeginInfo::default();
    assert_eq!(unsafe { command::vkBeginCommandBuffer(cbs[0], &begin) }, vk::Result::SUCCESS);
    unsafe { command::vkCmdDispatch(cbs[0], 8, 8, 1) };
    assert_eq!(unsafe { command::vkEndCommandBuffer(cbs[0]) }, vk::Result::SUCCESS);

    unsafe { command::vkFreeCommandBuffers(dev, pool, 1, cbs.as_ptr()) };
    assert_eq!(driver().command_buffer_count(pool), 2);

    unsafe { command::vkDestroyCommandPool(dev, pool, ptr::null()) };
    assert_eq!(driver().command_buffer_count(pool), 0);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_stateless_objects() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let mut fence = vk::Fence::null();
    let fence_info = vk::FenceCreateInfo::default();
    assert_eq!(unsafe { sync::vkCreateFence(dev, &fence_info, ptr::null(), &mut fence) }, vk::Result::SUCCESS);
    assert_eq!(unsafe { sync::vkGetFenceStatus(dev, fence) }, vk::Result::SUCCESS);
    assert_eq!(
        unsafe { sync::vkWaitForFences(dev, 1, &fence, vk::TRUE, u64::MAX) },
        vk::Result::SUCCESS
    );

    let mut event = vk::Event::null();
    let event_info = vk::EventCreateInfo::default();
    assert_eq!(unsafe { sync::vkCreateEvent(dev, &event_info, ptr::null(), &mut event) }, vk::Result::SUCCESS);
    assert_eq!(unsafe { sync::vkGetEventStatus(dev, event) }, vk::Result::EVENT_SET);
    assert_ne!(fence.as_raw(), event.as_raw());

    let mut granularity = vk::Extent2D::default();
    unsafe { renderpass::vkGetRenderAreaGranularity(dev, vk::RenderPass::null(), &mut granularity) };
    assert_eq!(granularity, vk::Extent2D { width: 1, height: 1 });

    let layout_info = vk::DescriptorSetLayoutCreateInfo::default();
    let mut support = vk::DescriptorSetLayoutSupport::default();
    unsafe { descriptor::vkGetDescriptorSetLayoutSupport(dev, &layout_info, &mut support) };
    assert_eq!(support.supported, vk::TRUE);

    unsafe { sync::vkDestroyEvent(dev, event, ptr::null()) };
    unsafe { sync::vkDestroyFence(dev, fence, ptr::null()) };
    assert_eq!(driver().object_kind(fence.as_raw()), None);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_descriptor_pool_reset_frees_sets() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let pool_info = vk::DescriptorPoolCreateInfo::default().max_sets(4);
    let mut pool = vk::DescriptorPool::null();
    let result = unsafe { descriptor::vkCreateDescriptorPool(dev, &pool_info, ptr::null(), &mut pool) };
    assert_eq!(result, vk::Result::SUCCESS);

    let layouts = [vk::DescriptorSetLayout::null(); 2];
    let alloc = vk::DescriptorSetAllocateInfo::default()
        .descriptor_pool(pool)
        .set_layouts(&layouts);
    let mut sets = [vk::DescriptorSet::null(); 2];
    let result = unsafe { descriptor::vkAllocateDescriptorSets(dev, &alloc, sets.as_mut_ptr()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_ne!(sets[0], sets[1]);
    assert!(driver().object_kind(sets[0].as_raw()).is_some());

    let result = unsafe { descriptor::vkResetDescriptorPool(dev, pool, vk::DescriptorPoolResetFlags::empty()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(driver().object_kind(sets[0].as_raw()), None);
    assert_eq!(driver().object_kind(sets[1].as_raw()), None);
    assert!(driver().object_kind(pool.as_raw()).is_some());

    unsafe { descriptor::vkDestroyDescriptorPool(dev, pool, ptr::null()) };
    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_properties2_extension_structs() {
    let instance = create_instance();
    let pd = first_physical_device(instance);

    let mut conservative = vk::PhysicalDeviceConservativeRasterizationPropertiesEXT::default();
    let mut rt_pipeline = vk::PhysicalDeviceRayTracingPipelinePropertiesKHR::default();
    let mut rt_nv = vk::PhysicalDeviceRayTracingPropertiesNV::default();
    let mut descriptor_buffer = vk::PhysicalDeviceDescriptorBufferPropertiesEXT::default();
    let mut mesh = vk::PhysicalDeviceMeshShaderPropertiesEXT::default();
    let mut density_map2 = vk::PhysicalDeviceFragmentDensityMap2PropertiesEXT::default();
    let mut props2 = vk::PhysicalDeviceProperties2::default()
        .push_next(&mut conservative)
        .push_next(&mut rt_pipeline)
        .push_next(&mut rt_nv)
        .push_next(&mut descriptor_buffer)
        .push_next(&mut mesh)
        .push_next(&mut density_map2);
    unsafe { physical_device::vkGetPhysicalDeviceProperties2(pd, &mut props2) };
    assert_eq!(props2.properties.vendor_id, 0xba5eba11);

    assert!((conservative.primitive_overestimation_size - 0.001_953_13).abs() < 1e-6);
    assert_eq!(conservative.conservative_point_and_line_rasterization, vk::TRUE);
    assert_eq!(conservative.degenerate_triangles_rasterized, vk::TRUE);
    assert_eq!(conservative.degenerate_lines_rasterized, vk::TRUE);

    assert_eq!(rt_pipeline.shader_group_handle_size, 32);
    assert_eq!(rt_pipeline.shader_group_base_alignment, 64);
    assert_eq!(rt_pipeline.shader_group_handle_capture_replay_size, 32);
    assert_eq!(rt_nv.shader_group_handle_size, 32);
    assert_eq!(rt_nv.shader_group_base_alignment, 64);

    assert_eq!(descriptor_buffer.combined_image_sampler_descriptor_single_array, vk::TRUE);
    assert_eq!(descriptor_buffer.bufferless_push_descriptors, vk::TRUE);
    assert_eq!(descriptor_buffer.allow_sampler_image_view_post_submit_creation, vk::TRUE);
    assert_eq!(descriptor_buffer.descriptor_buffer_offset_alignment, 4);

    assert_eq!(mesh.mesh_output_per_vertex_granularity, 32);
    assert_eq!(mesh.mesh_output_per_primitive_granularity, 32);
    assert_eq!(mesh.prefers_compact_primitive_output, vk::TRUE);

    assert_eq!(density_map2.subsampled_loads, vk::FALSE);
    assert_eq!(density_map2.max_subsampled_array_layers, 2);
    assert_eq!(density_map2.max_descriptor_set_subsampled_samplers, 1);

    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_physical_device_extension_queries() {
    let instance = create_instance();
    let pd = first_physical_device(instance);

    let mut multisample = vk::MultisamplePropertiesEXT::default();
    unsafe {
        physical_device::vkGetPhysicalDeviceMultisamplePropertiesEXT(
            pd,
            vk::SampleCountFlags::TYPE_4,
            &mut multisample,
        )
    };
    assert_eq!(multisample.max_sample_location_grid_size, vk::Extent2D { width: 32, height: 32 });

    let mut count = 0u32;
    let result = unsafe {
        physical_device::vkGetPhysicalDeviceFragmentShadingRatesKHR(pd, &mut count, ptr::null_mut())
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(count, 1);
    let mut rate = vk::PhysicalDeviceFragmentShadingRateKHR::default();
    let result =
        unsafe { physical_device::vkGetPhysicalDeviceFragmentShadingRatesKHR(pd, &mut count, &mut rate) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(rate.fragment_size, vk::Extent2D { width: 8, height: 8 });
    assert_eq!(rate.sample_counts, vk::SampleCountFlags::TYPE_1 | vk::SampleCountFlags::TYPE_4);

    let mut domain_count = 0u32;
    unsafe {
        physical_device::vkGetPhysicalDeviceCalibrateableTimeDomainsKHR(pd, &mut domain_count, ptr::null_mut())
    };
    assert_eq!(domain_count, 1);
    let mut domain = vk::TimeDomainKHR::CLOCK_MONOTONIC;
    unsafe { physical_device::vkGetPhysicalDeviceCalibrateableTimeDomainsKHR(pd, &mut domain_count, &mut domain) };
    assert_eq!(domain, vk::TimeDomainKHR::DEVICE);

    let mut counter_count = 0u32;
    let result = unsafe {
        physical_device::vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR(
            pd,
            0,
            &mut counter_count,
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(counter_count, 3);

    let mut counters = vec![vk::PerformanceCounterKHR::default(); 3];
    let mut descriptions = vec![vk::PerformanceCounterDescriptionKHR::default(); 3];
    let mut short = 2u32;
    let result = unsafe {
        physical_device::vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR(
            pd,
            0,
            &mut short,
            counters.as_mut_ptr(),
            descriptions.as_mut_ptr(),
        )
    };
    assert_eq!(result, vk::Result::INCOMPLETE);
    assert_eq!(short, 2);
    assert_eq!(counters[1].scope, vk::PerformanceCounterScopeKHR::RENDER_PASS);
    assert_eq!(counters[1].uuid[0], 0x02);
    assert_eq!(descriptions[1].name_as_c_str().unwrap(), c"render pass counter");

    let result = unsafe {
        physical_device::vkEnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR(
            pd,
            0,
            &mut counter_count,
            counters.as_mut_ptr(),
            ptr::null_mut(),
        )
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(counters[0].scope, vk::PerformanceCounterScopeKHR::COMMAND_BUFFER);
    assert_eq!(counters[2].scope, vk::PerformanceCounterScopeKHR::COMMAND);
    assert!(counters
        .iter()
        .all(|c| c.unit == vk::PerformanceCounterUnitKHR::GENERIC
            && c.storage == vk::PerformanceCounterStorageKHR::INT32));

    let perf_info = vk::QueryPoolPerformanceCreateInfoKHR::default();
    let mut passes = 0u32;
    unsafe {
        physical_device::vkGetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR(pd, &perf_info, &mut passes)
    };
    assert_eq!(passes, 1);

    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_display_plane_surface() {
    let instance = create_instance();
    let pd = first_physical_device(instance);

    let mut count = 0u32;
    let result =
        unsafe { display::vkGetPhysicalDeviceDisplayPropertiesKHR(pd, &mut count, ptr::null_mut()) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(count, 1);
    let mut props = vk::DisplayPropertiesKHR::default();
    unsafe { display::vkGetPhysicalDeviceDisplayPropertiesKHR(pd, &mut count, &mut props) };
    assert!(!props.display.is_null());
    assert_eq!(props.physical_resolution, vk::Extent2D { width: 1920, height: 1080 });

    // The same display is reported on every query.
    let mut again = vk::DisplayPropertiesKHR::default();
    unsafe { display::vkGetPhysicalDeviceDisplayPropertiesKHR(pd, &mut count, &mut again) };
    assert_eq!(again.display, props.display);

    let mut plane = vk::DisplayPlanePropertiesKHR::default();
    let mut plane_count = 1u32;
    unsafe { display::vkGetPhysicalDeviceDisplayPlanePropertiesKHR(pd, &mut plane_count, &mut plane) };
    assert_eq!(plane.current_display, props.display);

    let mut supported = vk::DisplayKHR::null();
    let mut supported_count = 1u32;
    unsafe { display::vkGetDisplayPlaneSupportedDisplaysKHR(pd, 0, &mut supported_count, &mut supported) };
    assert_eq!(supported, props.display);

    let mut mode = vk::DisplayModePropertiesKHR::default();
    let mut mode_count = 1u32;
    let result =
        unsafe { display::vkGetDisplayModePropertiesKHR(pd, props.display, &mut mode_count, &mut mode) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(!mode.display_mode.is_null());
    assert_eq!(mode.parameters.refresh_rate, 60_000);

    let mut caps = vk::DisplayPlaneCapabilitiesKHR::default();
    let result =
        unsafe { display::vkGetDisplayPlaneCapabilitiesKHR(pd, mode.display_mode, 0, &mut caps) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(caps.supported_alpha.contains(vk::DisplayPlaneAlphaFlagsKHR::OPAQUE));

    let surface_info = vk::DisplaySurfaceCreateInfoKHR::default()
        .display_mode(mode.display_mode)
        .image_extent(mode.parameters.visible_region);
    let mut surface = vk::SurfaceKHR::null();
    let result = unsafe {
        display::vkCreateDisplayPlaneSurfaceKHR(instance, &surface_info, ptr::null(), &mut surface)
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert!(!surface.is_null());

    let mut present_support = vk::FALSE;
    unsafe { swapchain::vkGetPhysicalDeviceSurfaceSupportKHR(pd, 0, surface, &mut present_support) };
    assert_eq!(present_support, vk::TRUE);

    unsafe { swapchain::vkDestroySurfaceKHR(instance, surface, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_device_extension_answers() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let mut identifier = vk::ShaderModuleIdentifierEXT::default();
    unsafe { pipeline::vkGetShaderModuleIdentifierEXT(dev, vk::ShaderModule::null(), &mut identifier) };
    assert_eq!(identifier.identifier_size, 1);
    assert_eq!(identifier.identifier[0], 0x01);

    let mut layout_size: vk::DeviceSize = 0;
    unsafe {
        descriptor::vkGetDescriptorSetLayoutSizeEXT(dev, vk::DescriptorSetLayout::null(), &mut layout_size)
    };
    assert_eq!(layout_size, 4);

    let geometry = vk::AccelerationStructureBuildGeometryInfoKHR::default();
    let mut sizes = vk::AccelerationStructureBuildSizesInfoKHR::default();
    let max_primitives = [1u32];
    unsafe {
        acceleration::vkGetAccelerationStructureBuildSizesKHR(
            dev,
            vk::AccelerationStructureBuildTypeKHR::DEVICE,
            &geometry,
            max_primitives.as_ptr(),
            &mut sizes,
        )
    };
    assert_eq!(sizes.acceleration_structure_size, 4);
    assert_eq!(sizes.update_scratch_size, 4);
    assert_eq!(sizes.build_scratch_size, 4);

    let nv_info = vk::AccelerationStructureMemoryRequirementsInfoNV::default();
    let mut nv_reqs = vk::MemoryRequirements2::default();
    unsafe { acceleration::vkGetAccelerationStructureMemoryRequirementsNV(dev, &nv_info, &mut nv_reqs) };
    assert_eq!(nv_reqs.memory_requirements.size, 4096);
    assert_eq!(nv_reqs.memory_requirements.alignment, 1);
    assert_eq!(nv_reqs.memory_requirements.memory_type_bits, 0xFFFF);

    let as_info = vk::AccelerationStructureCreateInfoKHR::default().size(4);
    let mut accel = vk::AccelerationStructureKHR::null();
    let result = unsafe {
        acceleration::vkCreateAccelerationStructureKHR(dev, &as_info, ptr::null(), &mut accel)
    };
    assert_eq!(result, vk::Result::SUCCESS);
    let address_info = vk::AccelerationStructureDeviceAddressInfoKHR::default().acceleration_structure(accel);
    let address = unsafe { acceleration::vkGetAccelerationStructureDeviceAddressKHR(dev, &address_info) };
    assert_eq!(address % 256, 0);
    unsafe { acceleration::vkDestroyAccelerationStructureKHR(dev, accel, ptr::null()) };
    assert_eq!(driver().object_kind(accel.as_raw()), None);

    let fd_info = vk::MemoryGetFdInfoKHR::default();
    let mut fd: std::ffi::c_int = -1;
    assert_eq!(unsafe { memory::vkGetMemoryFdKHR(dev, &fd_info, &mut fd) }, vk::Result::SUCCESS);
    assert_eq!(fd, 1);

    let host = [0u8; 64];
    let mut host_props = vk::MemoryHostPointerPropertiesEXT::default();
    let result = unsafe {
        memory::vkGetMemoryHostPointerPropertiesEXT(
            dev,
            vk::ExternalMemoryHandleTypeFlags::HOST_ALLOCATION_EXT,
            host.as_ptr() as *const c_void,
            &mut host_props,
        )
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(host_props.memory_type_bits, 1 << 5);

    let infos = [
        vk::CalibratedTimestampInfoKHR::default().time_domain(vk::TimeDomainKHR::DEVICE),
        vk::CalibratedTimestampInfoKHR::default().time_domain(vk::TimeDomainKHR::CLOCK_MONOTONIC),
    ];
    let mut timestamps = [0u64; 2];
    let mut deviation = 0u64;
    let result = unsafe {
        sync::vkGetCalibratedTimestampsKHR(dev, 2, infos.as_ptr(), timestamps.as_mut_ptr(), &mut deviation)
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(timestamps[0], timestamps[1]);
    assert_eq!(deviation, 1);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_private_data_slots() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let info = vk::PrivateDataSlotCreateInfo::default();
    let mut slot = vk::PrivateDataSlot::null();
    let result = unsafe { device::vkCreatePrivateDataSlot(dev, &info, ptr::null(), &mut slot) };
    assert_eq!(result, vk::Result::SUCCESS);

    let object = dev.as_raw();
    let mut data = 7u64;
    unsafe { device::vkGetPrivateData(dev, vk::ObjectType::DEVICE, object, slot, &mut data) };
    assert_eq!(data, 0);

    let result = unsafe { device::vkSetPrivateData(dev, vk::ObjectType::DEVICE, object, slot, 0xc0ffee) };
    assert_eq!(result, vk::Result::SUCCESS);
    unsafe { device::vkGetPrivateData(dev, vk::ObjectType::DEVICE, object, slot, &mut data) };
    assert_eq!(data, 0xc0ffee);

    unsafe { device::vkDestroyPrivateDataSlot(dev, slot, ptr::null()) };
    let result = unsafe { device::vkSetPrivateData(dev, vk::ObjectType::DEVICE, object, slot, 1) };
    assert_eq!(result, vk::Result::ERROR_OUT_OF_HOST_MEMORY);

    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

#[test]
fn test_high_bit_depth_planar_image_requirements() {
    let instance = create_instance();
    let pd = first_physical_device(instance);
    let dev = create_device(pd);

    let image_info = vk::ImageCreateInfo::default()
        .image_type(vk::ImageType::TYPE_2D)
        .format(vk::Format::G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16)
        .extent(vk::Extent3D { width: 8, height: 8, depth: 1 })
        .mip_levels(1)
        .array_layers(1)
        .samples(vk::SampleCountFlags::TYPE_1);
    let mut img = vk::Image::null();
    let result = unsafe { image::vkCreateImage(dev, &image_info, ptr::null(), &mut img) };
    assert_eq!(result, vk::Result::SUCCESS);

    let mut reqs = vk::MemoryRequirements::default();
    unsafe { image::vkGetImageMemoryRequirements(dev, img, &mut reqs) };
    assert_eq!(reqs.size, 8 * 8 * 32 * 3);

    unsafe { image::vkDestroyImage(dev, img, ptr::null()) };
    unsafe { device::vkDestroyDevice(dev, ptr::null()) };
    unsafe { instance::vkDestroyInstance(instance, ptr::null()) };
}

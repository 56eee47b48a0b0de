//! The State Registry.
//!
//! `DriverState` owns every table that maps a live handle to host-side state,
//! all behind a single coarse lock. Tables are keyed by the handle the
//! consumer holds; a handle missing from its table was never created here
//! (or was already destroyed), and operations on such handles are no-ops.

use std::collections::HashMap;
use std::ffi::c_void;
use std::ptr::NonNull;

use ash::vk;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::caps;
use crate::config::MockConfig;
use crate::error::DriverError;
use crate::handles::{DispatchableObject, HandleAllocator};

/// First synthetic device address handed to a buffer.
pub const FIRST_BUFFER_ADDRESS: u64 = 0x10000;
/// Alignment of synthetic buffer addresses and host mappings.
pub const ADDRESS_ALIGNMENT: u64 = 64;

/// Kind tag of a non-dispatchable object that needs no state beyond its existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    BufferView,
    ImageView,
    Sampler,
    SamplerYcbcrConversion,
    ShaderModule,
    PipelineCache,
    PipelineLayout,
    Pipeline,
    DescriptorSetLayout,
    DescriptorPool,
    DescriptorSet,
    DescriptorUpdateTemplate,
    RenderPass,
    Framebuffer,
    Fence,
    Semaphore,
    Event,
    QueryPool,
    Surface,
    DisplayMode,
    PrivateDataSlot,
    AccelerationStructure,
}

/// What a buffer remembers from its `VkBufferCreateInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRecord {
    pub size: vk::DeviceSize,
    pub usage: vk::BufferUsageFlags,
    pub flags: vk::BufferCreateFlags,
    /// Synthetic, non-zero device address.
    pub address: vk::DeviceAddress,
}

/// Host allocation backing one `vkMapMemory` call.
struct HostMapping {
    ptr: NonNull<u8>,
    layout: std::alloc::Layout,
}

// Mappings are only touched under the registry lock.
unsafe impl Send for HostMapping {}

impl HostMapping {
    fn new(size: vk::DeviceSize) -> Result<Self, DriverError> {
        let bytes = usize::try_from(size.max(1)).map_err(|_| DriverError::OutOfHostMemory { size })?;
        let layout = std::alloc::Layout::from_size_align(bytes, ADDRESS_ALIGNMENT as usize)
            .map_err(|_| DriverError::OutOfHostMemory { size })?;
        let raw = unsafe { std::alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(DriverError::OutOfHostMemory { size })?;
        Ok(Self { ptr, layout })
    }
}

impl Drop for HostMapping {
    fn drop(&mut self) {
        unsafe { std::alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

struct DeviceRecord {
    queue: Option<vk::Queue>,
    buffers: HashMap<vk::Buffer, BufferRecord>,
    images: HashMap<vk::Image, vk::DeviceSize>,
}

impl DeviceRecord {
    fn new(queue: Option<vk::Queue>) -> Self {
        Self {
            queue,
            buffers: HashMap::new(),
            images: HashMap::new(),
        }
    }
}

struct CommandPoolRecord {
    device: vk::Device,
    buffers: Vec<vk::CommandBuffer>,
}

struct ObjectRecord {
    kind: ObjectKind,
    /// Pool the object was allocated from, if any.
    parent: Option<u64>,
}

/// The one display attached to a physical device and its native mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRecord {
    pub display: vk::DisplayKHR,
    pub mode: vk::DisplayModeKHR,
}

struct Tables {
    handles: HandleAllocator,
    loader_interface_version: u32,
    next_buffer_address: u64,
    instances: HashMap<vk::Instance, Vec<vk::PhysicalDevice>>,
    devices: HashMap<vk::Device, DeviceRecord>,
    memory_sizes: HashMap<vk::DeviceMemory, vk::DeviceSize>,
    mappings: HashMap<vk::DeviceMemory, Vec<HostMapping>>,
    swapchains: HashMap<vk::SwapchainKHR, Vec<vk::Image>>,
    command_pools: HashMap<vk::CommandPool, CommandPoolRecord>,
    objects: HashMap<u64, ObjectRecord>,
    /// Keyed by (slot, object handle).
    private_data: HashMap<(u64, u64), u64>,
    displays: HashMap<vk::PhysicalDevice, DisplayRecord>,
}

impl Tables {
    fn new() -> Self {
        Self {
            handles: HandleAllocator::new(),
            loader_interface_version: 0,
            next_buffer_address: FIRST_BUFFER_ADDRESS,
            instances: HashMap::new(),
            devices: HashMap::new(),
            memory_sizes: HashMap::new(),
            mappings: HashMap::new(),
            swapchains: HashMap::new(),
            command_pools: HashMap::new(),
            objects: HashMap::new(),
            private_data: HashMap::new(),
            displays: HashMap::new(),
        }
    }

    fn dispatchable<H: vk::Handle>(&mut self) -> Result<H, DriverError> {
        let id = self.handles.alloc()?;
        Ok(DispatchableObject::create(id))
    }

    fn non_dispatchable<H: vk::Handle>(&mut self) -> Result<H, DriverError> {
        Ok(H::from_raw(self.handles.alloc()?))
    }

    fn release_command_buffers(buffers: Vec<vk::CommandBuffer>) {
        for cb in buffers {
            // Only command buffers recorded in a pool reach this point.
            unsafe { DispatchableObject::destroy(cb) };
        }
    }
}

/// Every table the driver keeps, behind one lock, plus the immutable
/// configuration the capability answers are derived from.
pub struct DriverState {
    config: MockConfig,
    tables: Mutex<Tables>,
}

impl DriverState {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            tables: Mutex::new(Tables::new()),
        }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    // ── Loader negotiation ──────────────────────────────────

    /// Agree on a loader interface version and remember it.
    pub fn negotiate_interface_version(&self, requested: u32) -> Result<u32, DriverError> {
        if requested < caps::MIN_ICD_INTERFACE_VERSION {
            return Err(DriverError::IncompatibleDriver {
                requested,
                minimum: caps::MIN_ICD_INTERFACE_VERSION,
            });
        }
        let version = std::cmp::min(requested, caps::ICD_INTERFACE_VERSION);
        self.tables.lock().loader_interface_version = version;
        info!("negotiated loader interface version {}", version);
        Ok(version)
    }

    /// The negotiated interface version, 0 if negotiation never happened.
    pub fn loader_interface_version(&self) -> u32 {
        self.tables.lock().loader_interface_version
    }

    /// Draw a raw value from the handle counter.
    pub fn alloc_handle(&self) -> Result<u64, DriverError> {
        self.tables.lock().handles.alloc()
    }

    // ── Instances and physical devices ──────────────────────

    /// Create an instance together with its physical device set.
    pub fn create_instance(&self) -> Result<vk::Instance, DriverError> {
        let mut tables = self.tables.lock();
        let instance: vk::Instance = tables.dispatchable()?;
        let mut physical_devices: Vec<vk::PhysicalDevice> = Vec::with_capacity(caps::PHYSICAL_DEVICE_COUNT);
        for _ in 0..caps::PHYSICAL_DEVICE_COUNT {
            match tables.dispatchable() {
                Ok(pd) => physical_devices.push(pd),
                Err(e) => {
                    for pd in physical_devices {
                        unsafe { DispatchableObject::destroy(pd) };
                    }
                    unsafe { DispatchableObject::destroy(instance) };
                    return Err(e);
                }
            }
        }
        tables.instances.insert(instance, physical_devices);
        debug!("created instance {:?}", instance);
        Ok(instance)
    }

    /// Destroy an instance and its physical devices. Unknown handles are ignored.
    pub fn destroy_instance(&self, instance: vk::Instance) {
        let mut tables = self.tables.lock();
        let removed = tables.instances.remove(&instance);
        if let Some(physical_devices) = removed {
            for pd in physical_devices {
                tables.displays.remove(&pd);
                unsafe { DispatchableObject::destroy(pd) };
            }
            unsafe { DispatchableObject::destroy(instance) };
            debug!("destroyed instance {:?}", instance);
        }
    }

    /// Physical devices of an instance; empty for unknown instances.
    pub fn physical_devices(&self, instance: vk::Instance) -> Vec<vk::PhysicalDevice> {
        self.tables
            .lock()
            .instances
            .get(&instance)
            .cloned()
            .unwrap_or_default()
    }

    pub fn instance_count(&self) -> usize {
        self.tables.lock().instances.len()
    }

    // ── Devices and queues ──────────────────────────────────

    /// Create a logical device and, atomically with it, its single queue.
    pub fn create_device(&self, physical_device: vk::PhysicalDevice) -> Result<vk::Device, DriverError> {
        let mut tables = self.tables.lock();
        let device: vk::Device = tables.dispatchable()?;
        let queue = match tables.dispatchable::<vk::Queue>() {
            Ok(queue) => queue,
            Err(e) => {
                unsafe { DispatchableObject::destroy(device) };
                return Err(e);
            }
        };
        tables.devices.insert(
            device,
            DeviceRecord::new(Some(queue)),
        );
        debug!("created device {:?} on {:?}", device, physical_device);
        Ok(device)
    }

    /// Destroy a device with its queue, its buffer and image records and the
    /// command buffers of its pools.
    pub fn destroy_device(&self, device: vk::Device) {
        let mut tables = self.tables.lock();
        let Some(record) = tables.devices.remove(&device) else {
            return;
        };
        if let Some(queue) = record.queue {
            unsafe { DispatchableObject::destroy(queue) };
        }
        let pools: Vec<vk::CommandPool> = tables
            .command_pools
            .iter()
            .filter(|(_, pool)| pool.device == device)
            .map(|(handle, _)| *handle)
            .collect();
        for pool in pools {
            if let Some(record) = tables.command_pools.remove(&pool) {
                Tables::release_command_buffers(record.buffers);
            }
        }
        unsafe { DispatchableObject::destroy(device) };
        debug!("destroyed device {:?}", device);
    }

    pub fn device_exists(&self, device: vk::Device) -> bool {
        self.tables.lock().devices.contains_key(&device)
    }

    /// Give a device its queue. A device owns exactly one queue, created
    /// with the device, so asking again is an error.
    pub fn create_queue(&self, device: vk::Device) -> Result<vk::Queue, DriverError> {
        let mut tables = self.tables.lock();
        let has_queue = match tables.devices.get(&device) {
            Some(record) => record.queue.is_some(),
            None => false,
        };
        if has_queue {
            return Err(DriverError::QueueAlreadyCreated(device));
        }
        let queue: vk::Queue = tables.dispatchable()?;
        match tables.devices.get_mut(&device) {
            Some(record) => record.queue = Some(queue),
            None => {
                tables.devices.insert(device, DeviceRecord::new(Some(queue)));
            }
        }
        Ok(queue)
    }

    /// The queue at (`family`, `index`). Only family 0, index 0 exists.
    pub fn queue(&self, device: vk::Device, family: u32, index: u32) -> Option<vk::Queue> {
        if family != 0 || index != 0 {
            warn!(
                "queue family {} index {} requested, only family 0 index 0 exists",
                family, index
            );
            return None;
        }
        self.tables.lock().devices.get(&device).and_then(|r| r.queue)
    }

    // ── Device memory ───────────────────────────────────────

    pub fn allocate_memory(&self, size: vk::DeviceSize) -> Result<vk::DeviceMemory, DriverError> {
        let mut tables = self.tables.lock();
        let memory: vk::DeviceMemory = tables.non_dispatchable()?;
        tables.memory_sizes.insert(memory, size);
        debug!("allocated {} bytes as {:?}", size, memory);
        Ok(memory)
    }

    /// Requested size of a live allocation.
    pub fn memory_size(&self, memory: vk::DeviceMemory) -> Option<vk::DeviceSize> {
        self.tables.lock().memory_sizes.get(&memory).copied()
    }

    /// Back a mapping with fresh zeroed host memory and record it.
    ///
    /// `VK_WHOLE_SIZE` maps the rest of the allocation from `offset`, or
    /// 64 KiB when the allocation is not tracked.
    pub fn map_memory(
        &self,
        memory: vk::DeviceMemory,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
    ) -> Result<*mut c_void, DriverError> {
        let mut tables = self.tables.lock();
        let size = if size == vk::WHOLE_SIZE {
            match tables.memory_sizes.get(&memory) {
                Some(allocated) => allocated.saturating_sub(offset),
                None => caps::UNKNOWN_MAPPING_SIZE,
            }
        } else {
            size
        };
        let mapping = HostMapping::new(size)?;
        let ptr = mapping.ptr.as_ptr() as *mut c_void;
        tables.mappings.entry(memory).or_default().push(mapping);
        Ok(ptr)
    }

    /// Release every outstanding mapping of `memory`.
    pub fn unmap_memory(&self, memory: vk::DeviceMemory) {
        let released = self.tables.lock().mappings.remove(&memory);
        drop(released);
    }

    pub fn mapping_count(&self, memory: vk::DeviceMemory) -> usize {
        self.tables.lock().mappings.get(&memory).map_or(0, Vec::len)
    }

    /// Free an allocation, unmapping it first.
    pub fn free_memory(&self, memory: vk::DeviceMemory) {
        let mut tables = self.tables.lock();
        tables.mappings.remove(&memory);
        if tables.memory_sizes.remove(&memory).is_some() {
            debug!("freed {:?}", memory);
        }
    }

    // ── Buffers and images ──────────────────────────────────

    pub fn create_buffer(
        &self,
        device: vk::Device,
        create_info: &vk::BufferCreateInfo<'_>,
    ) -> Result<(vk::Buffer, BufferRecord), DriverError> {
        let mut tables = self.tables.lock();
        let buffer: vk::Buffer = tables.non_dispatchable()?;
        let address = tables.next_buffer_address;
        tables.next_buffer_address = address
            .saturating_add(create_info.size.max(1))
            .saturating_add(ADDRESS_ALIGNMENT - 1)
            & !(ADDRESS_ALIGNMENT - 1);
        let record = BufferRecord {
            size: create_info.size,
            usage: create_info.usage,
            flags: create_info.flags,
            address,
        };
        tables
            .devices
            .entry(device)
            .or_insert_with(|| DeviceRecord::new(None))
            .buffers
            .insert(buffer, record);
        debug!("created buffer {:?} ({} bytes)", buffer, create_info.size);
        Ok((buffer, record))
    }

    pub fn buffer(&self, device: vk::Device, buffer: vk::Buffer) -> Option<BufferRecord> {
        self.tables
            .lock()
            .devices
            .get(&device)
            .and_then(|r| r.buffers.get(&buffer))
            .copied()
    }

    pub fn destroy_buffer(&self, device: vk::Device, buffer: vk::Buffer) -> Option<BufferRecord> {
        self.tables
            .lock()
            .devices
            .get_mut(&device)
            .and_then(|r| r.buffers.remove(&buffer))
    }

    /// Create an image whose memory requirements will report `size`.
    pub fn create_image(&self, device: vk::Device, size: vk::DeviceSize) -> Result<vk::Image, DriverError> {
        let mut tables = self.tables.lock();
        let image: vk::Image = tables.non_dispatchable()?;
        tables
            .devices
            .entry(device)
            .or_insert_with(|| DeviceRecord::new(None))
            .images
            .insert(image, size);
        debug!("created image {:?} ({} bytes)", image, size);
        Ok(image)
    }

    pub fn image_size(&self, device: vk::Device, image: vk::Image) -> Option<vk::DeviceSize> {
        self.tables
            .lock()
            .devices
            .get(&device)
            .and_then(|r| r.images.get(&image))
            .copied()
    }

    pub fn destroy_image(&self, device: vk::Device, image: vk::Image) -> Option<vk::DeviceSize> {
        self.tables
            .lock()
            .devices
            .get_mut(&device)
            .and_then(|r| r.images.remove(&image))
    }

    // ── Swapchains ──────────────────────────────────────────

    pub fn create_swapchain(&self) -> Result<vk::SwapchainKHR, DriverError> {
        let mut tables = self.tables.lock();
        let swapchain: vk::SwapchainKHR = tables.non_dispatchable()?;
        let mut images = Vec::with_capacity(caps::SWAPCHAIN_IMAGE_COUNT);
        for _ in 0..caps::SWAPCHAIN_IMAGE_COUNT {
            images.push(tables.non_dispatchable()?);
        }
        tables.swapchains.insert(swapchain, images);
        debug!("created swapchain {:?}", swapchain);
        Ok(swapchain)
    }

    pub fn swapchain_images(&self, swapchain: vk::SwapchainKHR) -> Option<Vec<vk::Image>> {
        self.tables.lock().swapchains.get(&swapchain).cloned()
    }

    /// Remove one swapchain; other swapchains keep their images.
    pub fn destroy_swapchain(&self, swapchain: vk::SwapchainKHR) {
        self.tables.lock().swapchains.remove(&swapchain);
    }

    // ── Command pools and buffers ───────────────────────────

    pub fn create_command_pool(&self, device: vk::Device) -> Result<vk::CommandPool, DriverError> {
        let mut tables = self.tables.lock();
        let pool: vk::CommandPool = tables.non_dispatchable()?;
        tables.command_pools.insert(
            pool,
            CommandPoolRecord {
                device,
                buffers: Vec::new(),
            },
        );
        Ok(pool)
    }

    /// Destroy a pool along with the command buffers still allocated from it.
    pub fn destroy_command_pool(&self, pool: vk::CommandPool) {
        let removed = self.tables.lock().command_pools.remove(&pool);
        if let Some(record) = removed {
            Tables::release_command_buffers(record.buffers);
        }
    }

    /// Allocate `count` dispatchable command buffers from `pool`.
    pub fn allocate_command_buffers(
        &self,
        pool: vk::CommandPool,
        count: u32,
    ) -> Result<Vec<vk::CommandBuffer>, DriverError> {
        let mut tables = self.tables.lock();
        let mut allocated = Vec::with_capacity(count as usize);
        for _ in 0..count {
            match tables.dispatchable() {
                Ok(cb) => allocated.push(cb),
                Err(e) => {
                    Tables::release_command_buffers(allocated);
                    return Err(e);
                }
            }
        }
        let pool_record = tables.command_pools.entry(pool).or_insert_with(|| CommandPoolRecord {
            device: vk::Device::null(),
            buffers: Vec::new(),
        });
        pool_record.buffers.extend_from_slice(&allocated);
        Ok(allocated)
    }

    /// Free command buffers of `pool`. Buffers the pool does not own are skipped.
    pub fn free_command_buffers(&self, pool: vk::CommandPool, buffers: &[vk::CommandBuffer]) {
        let mut released = Vec::new();
        {
            let mut tables = self.tables.lock();
            let Some(record) = tables.command_pools.get_mut(&pool) else {
                return;
            };
            for cb in buffers {
                if let Some(pos) = record.buffers.iter().position(|owned| owned == cb) {
                    released.push(record.buffers.swap_remove(pos));
                }
            }
        }
        Tables::release_command_buffers(released);
    }

    pub fn command_buffer_count(&self, pool: vk::CommandPool) -> usize {
        self.tables
            .lock()
            .command_pools
            .get(&pool)
            .map_or(0, |r| r.buffers.len())
    }

    // ── Other objects ───────────────────────────────────────

    pub fn create_object(&self, kind: ObjectKind) -> Result<u64, DriverError> {
        self.create_object_in(kind, None)
    }

    /// Create an object owned by `parent` (a descriptor set in its pool, say).
    pub fn create_object_in(&self, kind: ObjectKind, parent: Option<u64>) -> Result<u64, DriverError> {
        let mut tables = self.tables.lock();
        let raw = tables.handles.alloc()?;
        tables.objects.insert(raw, ObjectRecord { kind, parent });
        debug!("created {:?} {:#x}", kind, raw);
        Ok(raw)
    }

    pub fn object_kind(&self, raw: u64) -> Option<ObjectKind> {
        self.tables.lock().objects.get(&raw).map(|r| r.kind)
    }

    /// Remove an object and everything allocated from it.
    pub fn destroy_object(&self, raw: u64) -> Option<ObjectKind> {
        let mut tables = self.tables.lock();
        let record = tables.objects.remove(&raw)?;
        tables.objects.retain(|_, child| child.parent != Some(raw));
        if record.kind == ObjectKind::PrivateDataSlot {
            tables.private_data.retain(|(slot, _), _| *slot != raw);
        }
        debug!("destroyed {:?} {:#x}", record.kind, raw);
        Some(record.kind)
    }

    /// Remove every object allocated from `parent`, keeping `parent` itself.
    pub fn reset_children(&self, parent: u64) {
        self.tables
            .lock()
            .objects
            .retain(|_, child| child.parent != Some(parent));
    }
}

impl DriverState {
    // ── Private data ────────────────────────────────────────

    /// Store `data` for `object` in `slot`. Fails for slots that were never created.
    pub fn set_private_data(&self, slot: u64, object: u64, data: u64) -> Result<(), DriverError> {
        let mut tables = self.tables.lock();
        match tables.objects.get(&slot) {
            Some(record) if record.kind == ObjectKind::PrivateDataSlot => {
                tables.private_data.insert((slot, object), data);
                Ok(())
            }
            _ => Err(DriverError::UnknownPrivateDataSlot(slot)),
        }
    }

    /// Data last stored for `object` in `slot`, 0 if nothing was stored.
    pub fn private_data(&self, slot: u64, object: u64) -> u64 {
        self.tables
            .lock()
            .private_data
            .get(&(slot, object))
            .copied()
            .unwrap_or(0)
    }

    // ── Displays ────────────────────────────────────────────

    /// The display of `physical_device`, attached on first query.
    pub fn display(&self, physical_device: vk::PhysicalDevice) -> Result<DisplayRecord, DriverError> {
        let mut tables = self.tables.lock();
        if let Some(record) = tables.displays.get(&physical_device) {
            return Ok(*record);
        }
        let record = DisplayRecord {
            display: tables.non_dispatchable()?,
            mode: tables.non_dispatchable()?,
        };
        tables.displays.insert(physical_device, record);
        debug!("attached display {:?} to {:?}", record.display, physical_device);
        Ok(record)
    }
}

impl Default for DriverState {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

//! Handle allocation.
//!
//! Every object the driver hands out draws a fresh value from one counter.
//! Non-dispatchable handles are that value itself. Dispatchable handles
//! (VkInstance, VkPhysicalDevice, VkDevice, VkQueue, VkCommandBuffer) are
//! pointers to a heap object whose first pointer-sized slot the Vulkan
//! loader inspects and later overwrites with its dispatch table.

use ash::vk;

use crate::error::DriverError;

/// The ICD loader magic value. The loader expects this in new dispatchable handles.
pub const ICD_LOADER_MAGIC: usize = 0x01CDC0DE;

/// Monotonic handle counter. Starts at 1 so no handle is ever VK_NULL_HANDLE.
#[derive(Debug)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return a value greater than every value returned before.
    pub fn alloc(&mut self) -> Result<u64, DriverError> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(DriverError::HandlesExhausted)?;
        Ok(id)
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Backing object of a dispatchable handle.
#[repr(C)]
#[derive(Debug)]
pub struct DispatchableObject {
    /// Loader magic until the loader overwrites it with its dispatch table pointer.
    loader_data: usize,
    /// Value drawn from the handle counter.
    id: u64,
}

impl DispatchableObject {
    /// Allocate a tagged object and return it as a handle of type `H`.
    pub fn create<H: vk::Handle>(id: u64) -> H {
        let ptr = Box::into_raw(Box::new(Self {
            loader_data: ICD_LOADER_MAGIC,
            id,
        }));
        H::from_raw(ptr as u64)
    }

    /// Counter value stored behind a dispatchable handle.
    ///
    /// # Safety
    /// `handle` must have been returned by [`DispatchableObject::create`] and
    /// not destroyed yet.
    pub unsafe fn id<H: vk::Handle>(handle: H) -> u64 {
        (*(handle.as_raw() as *const Self)).id
    }

    /// Whether the loader slot still holds the magic value.
    ///
    /// # Safety
    /// Same contract as [`DispatchableObject::id`].
    pub unsafe fn has_loader_magic<H: vk::Handle>(handle: H) -> bool {
        (*(handle.as_raw() as *const Self)).loader_data == ICD_LOADER_MAGIC
    }

    /// Free the object behind a dispatchable handle. Null handles are ignored.
    ///
    /// # Safety
    /// `handle` must have been returned by [`DispatchableObject::create`] and
    /// must not be used afterwards.
    pub unsafe fn destroy<H: vk::Handle>(handle: H) {
        let raw = handle.as_raw();
        if raw != 0 {
            drop(Box::from_raw(raw as *mut Self));
        }
    }
}

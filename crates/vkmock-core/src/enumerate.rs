//! The Vulkan two-call enumeration idiom, implemented once.
//!
//! With a null output pointer only the count is written. Otherwise
//! `min(*p_count, available)` items are written, `*p_count` is updated to
//! that number and `VK_INCOMPLETE` is returned iff items were left out.

use std::ffi::{c_char, CStr};

use ash::vk;

use crate::error::DriverError;

/// Enumerate a slice of plain values.
///
/// # Safety
/// `p_count` must be valid for reads and writes. When `p_out` is non-null it
/// must point to at least `*p_count` writable elements.
pub unsafe fn enumerate<T: Copy>(items: &[T], p_count: *mut u32, p_out: *mut T) -> vk::Result {
    enumerate_with(items.len(), p_count, p_out, |i, slot| *slot = items[i])
}

/// Enumerate `available` items produced on demand by `fill`.
///
/// `fill(i, slot)` writes item `i` into `slot`. Used where the output
/// structs carry a caller-owned `pNext` that must be preserved.
///
/// # Safety
/// Same contract as [`enumerate`].
pub unsafe fn enumerate_with<T, F>(
    available: usize,
    p_count: *mut u32,
    p_out: *mut T,
    mut fill: F,
) -> vk::Result
where
    F: FnMut(usize, &mut T),
{
    if p_count.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }
    if p_out.is_null() {
        *p_count = available as u32;
        return vk::Result::SUCCESS;
    }

    let requested = *p_count as usize;
    let count = std::cmp::min(requested, available);
    for i in 0..count {
        fill(i, &mut *p_out.add(i));
    }
    *p_count = count as u32;

    if count < available {
        vk::Result::INCOMPLETE
    } else {
        vk::Result::SUCCESS
    }
}

/// Enumerate a driver extension list.
///
/// Drivers are never asked for a layer's extensions; a non-null layer name
/// yields zero properties and `VK_ERROR_LAYER_NOT_PRESENT`.
///
/// # Safety
/// `p_layer_name` is null or a NUL-terminated string; the count and output
/// pointers follow [`enumerate`].
pub unsafe fn enumerate_extensions(
    supported: &[vk::ExtensionProperties],
    p_layer_name: *const c_char,
    p_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    if !p_layer_name.is_null() {
        let layer = CStr::from_ptr(p_layer_name).to_string_lossy().into_owned();
        let err = DriverError::LayerNotPresent(layer);
        tracing::error!("{}", err);
        if !p_count.is_null() {
            *p_count = 0;
        }
        return err.to_vk_result();
    }
    enumerate(supported, p_count, p_properties)
}

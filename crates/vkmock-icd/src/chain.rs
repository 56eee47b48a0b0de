//! pNext chain lookups.

use std::ffi::c_void;

use ash::vk;

/// First struct of type `T` in an output chain.
///
/// # Safety
/// `p_next` must be null or the head of a well-formed chain whose nodes
/// outlive `'a`.
pub unsafe fn find_out<'a, T: vk::TaggedStructure>(p_next: *mut c_void) -> Option<&'a mut T> {
    let mut node = p_next as *mut vk::BaseOutStructure<'_>;
    while !node.is_null() {
        if (*node).s_type == T::STRUCTURE_TYPE {
            return Some(&mut *(node as *mut T));
        }
        node = (*node).p_next;
    }
    None
}

/// First struct of type `T` in an input chain.
///
/// # Safety
/// Same contract as [`find_out`].
pub unsafe fn find_in<'a, T: vk::TaggedStructure>(p_next: *const c_void) -> Option<&'a T> {
    let mut node = p_next as *const vk::BaseInStructure<'_>;
    while !node.is_null() {
        if (*node).s_type == T::STRUCTURE_TYPE {
            return Some(&*(node as *const T));
        }
        node = (*node).p_next;
    }
    None
}

/// Whether the chain holds exactly one struct, of type `T`.
///
/// # Safety
/// Same contract as [`find_out`].
pub unsafe fn is_lone<T: vk::TaggedStructure>(p_next: *const c_void) -> bool {
    let node = p_next as *const vk::BaseInStructure<'_>;
    !node.is_null() && (*node).s_type == T::STRUCTURE_TYPE && (*node).p_next.is_null()
}

/// Visit every node of an output chain.
///
/// # Safety
/// Same contract as [`find_out`].
pub unsafe fn for_each_out(p_next: *mut c_void, mut visit: impl FnMut(*mut vk::BaseOutStructure<'_>)) {
    let mut node = p_next as *mut vk::BaseOutStructure<'_>;
    while !node.is_null() {
        let next = (*node).p_next;
        visit(node);
        node = next;
    }
}

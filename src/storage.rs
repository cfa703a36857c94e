use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use crate::error::{ErrorKind, ShapeError};

/// An array's backing allocation.
///
/// *Don't use this type directly — use [`Array`](crate::Array), which
/// shares one `Storage` between all handles that alias a buffer.*
// Like a Vec, but the length is fixed at construction and the allocation
// is handed out element by element through raw pointers.
#[derive(Debug)]
pub struct Storage<A> {
    ptr: NonNull<A>,
    len: usize,
    capacity: usize,
}

impl<A> Storage<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let capacity = v.capacity();
        // Vec never hands out a null data pointer
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Self { ptr, len, capacity }
    }

    pub(crate) fn as_slice(&self) -> &[A] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Base pointer of the allocation.
    ///
    /// Dangling (but well aligned) when `len` is zero, like a `Vec`'s.
    pub(crate) const fn base_ptr(&self) -> NonNull<A> {
        self.ptr
    }
}

impl<A> Drop for Storage<A> {
    fn drop(&mut self) {
        if self.capacity > 0 {
            // drop as a Vec
            unsafe {
                Vec::from_raw_parts(self.ptr.as_ptr(), self.len, self.capacity);
            }
        }
    }
}

/// Request a buffer for `n` elements from the allocator.
///
/// Failure is surfaced as `ErrorKind::AllocationFailure`, distinguishable
/// from the shape errors of the operation that requested the buffer.
pub(crate) fn alloc_vec<A>(n: usize) -> Result<Vec<A>, ShapeError> {
    let mut v = Vec::new();
    v.try_reserve_exact(n)
        .map_err(|_| ShapeError::from_kind(ErrorKind::AllocationFailure))?;
    Ok(v)
}

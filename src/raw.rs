use alloc::{
    alloc::{Layout, alloc},
    boxed::Box,
};
use core::ptr::NonNull;

use crate::error::QueueError;

/// Moves `value` to the heap, reporting allocation failure instead of aborting.
pub(crate) fn try_box<T>(value: T) -> Result<NonNull<T>, QueueError> {
    const { assert!(size_of::<T>() != 0, "zero-sized values are not boxed here") };

    let layout = Layout::new::<T>();
    let ptr = NonNull::new(unsafe { alloc(layout) }.cast::<T>()).ok_or(QueueError::AllocationFailed)?;
    unsafe { ptr.as_ptr().write(value) };
    Ok(ptr)
}

/// Takes back ownership of a value allocated by [`try_box`].
///
/// # Safety
///
/// `ptr` must come from [`try_box`] and must not be used afterwards.
pub(crate) unsafe fn unbox<T>(ptr: NonNull<T>) -> Box<T> {
    // `try_box` allocates with the global allocator and `Layout::new::<T>()`,
    // which is exactly what `Box` expects.
    unsafe { Box::from_raw(ptr.as_ptr()) }
}

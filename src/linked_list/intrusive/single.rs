use alloc::{boxed::Box, ffi::CString, vec::Vec};
use core::{ffi::CStr, ptr::NonNull};

use cstr_queue_derive::Node;

use crate::{
    error::QueueError,
    raw::{try_box, unbox},
};

/// A node holding one owned, NUL-terminated value.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct QueueNode {
    link: SingleLink<QueueNode>,
    data: CString,
}

impl QueueNode {
    /// Creates an unlinked node owning `value`.
    pub fn new(value: CString) -> Self {
        Self {
            link: SingleLink::new(),
            data: value,
        }
    }

    /// The value held by this node.
    #[inline]
    pub fn value(&self) -> &CStr {
        &self.data
    }

    /// Allocates an unlinked node on the heap holding a copy of `bytes`.
    ///
    /// `bytes` must not contain a NUL; the terminator is appended here. On
    /// failure nothing stays allocated.
    pub(crate) fn try_alloc(bytes: &[u8]) -> Result<NonNull<Self>, QueueError> {
        let value = copy_value(bytes)?;
        try_box(Self::new(value))
    }

    /// Frees a detached heap node and hands back its value.
    ///
    /// # Safety
    ///
    /// `node` must come from [`QueueNode::try_alloc`], be detached from any
    /// chain, and not be used afterwards.
    pub(crate) unsafe fn release(node: NonNull<Self>) -> CString {
        let node: Box<Self> = unsafe { unbox(node) };
        node.data
    }
}

fn copy_value(bytes: &[u8]) -> Result<CString, QueueError> {
    debug_assert!(!bytes.contains(&0));
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes.len() + 1)
        .map_err(|_| QueueError::AllocationFailed)?;
    buf.extend_from_slice(bytes);
    buf.push(0);
    // SAFETY: `bytes` holds no NUL and exactly one was pushed at the end.
    Ok(unsafe { CString::from_vec_with_nul_unchecked(buf) })
}

/// A link in a singly linked chain of `T`.
#[derive(Debug)]
pub struct SingleLink<T> {
    next: Option<NonNull<T>>,
}

impl<T> SingleLink<T> {
    pub const fn new() -> Self {
        Self { next: None }
    }

    #[inline]
    pub fn next(&self) -> Option<NonNull<T>> {
        self.next
    }

    #[inline]
    pub fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.next = next;
    }
}

impl<T> Default for SingleLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SingleLink<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SingleLink<T> {}

//! Queue operations on possibly absent handles.
//!
//! Each function mirrors a [`Queue`] method but accepts an `Option`, for
//! callers that keep queues behind nullable handles. A missing queue is
//! reported as [`QueueError::InvalidArgument`] where an instance is required,
//! reads as size 0, and makes `reverse`, `sort` and `destroy` no-ops.

use alloc::boxed::Box;
use core::ffi::CStr;

use crate::{
    error::{QueueError, Result},
    queue::Queue,
    raw::{try_box, unbox},
};

fn require<'a>(queue: Option<&'a mut Queue>, operation: &'static str) -> Result<&'a mut Queue> {
    queue.ok_or_else(|| {
        tracing::debug!(operation, "queue operation on a missing queue");
        QueueError::InvalidArgument
    })
}

/// Allocates an empty queue on the heap.
pub fn create() -> Result<Box<Queue>> {
    let queue = try_box(Queue::new()).inspect_err(|_| tracing::debug!("queue allocation failed"))?;
    Ok(unsafe { unbox(queue) })
}

/// Releases every element of `queue`, then the queue itself.
pub fn destroy(queue: Option<Box<Queue>>) {
    drop(queue);
}

pub fn insert_head(queue: Option<&mut Queue>, value: &CStr) -> Result<()> {
    require(queue, "insert_head")?.insert_head(value)
}

pub fn insert_tail(queue: Option<&mut Queue>, value: &CStr) -> Result<()> {
    require(queue, "insert_tail")?.insert_tail(value)
}

/// See [`Queue::remove_head`] for how `buf` is filled.
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Result<()> {
    require(queue, "remove_head")?.remove_head(buf)
}

pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::len)
}

pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}

//! A queue behind a single spin lock.
//!
//! Every operation holds the lock for its whole duration. The queue itself
//! stays lock-free; this wrapper is for callers that share it across threads.

use alloc::ffi::CString;
use core::ffi::CStr;

use spin::{Mutex, MutexGuard};

use crate::{error::Result, queue::Queue};

#[derive(Default)]
pub struct LockedQueue {
    inner: Mutex<Queue>,
}

impl LockedQueue {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Queue::new()),
        }
    }

    /// Locks the queue for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, Queue> {
        self.inner.lock()
    }

    pub fn insert_head(&self, value: &CStr) -> Result<()> {
        self.lock().insert_head(value)
    }

    pub fn insert_tail(&self, value: &CStr) -> Result<()> {
        self.lock().insert_tail(value)
    }

    pub fn remove_head(&self, buf: Option<&mut [u8]>) -> Result<()> {
        self.lock().remove_head(buf)
    }

    pub fn pop_head(&self) -> Option<CString> {
        self.lock().pop_head()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn reverse(&self) {
        self.lock().reverse();
    }

    pub fn sort(&self) {
        self.lock().sort();
    }

    pub fn into_inner(self) -> Queue {
        self.inner.into_inner()
    }
}

impl From<Queue> for LockedQueue {
    fn from(queue: Queue) -> Self {
        Self {
            inner: Mutex::new(queue),
        }
    }
}

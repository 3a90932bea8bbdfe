//! An owning queue of NUL-terminated strings on top of a singly linked chain.

use alloc::ffi::CString;
use core::{ffi::CStr, fmt, ptr::NonNull};

use tracing::{debug, trace};

use crate::{
    error::{QueueError, Result},
    linked_list::intrusive::{
        chain,
        iter::ChainIter,
        single::QueueNode,
        traits::{Link, Node},
    },
};

/// A FIFO/LIFO queue of owned C strings.
///
/// The queue exclusively owns every node reachable from `head`. `tail` is kept
/// so that appends run in constant time, and `len` so that size queries do.
///
/// Invariants:
/// - `len == 0` iff `head` is `None` iff `tail` is `None`.
/// - With one element, `head == tail` and its next pointer is `None`.
/// - Otherwise `tail` is reached from `head` in `len - 1` steps and its next
///   pointer is `None`.
pub struct Queue {
    head: Option<NonNull<QueueNode>>,
    tail: Option<NonNull<QueueNode>>,
    len: usize,
}

impl Queue {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Inserts a copy of `value` at the head. O(1).
    pub fn insert_head(&mut self, value: &CStr) -> Result<()> {
        self.insert_head_raw(value.to_bytes())
    }

    /// Inserts a copy of `value` at the tail. O(1).
    pub fn insert_tail(&mut self, value: &CStr) -> Result<()> {
        self.insert_tail_raw(value.to_bytes())
    }

    /// Inserts at the head the bytes of `buf` up to its first NUL (or all of
    /// them if it has none).
    pub fn insert_head_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.insert_head_raw(until_nul(buf))
    }

    /// Inserts at the tail the bytes of `buf` up to its first NUL (or all of
    /// them if it has none).
    pub fn insert_tail_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.insert_tail_raw(until_nul(buf))
    }

    fn head_link(&mut self) -> HeadLink<'_> {
        HeadLink {
            head: &mut self.head,
        }
    }

    fn insert_head_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let node = QueueNode::try_alloc(bytes).inspect_err(|e| log_failure("insert_head", e))?;
        unsafe { QueueNode::append_to(node, &mut self.head_link()) };
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    fn insert_tail_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let node = QueueNode::try_alloc(bytes).inspect_err(|e| log_failure("insert_tail", e))?;
        match self.tail {
            Some(mut tail) => unsafe { QueueNode::append_to(node, tail.as_mut()) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Removes the head element, optionally copying its value into `buf`.
    ///
    /// At most `buf.len() - 1` bytes of the value are copied, followed by its
    /// terminator if it fits, and `buf[buf.len() - 1]` is always set to NUL.
    /// Bytes past the copied terminator are left untouched. An empty `buf`
    /// receives nothing.
    ///
    /// Fails with [`QueueError::Empty`] on an empty queue.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<()> {
        let Some(value) = self.pop_head() else {
            let e = QueueError::Empty;
            log_failure("remove_head", &e);
            return Err(e);
        };
        if let Some(buf) = buf {
            copy_truncated(&value, buf);
        }
        Ok(())
    }

    /// Removes the head element and returns its value.
    pub fn pop_head(&mut self) -> Option<CString> {
        let mut head = self.head?;
        unsafe { head.as_mut().detach(&mut self.head_link()) };
        self.len -= 1;
        if self.len == 0 {
            self.tail = None;
        }
        Some(unsafe { QueueNode::release(head) })
    }

    /// The value at the head, if any.
    pub fn peek_head(&self) -> Option<&CStr> {
        self.head.map(|head| unsafe { head.as_ref() }.value())
    }

    /// The value at the tail, if any.
    pub fn peek_tail(&self) -> Option<&CStr> {
        self.tail.map(|tail| unsafe { tail.as_ref() }.value())
    }

    /// Number of elements. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reverses the order of the elements in place.
    ///
    /// Only next pointers are rewired; every value stays in its node.
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }
        trace!(len = self.len, "reversing queue");
        let old_head = self.head;
        self.head = unsafe { chain::reverse(self.head) };
        self.tail = old_head;
    }

    /// Sorts the elements in ascending byte order, keeping equal elements in
    /// their current relative order.
    ///
    /// Merge sort over the chain itself: no node is allocated or freed.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }
        trace!(len = self.len, "sorting queue");
        self.head = unsafe { chain::merge_sort(self.head) };
        self.tail = self.head.map(|head| unsafe { chain::last(head) });
    }

    /// Releases every element, leaving the queue empty.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: unsafe { ChainIter::new(self.head, self.len) },
        }
    }
}

/// The head slot of a queue seen as a link, so nodes attach to and detach
/// from the head exactly as they do after another node.
struct HeadLink<'a> {
    head: &'a mut Option<NonNull<QueueNode>>,
}

impl Link for HeadLink<'_> {
    type Target = QueueNode;

    fn next(&self) -> Option<NonNull<QueueNode>> {
        *self.head
    }

    fn set_next(&mut self, next: Option<NonNull<QueueNode>>) {
        *self.head = next;
    }
}

fn until_nul(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

fn copy_truncated(value: &CStr, buf: &mut [u8]) {
    let Some(last) = buf.len().checked_sub(1) else {
        return;
    };
    let src = value.to_bytes_with_nul();
    let n = src.len().min(last);
    buf[..n].copy_from_slice(&src[..n]);
    buf[last] = 0;
}

fn log_failure(operation: &'static str, error: &QueueError) {
    debug!(operation, %error, "queue operation failed");
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Appends each value at the tail, stopping at the first failed insert.
impl<'a> Extend<&'a CStr> for Queue {
    fn extend<I: IntoIterator<Item = &'a CStr>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.insert_tail(value) {
                log_failure("extend", &e);
                break;
            }
        }
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a CStr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a [`Queue`], head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    inner: ChainIter<'a, QueueNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CStr;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(QueueNode::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

unsafe impl Send for Queue {}

//! A singly linked queue of owned, NUL-terminated strings.
//!
//! [`Queue`] supports constant-time insertion at both ends, removal at the
//! head, size queries, in-place reversal and a stable merge sort that only
//! rewires links.
//!
//! ```
//! use cstr_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail(c"banana").unwrap();
//! queue.insert_tail(c"apple").unwrap();
//! queue.insert_head(c"cherry").unwrap();
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), [c"apple", c"banana", c"cherry"]);
//!
//! queue.reverse();
//! let mut buf = [0u8; 4];
//! queue.remove_head(Some(&mut buf[..])).unwrap();
//! assert_eq!(&buf, b"che\0");
//! assert_eq!(queue.len(), 2);
//! ```
#![no_std]

extern crate alloc;

pub mod error;
pub mod handle;
pub mod linked_list;
#[cfg(feature = "locked")]
pub mod locked;
pub mod queue;
mod raw;

pub use error::{QueueError, Result};
#[cfg(feature = "locked")]
pub use locked::LockedQueue;
pub use queue::Queue;

#[cfg(test)]
mod tests;

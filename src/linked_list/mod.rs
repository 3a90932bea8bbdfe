//! A singly linked chain of owned nodes.
//!
//! Each node embeds its own link, a `SingleLink`, next to the data it holds.
//! Nodes are linked through raw pointers and the owning list decides when
//! they are allocated and freed.
//!
//! # Examples
//!
//! ```
//! use cstr_queue::linked_list::intrusive::{
//!     chain,
//!     single::QueueNode,
//!     traits::{Link, Node},
//! };
//! use core::ptr::NonNull;
//!
//! let [b, a, c] = [c"b", c"a", c"c"]
//!     .map(|value| NonNull::from(Box::leak(Box::new(QueueNode::new(value.into())))));
//!
//! unsafe {
//!     QueueNode::append_to(a, &mut *b.as_ptr());
//!     QueueNode::append_to(c, &mut *a.as_ptr());
//!
//!     let head = chain::merge_sort(Some(b));
//!     let mut current = head;
//!     let mut values = vec![];
//!     while let Some(node) = current {
//!         let node_ref = node.as_ref();
//!         values.push(node_ref.value().to_str().unwrap());
//!         current = node_ref.next();
//!     }
//!     assert_eq!(values, vec!["a", "b", "c"]);
//!
//!     for node in [a, b, c] {
//!         drop(Box::from_raw(node.as_ptr()));
//!     }
//! }
//! ```
pub mod intrusive;

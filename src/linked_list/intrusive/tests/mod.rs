extern crate std;

use alloc::{ffi::CString, vec::Vec};
use core::{ffi::CStr, ptr::NonNull};

use super::{iter::ChainIter, single::QueueNode, traits::Node};

mod single;

/// Allocates one unlinked heap node per value.
fn alloc_nodes(values: &[&CStr]) -> Vec<NonNull<QueueNode>> {
    values
        .iter()
        .map(|value| QueueNode::try_alloc(value.to_bytes()).unwrap())
        .collect()
}

/// Links the nodes in slice order and returns the head.
unsafe fn link_all(nodes: &[NonNull<QueueNode>]) -> Option<NonNull<QueueNode>> {
    for pair in nodes.windows(2) {
        unsafe { QueueNode::append_to(pair[1], &mut *pair[0].as_ptr()) };
    }
    nodes.first().copied()
}

unsafe fn free_all(nodes: Vec<NonNull<QueueNode>>) {
    for node in nodes {
        unsafe { QueueNode::release(node) };
    }
}

unsafe fn values(head: Option<NonNull<QueueNode>>, len: usize) -> Vec<CString> {
    unsafe { ChainIter::new(head, len) }
        .map(|node: &QueueNode| CString::from(node.value()))
        .collect()
}

fn owned(values: &[&CStr]) -> Vec<CString> {
    values.iter().map(|value| CString::from(*value)).collect()
}

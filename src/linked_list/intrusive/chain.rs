//! Algorithms on raw chains of nodes.
//!
//! A chain is a run of nodes linked through [`Link::next`](super::traits::Link::next) and terminated by
//! `None`. Every function here only rewires next pointers: no node is
//! allocated, freed, or has its data moved, so each node keeps its value.
//!
//! # Safety
//!
//! All functions require that every pointer reachable from the given heads
//! is valid, that the chain is acyclic, and that nothing else accesses the
//! nodes for the duration of the call.

use core::ptr::NonNull;

use super::traits::{Node, NodeWithData};

/// Reverses the chain starting at `head` in place and returns the new head.
pub unsafe fn reverse<T: Node>(head: Option<NonNull<T>>) -> Option<NonNull<T>> {
    let mut prev = None;
    let mut current = head;
    while let Some(mut node) = current {
        let node_ref = unsafe { node.as_mut() };
        current = node_ref.next();
        node_ref.set_next(prev);
        prev = Some(node);
    }
    prev
}

/// Returns the last node of the chain starting at `head`.
pub unsafe fn last<T: Node>(head: NonNull<T>) -> NonNull<T> {
    let mut current = head;
    while let Some(next) = unsafe { current.as_ref().next() } {
        current = next;
    }
    current
}

/// Cuts the chain after its midpoint and returns the head of the second half.
///
/// A slow pointer advances one node for every two the fast pointer advances;
/// the chain is cut right after the slow pointer. The first half gets the
/// extra node when the length is odd.
pub unsafe fn split_middle<T: Node>(head: NonNull<T>) -> Option<NonNull<T>> {
    let mut slow = head;
    let mut fast = head;
    loop {
        let Some(step) = (unsafe { fast.as_ref().next() }) else {
            break;
        };
        let Some(step) = (unsafe { step.as_ref().next() }) else {
            break;
        };
        let Some(next) = (unsafe { slow.as_ref().next() }) else {
            break;
        };
        slow = next;
        fast = step;
    }

    let slow = unsafe { slow.as_mut() };
    let second = slow.next();
    slow.set_next(None);
    second
}

/// Pops the smaller of the two chain heads, preferring `left` on ties.
unsafe fn take_lesser<T>(
    left: &mut Option<NonNull<T>>,
    right: &mut Option<NonNull<T>>,
) -> Option<NonNull<T>>
where
    T: NodeWithData,
    T::Data: Ord,
{
    let from_left = match (*left, *right) {
        (Some(l), Some(r)) => unsafe { l.as_ref().data() <= r.as_ref().data() },
        (Some(_), None) => true,
        (None, _) => false,
    };
    let side = if from_left { left } else { right };
    let node = (*side)?;
    *side = unsafe { node.as_ref().next() };
    Some(node)
}

/// Merges two sorted chains into one sorted chain and returns its head.
///
/// Equal elements from `left` come before those from `right`.
pub unsafe fn merge<T>(mut left: Option<NonNull<T>>, mut right: Option<NonNull<T>>) -> Option<NonNull<T>>
where
    T: NodeWithData,
    T::Data: Ord,
{
    let head = unsafe { take_lesser(&mut left, &mut right) }?;
    let mut tail = head;
    while left.is_some() && right.is_some() {
        let Some(next) = (unsafe { take_lesser(&mut left, &mut right) }) else {
            break;
        };
        unsafe { tail.as_mut().set_next(Some(next)) };
        tail = next;
    }
    unsafe { tail.as_mut().set_next(left.or(right)) };
    Some(head)
}

/// Stable top-down merge sort of the chain starting at `head`.
///
/// Returns the new head. Recursion depth is logarithmic in the chain length.
pub unsafe fn merge_sort<T>(head: Option<NonNull<T>>) -> Option<NonNull<T>>
where
    T: NodeWithData,
    T::Data: Ord,
{
    let head = head?;
    if unsafe { head.as_ref().next() }.is_none() {
        return Some(head);
    }

    let right = unsafe { split_middle(head) };
    let left = unsafe { merge_sort(Some(head)) };
    let right = unsafe { merge_sort(right) };
    unsafe { merge(left, right) }
}

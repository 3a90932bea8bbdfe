use core::{marker::PhantomData, ptr::NonNull};

use super::traits::Node;

/// An iterator over a chain of nodes.
pub struct ChainIter<'a, T: Node> {
    current: Option<NonNull<T>>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> ChainIter<'a, T>
where
    T: Node,
{
    /// Creates a new iterator over the chain starting at `head`.
    ///
    /// # Safety
    ///
    /// The chain must hold exactly `len` valid nodes and must not be modified
    /// while the iterator is alive.
    pub unsafe fn new(head: Option<NonNull<T>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for ChainIter<'a, T>
where
    T: Node + 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        let node = unsafe { current.as_ref() };
        self.current = node.next();
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for ChainIter<'a, T> where T: Node + 'a {}

impl<'a, T> Clone for ChainIter<'a, T>
where
    T: Node,
{
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

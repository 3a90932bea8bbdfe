use core::ptr::NonNull;

/// A trait for a link in a linked list.
///
/// Both nodes and the owning list implement it: for a list, `next` is the
/// head slot, so a node can be attached after either in the same way.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node in a singly linked chain.
pub trait Node: Link<Target = Self> {
    /// Attach `this` right after `parent`, taking over its old successor.
    ///
    /// The pointer stored in `parent` is `this` itself, so it stays valid for
    /// as long as the allocation behind `this` does.
    ///
    /// # Safety
    ///
    /// `this` must point to a live node that is not part of any chain and is
    /// not borrowed elsewhere for the duration of the call.
    #[inline]
    unsafe fn append_to<L>(this: NonNull<Self>, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        unsafe { (*this.as_ptr()).set_next(parent.next()) };
        parent.set_next(Some(this));
    }

    /// Detach the node from the chain, leaving it unlinked.
    ///
    /// # Safety
    ///
    /// `parent` must be the link whose next pointer is this node, either the
    /// preceding node or the list holding this node as its head.
    #[inline]
    unsafe fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        parent.set_next(self.next());
        self.set_next(None);
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}

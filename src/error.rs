//! Error types for queue operations

use thiserror::Error;

/// Result type for queue operations
pub type Result<T> = core::result::Result<T, QueueError>;

/// Queue errors
///
/// A failed operation always leaves the queue exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A queue handle was required but none was given.
    #[error("Invalid argument: no queue")]
    InvalidArgument,

    /// Allocating a node, a value copy or a queue failed.
    #[error("Allocation failed")]
    AllocationFailed,

    /// Removal was requested on a queue with no elements.
    #[error("Queue is empty")]
    Empty,
}

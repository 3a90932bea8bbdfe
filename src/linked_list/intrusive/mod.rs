//! # Intrusive Singly Linked Chains
//!
//! The building blocks under [`Queue`](crate::queue::Queue).
//!
//! ## Core Components
//!
//! - [`traits`]: `Link`, `Node` and `NodeWithData`, the next-relation abstraction.
//! - [`single::SingleLink`]: the next pointer embedded in every node.
//! - [`single::QueueNode`]: a node owning one C string, derived with `#[derive(Node)]`.
//! - [`chain`]: in-place reversal and stable merge sort over raw chains.
//! - [`iter::ChainIter`]: a borrowing iterator over a chain.
//!
//! ## Safety
//!
//! Chains are raw `NonNull` pointer graphs. Code handling them must uphold:
//!
//! - Every node is owned by exactly one list and is in at most one chain.
//! - A chain is acyclic and terminated by `None`.
//! - When iterating, the chain must not be modified.
//! - When detaching a node, the given parent must be the link pointing at it.

pub mod chain;
pub mod iter;
pub mod single;
pub mod traits;

#[cfg(test)]
mod tests;

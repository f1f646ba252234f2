//! Intrusive Red-Black Priority Queue for Rust
//!
//! This crate provides a max-priority queue that stores nothing of its own:
//! the caller owns every node and describes it through a capability trait
//! ([`PriorityQueueOps`]) exposing the node's tree fields and a priority
//! comparison. The queue is an augmentation layer over the intrusive
//! red-black tree engine in the `intrusive-rbtree` crate.
//!
//! # Features
//!
//! - **O(1) peek**: the highest-priority node is cached and kept exact through
//!   every insertion, removal and rebalancing step
//! - **O(log n) insert and pop**: balancing is delegated to the red-black tree
//! - **Conditional pop**: [`pop_max_if`](RedBlackPriorityQueue::pop_max_if)
//!   inspects the maximum and pops it in one call
//! - **Zero allocation**: nodes can be arena keys, indices or pointers to an
//!   embedded [`RbLink`]
//! - **Arena storage** (`arena-storage` feature, on by default): a ready-made
//!   slotmap node store, [`PriorityArena`], and the [`ArenaQueue`] alias
//!
//! # Example
//!
//! ```rust
//! use rb_priority_queue::{ArenaQueue, QueueError};
//!
//! let mut queue = ArenaQueue::default();
//! queue.push(2, "write report");
//! queue.push(5, "fix outage");
//! queue.push(1, "water plants");
//!
//! assert_eq!(queue.peek(), Some((&5, &"fix outage")));
//! assert_eq!(queue.pop(), Some((5, "fix outage")));
//!
//! queue.clear();
//! assert!(queue.is_empty());
//! assert_eq!(queue.try_pop_max(), Err(QueueError::Empty));
//! ```

#[cfg(feature = "arena-storage")]
pub mod arena;
pub mod queue;
pub mod traits;

// Re-export the main types for convenience
#[cfg(feature = "arena-storage")]
pub use arena::{ArenaNode, ArenaQueue, NodeKey, PriorityArena, TieBreak};
pub use intrusive_rbtree::{
    container_of, container_of_mut, Color, RbLink, RbTree, RbTreeOps, TreeViolation,
};
pub use queue::{ConditionalPop, Iter, RedBlackPriorityQueue};
pub use traits::{PriorityQueueOps, QueueError, QueueViolation};

//! Intrusive max-priority queue on top of a red-black tree
//!
//! Nodes are kept in a binary search tree ordered by priority: the left
//! subtree of a node holds equal or lower priorities, the right subtree equal
//! or higher ones. The highest priority is therefore the rightmost node, and
//! the queue caches it so that peeking is a field read.
//!
//! Balancing is delegated to [`RbTree`]. Rotations never change the in-order
//! sequence of a tree, so they never move the rightmost node, and the cache
//! only needs attention on insertion and removal.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `peek_max`   | O(1)       |
//! | `pop_max`    | O(log n)   |
//! | `pop_max_if` | O(log n)   |
//! | `clear`      | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rb_priority_queue::{ArenaQueue, ConditionalPop};
//!
//! let mut queue = ArenaQueue::default();
//! for (priority, name) in [(3, "c"), (1, "a"), (4, "d")] {
//!     queue.push(priority, name);
//! }
//!
//! assert_eq!(queue.peek(), Some((&4, &"d")));
//!
//! // Only pop when the maximum clears a threshold.
//! let max = queue.pop_max_if(|arena, node| *arena.priority(node) > 10);
//! assert!(matches!(max, Some(ConditionalPop::Kept(_))));
//!
//! assert_eq!(queue.pop(), Some((4, "d")));
//! assert_eq!(queue.pop(), Some((3, "c")));
//! assert_eq!(queue.pop(), Some((1, "a")));
//! assert_eq!(queue.pop(), None);
//! ```

use crate::traits::{PriorityQueueOps, QueueError, QueueViolation};
use intrusive_rbtree::{RbTree, RbTreeOps};
use std::fmt;
use std::iter::FusedIterator;

/// Outcome of [`RedBlackPriorityQueue::pop_max_if`].
///
/// Both variants carry the node that was the maximum when the predicate ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalPop<N> {
    /// The predicate accepted the node and it was unlinked.
    Popped(N),
    /// The predicate rejected the node; it is still the maximum.
    Kept(N),
}

impl<N: Copy> ConditionalPop<N> {
    /// The node the predicate was evaluated on.
    #[inline]
    pub fn node(&self) -> N {
        match *self {
            ConditionalPop::Popped(node) | ConditionalPop::Kept(node) => node,
        }
    }

    /// Returns true if the node was unlinked.
    #[inline]
    pub fn is_popped(&self) -> bool {
        matches!(self, ConditionalPop::Popped(_))
    }

    /// The node, only if it was unlinked.
    #[inline]
    pub fn popped(self) -> Option<N> {
        match self {
            ConditionalPop::Popped(node) => Some(node),
            ConditionalPop::Kept(_) => None,
        }
    }
}

/// Intrusive max-priority queue over caller-owned nodes.
///
/// The queue stores no data inside nodes beyond their tree fields, and never
/// allocates or frees one. A node may be linked into at most one queue at a
/// time; inserting a node that is already linked corrupts the queue and is
/// not checked in release builds.
///
/// Not thread-safe: concurrent use needs external synchronization.
pub struct RedBlackPriorityQueue<O: PriorityQueueOps> {
    tree: RbTree<O>,
    /// Rightmost node of `tree`, `None` iff the tree is empty.
    max: Option<O::Node>,
    len: usize,
}

impl<O: PriorityQueueOps> RedBlackPriorityQueue<O> {
    /// Creates an empty queue driven by `ops`.
    pub fn new(ops: O) -> Self {
        Self {
            tree: RbTree::new(ops),
            max: None,
            len: 0,
        }
    }

    /// Shared access to the node capabilities.
    #[inline]
    pub fn ops(&self) -> &O {
        self.tree.ops()
    }

    /// Mutable access to the node capabilities.
    ///
    /// Use it to create or inspect nodes. Changing the tree fields or the
    /// priority of a linked node through it corrupts the queue.
    #[inline]
    pub fn ops_mut(&mut self) -> &mut O {
        self.tree.ops_mut()
    }

    /// Consumes the queue and returns the node capabilities.
    pub fn into_ops(self) -> O {
        self.tree.into_ops()
    }

    /// Root of the underlying search tree, for diagnostic traversal.
    ///
    /// Right children have higher priority, left children the same or lower.
    #[inline]
    pub fn bst_root(&self) -> Option<O::Node> {
        self.tree.root()
    }

    /// Number of linked nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no node is linked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max.is_none()
    }

    /// Returns true if at least one node is linked.
    #[inline]
    pub fn is_not_empty(&self) -> bool {
        self.max.is_some()
    }

    /// Returns the highest-priority node without unlinking it.
    #[inline]
    pub fn peek_max(&self) -> Option<O::Node> {
        self.max
    }

    /// Returns the highest-priority node, or [`QueueError::Empty`].
    #[inline]
    pub fn try_peek_max(&self) -> Result<O::Node, QueueError> {
        self.max.ok_or(QueueError::Empty)
    }

    /// Links an unlinked `node` into the queue.
    ///
    /// The node's own parent and child fields are overwritten; its color is
    /// chosen by the tree. A node whose priority ties with linked nodes is
    /// routed according to [`PriorityQueueOps::has_higher_priority`].
    pub fn insert(&mut self, node: O::Node) {
        debug_assert!(
            !self.ops().is_same(node, self.max),
            "node {node:?} is already the maximum of this queue"
        );

        let ops = self.tree.ops_mut();
        ops.set_left(node, None);
        ops.set_right(node, None);

        let Some(root) = self.tree.root() else {
            self.tree.ops_mut().set_parent(node, None);
            self.tree.set_root(Some(node));
            self.tree.balance_after_linking(node);
            self.max = Some(node);
            self.len = 1;
            log::trace!("inserted {node:?} into empty queue");
            return;
        };

        let mut parent = root;
        loop {
            let ops = self.tree.ops_mut();
            if ops.has_higher_priority(node, parent) {
                if let Some(next) = ops.right(parent) {
                    parent = next;
                    continue;
                }
                ops.set_right(parent, Some(node));
                // Only the old maximum has a free right slot on the right spine.
                if ops.is_same(parent, self.max) {
                    self.max = Some(node);
                }
            } else {
                if let Some(next) = ops.left(parent) {
                    parent = next;
                    continue;
                }
                ops.set_left(parent, Some(node));
            }
            ops.set_parent(node, Some(parent));
            break;
        }

        self.tree.balance_after_linking(node);
        self.len += 1;
        log::trace!("inserted {node:?} under {parent:?}, len {}", self.len);
    }

    /// Unlinks and returns the highest-priority node.
    pub fn pop_max(&mut self) -> Option<O::Node> {
        let node = self.max?;
        Some(self.unlink_max(node))
    }

    /// Unlinks and returns the highest-priority node, or
    /// [`QueueError::Empty`].
    pub fn try_pop_max(&mut self) -> Result<O::Node, QueueError> {
        let node = self.try_peek_max()?;
        Ok(self.unlink_max(node))
    }

    /// Evaluates `predicate` once on the current maximum and unlinks it only
    /// if the predicate returns true.
    ///
    /// Returns `None` without calling `predicate` if the queue is empty.
    /// Otherwise the maximum is returned either way, wrapped in
    /// [`ConditionalPop`] to tell whether it was removed.
    pub fn pop_max_if<F>(&mut self, predicate: F) -> Option<ConditionalPop<O::Node>>
    where
        F: FnOnce(&O, O::Node) -> bool,
    {
        let node = self.max?;
        if predicate(self.tree.ops(), node) {
            Some(ConditionalPop::Popped(self.unlink_max(node)))
        } else {
            Some(ConditionalPop::Kept(node))
        }
    }

    /// Forgets every node in O(1).
    ///
    /// Detached nodes are neither visited nor modified; their tree fields are
    /// stale until they are inserted again.
    pub fn clear(&mut self) {
        log::debug!("clearing priority queue of {} nodes", self.len);
        self.tree.clear();
        self.max = None;
        self.len = 0;
    }

    /// Iterates over linked nodes from the highest priority down.
    pub fn iter(&self) -> Iter<'_, O> {
        Iter {
            tree: &self.tree,
            next: self.max,
            remaining: self.len,
        }
    }

    /// Checks every queue invariant.
    ///
    /// Covers the red-black rules and links (through [`RbTree::validate`]),
    /// priority order, the cached maximum being the rightmost node, and the
    /// length counter. O(n); meant for tests and debugging.
    pub fn validate(&self) -> Result<(), QueueViolation<O::Node>> {
        let counted = self.tree.validate()?;
        if counted != self.len {
            return Err(QueueViolation::LengthMismatch {
                counted,
                recorded: self.len,
            });
        }

        let rightmost = self.tree.last();
        if rightmost != self.max {
            return Err(QueueViolation::StaleMaximum {
                cached: self.max,
                rightmost,
            });
        }

        let ops = self.tree.ops();
        let mut cursor = self.tree.first();
        while let Some(node) = cursor {
            let next = self.tree.next(node);
            if let Some(next) = next {
                if ops.has_higher_priority(node, next) && !ops.has_higher_priority(next, node) {
                    return Err(QueueViolation::OutOfOrder {
                        higher: node,
                        lower: next,
                    });
                }
            }
            cursor = next;
        }
        Ok(())
    }

    /// Unlinks the cached maximum `node`.
    fn unlink_max(&mut self, node: O::Node) -> O::Node {
        // The maximum is the last node in order, so its replacement is its
        // in-order predecessor: the parent, or the single red left child when
        // there is one. Rebalancing keeps the order, so this can be read
        // before unlinking.
        self.max = self.tree.prev(node);
        self.tree.unlink(node);
        self.len -= 1;
        log::trace!("popped {node:?}, new max {:?}, len {}", self.max, self.len);
        node
    }
}

impl<O: PriorityQueueOps + Default> Default for RedBlackPriorityQueue<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: PriorityQueueOps + fmt::Debug> fmt::Debug for RedBlackPriorityQueue<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackPriorityQueue")
            .field("len", &self.len)
            .field("max", &self.max)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<'a, O: PriorityQueueOps> IntoIterator for &'a RedBlackPriorityQueue<O> {
    type Item = O::Node;
    type IntoIter = Iter<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Descending-priority iterator returned by [`RedBlackPriorityQueue::iter`].
pub struct Iter<'a, O: PriorityQueueOps> {
    tree: &'a RbTree<O>,
    next: Option<O::Node>,
    remaining: usize,
}

impl<O: PriorityQueueOps> Iterator for Iter<'_, O> {
    type Item = O::Node;

    fn next(&mut self) -> Option<O::Node> {
        let node = self.next?;
        self.next = self.tree.prev(node);
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<O: PriorityQueueOps> ExactSizeIterator for Iter<'_, O> {}

impl<O: PriorityQueueOps> FusedIterator for Iter<'_, O> {}

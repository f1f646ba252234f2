//! Capability trait and error type for the priority queue
//!
//! - [`PriorityQueueOps`]: the node capability set a caller implements. It
//!   extends the tree engine's [`RbTreeOps`] with a priority comparison.
//! - [`QueueError`]: the single runtime failure, an empty queue.
//! - [`QueueViolation`]: a broken invariant found by
//!   [`RedBlackPriorityQueue::validate`](crate::RedBlackPriorityQueue::validate).

use intrusive_rbtree::{RbTreeOps, TreeViolation};
use std::fmt;

/// Error type for priority queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue has no nodes
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Broken queue invariant reported by
/// [`RedBlackPriorityQueue::validate`](crate::RedBlackPriorityQueue::validate)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueViolation<N> {
    /// The underlying red-black tree is malformed
    Tree(TreeViolation<N>),
    /// `higher` sits before `lower` in order although it has strictly higher priority
    OutOfOrder {
        /// The node with the strictly higher priority
        higher: N,
        /// Its in-order successor
        lower: N,
    },
    /// The cached maximum is not the rightmost node
    StaleMaximum {
        /// What the queue reports as its maximum
        cached: Option<N>,
        /// The actual rightmost node
        rightmost: Option<N>,
    },
    /// The length counter disagrees with the number of reachable nodes
    LengthMismatch {
        /// Nodes reachable from the root
        counted: usize,
        /// The queue's counter
        recorded: usize,
    },
}

impl<N> From<TreeViolation<N>> for QueueViolation<N> {
    fn from(violation: TreeViolation<N>) -> Self {
        QueueViolation::Tree(violation)
    }
}

impl<N: fmt::Debug> fmt::Display for QueueViolation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueViolation::Tree(violation) => write!(f, "tree violation: {violation}"),
            QueueViolation::OutOfOrder { higher, lower } => {
                write!(f, "{higher:?} precedes lower-priority {lower:?}")
            }
            QueueViolation::StaleMaximum { cached, rightmost } => {
                write!(f, "cached maximum {cached:?} is not the rightmost node {rightmost:?}")
            }
            QueueViolation::LengthMismatch { counted, recorded } => {
                write!(f, "{counted} nodes reachable but length is {recorded}")
            }
        }
    }
}

impl<N: fmt::Debug> std::error::Error for QueueViolation<N> {}

/// Node capabilities needed by [`RedBlackPriorityQueue`](crate::RedBlackPriorityQueue)
///
/// On top of the tree accessors and hooks of [`RbTreeOps`], a queue needs to
/// know how two nodes compare.
///
/// # Contract
///
/// `has_higher_priority` must be a consistent total preorder over every node
/// linked into the same queue at the same time: no cycles, transitive, and
/// stable while the node is linked. Breaking this corrupts the queue; it is
/// not checked.
///
/// # Ties
///
/// Insertion descends right whenever `has_higher_priority(new, existing)`
/// returns true. Returning `true` for equal priorities therefore pops the most
/// recently inserted of equal nodes first (LIFO); a strict comparison pops the
/// earliest first (FIFO).
///
/// # Example
///
/// ```rust
/// use rb_priority_queue::{Color, PriorityQueueOps, RbTreeOps, RedBlackPriorityQueue};
///
/// #[derive(Default)]
/// struct Jobs {
///     priority: Vec<u32>,
///     links: Vec<[Option<usize>; 3]>,
///     colors: Vec<Color>,
/// }
///
/// impl Jobs {
///     fn add(&mut self, priority: u32) -> usize {
///         self.priority.push(priority);
///         self.links.push([None; 3]);
///         self.colors.push(Color::INITIAL);
///         self.priority.len() - 1
///     }
/// }
///
/// impl RbTreeOps for Jobs {
///     type Node = usize;
///     fn parent(&self, n: usize) -> Option<usize> { self.links[n][0] }
///     fn set_parent(&mut self, n: usize, p: Option<usize>) { self.links[n][0] = p }
///     fn left(&self, n: usize) -> Option<usize> { self.links[n][1] }
///     fn set_left(&mut self, n: usize, c: Option<usize>) { self.links[n][1] = c }
///     fn right(&self, n: usize) -> Option<usize> { self.links[n][2] }
///     fn set_right(&mut self, n: usize, c: Option<usize>) { self.links[n][2] = c }
///     fn color(&self, n: usize) -> Color { self.colors[n] }
///     fn set_color(&mut self, n: usize, c: Color) { self.colors[n] = c }
/// }
///
/// impl PriorityQueueOps for Jobs {
///     fn has_higher_priority(&self, node: usize, than: usize) -> bool {
///         self.priority[node] >= self.priority[than]
///     }
/// }
///
/// let mut queue = RedBlackPriorityQueue::new(Jobs::default());
/// let low = queue.ops_mut().add(1);
/// let high = queue.ops_mut().add(9);
/// queue.insert(low);
/// queue.insert(high);
///
/// assert_eq!(queue.peek_max(), Some(high));
/// assert_eq!(queue.pop_max(), Some(high));
/// assert_eq!(queue.pop_max(), Some(low));
/// assert!(queue.is_empty());
/// ```
pub trait PriorityQueueOps: RbTreeOps {
    /// Returns true if `node` should sit to the right of `than`.
    fn has_higher_priority(&self, node: Self::Node, than: Self::Node) -> bool;
}

//! Slotmap-backed node arena
//!
//! The queue itself never allocates. When the caller has no node type of its
//! own, [`PriorityArena`] provides one: nodes live contiguously in a
//! [`SlotMap`] and are addressed by generational [`NodeKey`]s, which makes a
//! stale key detectable instead of dangling.
//!
//! [`ArenaQueue`] pairs the two and adds `push`/`pop`/`peek` shorthands that
//! allocate and free nodes around the intrusive operations.
//!
//! # Feature Flag
//! Requires the `arena-storage` feature (enabled by default).

use crate::queue::RedBlackPriorityQueue;
use crate::traits::PriorityQueueOps;
use intrusive_rbtree::{Color, RbTreeOps};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key of a node stored in a [`PriorityArena`]
    pub struct NodeKey;
}

/// How nodes with equal priority are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The most recently inserted node pops first
    #[default]
    Lifo,
    /// The earliest inserted node pops first
    Fifo,
}

/// A node of a [`PriorityArena`]: payload plus tree fields
#[derive(Debug, Clone)]
pub struct ArenaNode<P, T> {
    priority: P,
    item: T,
    parent: Option<NodeKey>,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
    color: Color,
}

/// Caller-managed node storage for [`RedBlackPriorityQueue`]
///
/// Allocating a node does not link it: pass the key to
/// [`RedBlackPriorityQueue::insert`]. Freeing a node that is still linked
/// breaks the queue that holds it.
///
/// Tree accessors panic on a key that was freed.
#[derive(Debug, Clone)]
pub struct PriorityArena<P, T> {
    nodes: SlotMap<NodeKey, ArenaNode<P, T>>,
    tie_break: TieBreak,
}

impl<P: Ord, T> Default for PriorityArena<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> PriorityArena<P, T> {
    /// Creates an empty arena with [`TieBreak::Lifo`].
    pub fn new() -> Self {
        Self::with_tie_break(TieBreak::default())
    }

    /// Creates an empty arena with the given tie-break policy.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            tie_break,
        }
    }

    /// The tie-break policy.
    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Allocates an unlinked node.
    pub fn alloc(&mut self, priority: P, item: T) -> NodeKey {
        self.nodes.insert(ArenaNode {
            priority,
            item,
            parent: None,
            left: None,
            right: None,
            color: Color::INITIAL,
        })
    }

    /// Frees an unlinked node, returning its payload.
    ///
    /// Returns `None` if the key was already freed.
    pub fn free(&mut self, key: NodeKey) -> Option<(P, T)> {
        self.nodes.remove(key).map(|node| (node.priority, node.item))
    }

    /// Returns true if `key` refers to a live node.
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Priority and item of a live node.
    pub fn get(&self, key: NodeKey) -> Option<(&P, &T)> {
        self.nodes.get(key).map(|node| (&node.priority, &node.item))
    }

    /// Priority of a node.
    ///
    /// # Panics
    /// Panics if `key` was freed.
    #[inline]
    pub fn priority(&self, key: NodeKey) -> &P {
        &self.nodes[key].priority
    }

    /// Item of a node.
    ///
    /// # Panics
    /// Panics if `key` was freed.
    #[inline]
    pub fn item(&self, key: NodeKey) -> &T {
        &self.nodes[key].item
    }

    /// Mutable item of a live node. The priority stays read-only so linked
    /// nodes cannot be reordered behind the queue's back.
    pub fn item_mut(&mut self, key: NodeKey) -> Option<&mut T> {
        self.nodes.get_mut(key).map(|node| &mut node.item)
    }

    /// Number of live nodes, linked or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<P: Ord, T> RbTreeOps for PriorityArena<P, T> {
    type Node = NodeKey;

    #[inline]
    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].parent
    }

    #[inline]
    fn set_parent(&mut self, node: NodeKey, parent: Option<NodeKey>) {
        self.nodes[node].parent = parent;
    }

    #[inline]
    fn left(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].left
    }

    #[inline]
    fn set_left(&mut self, node: NodeKey, child: Option<NodeKey>) {
        self.nodes[node].left = child;
    }

    #[inline]
    fn right(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes[node].right
    }

    #[inline]
    fn set_right(&mut self, node: NodeKey, child: Option<NodeKey>) {
        self.nodes[node].right = child;
    }

    #[inline]
    fn color(&self, node: NodeKey) -> Color {
        self.nodes[node].color
    }

    #[inline]
    fn set_color(&mut self, node: NodeKey, color: Color) {
        self.nodes[node].color = color;
    }
}

impl<P: Ord, T> PriorityQueueOps for PriorityArena<P, T> {
    #[inline]
    fn has_higher_priority(&self, node: NodeKey, than: NodeKey) -> bool {
        let (node, than) = (&self.nodes[node].priority, &self.nodes[than].priority);
        match self.tie_break {
            TieBreak::Lifo => node >= than,
            TieBreak::Fifo => node > than,
        }
    }
}

/// Priority queue whose nodes live in a [`PriorityArena`]
pub type ArenaQueue<P, T> = RedBlackPriorityQueue<PriorityArena<P, T>>;

impl<P: Ord, T> RedBlackPriorityQueue<PriorityArena<P, T>> {
    /// Creates an empty arena queue with the given tie-break policy.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self::new(PriorityArena::with_tie_break(tie_break))
    }

    /// Allocates a node and links it, returning its key.
    pub fn push(&mut self, priority: P, item: T) -> NodeKey {
        let key = self.ops_mut().alloc(priority, item);
        self.insert(key);
        key
    }

    /// Priority and item of the maximum.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.peek_max().and_then(|key| self.ops().get(key))
    }

    /// Unlinks the maximum and frees its node.
    pub fn pop(&mut self) -> Option<(P, T)> {
        let key = self.pop_max()?;
        self.ops_mut().free(key)
    }
}

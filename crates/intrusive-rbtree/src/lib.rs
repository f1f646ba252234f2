//! Capability-based intrusive red-black tree.
//!
//! The tree never owns, allocates or frees a node. It is driven entirely
//! through an [`RbTreeOps`] value that knows how to read and write the four
//! tree fields (parent, left child, right child, color) of a caller-defined
//! node handle. A handle can be anything that is `Copy + Eq`: a slotmap key,
//! an index into a `Vec`, or a `NonNull` pointing at an embedded [`RbLink`].
//!
//! The tree does not know how nodes are ordered either. Callers perform the
//! raw binary-search-tree insertion themselves (attach the node as a leaf and
//! set its parent) and then ask the tree to restore the red-black invariant
//! with [`RbTree::balance_after_linking`]. Removal is a single call to
//! [`RbTree::unlink`].
//!
//! # Hooks
//!
//! Every structural change is reported synchronously through the provided
//! methods of [`RbTreeOps`], so a layer built on top of the tree can keep
//! derived data (subtree sizes, cached extremes, aggregates) correct without
//! looking at the balancing rules:
//!
//! | Hook                  | Fired                                                        |
//! |-----------------------|--------------------------------------------------------------|
//! | `after_link`          | once, when rebalancing of a freshly linked leaf starts       |
//! | `after_rotate_left`   | after each left rotation; `new_top` is now `old_top`'s parent |
//! | `after_rotate_right`  | after each right rotation                                    |
//! | `swap_user_data`      | when removal exchanges a node with its in-order successor    |
//! | `before_unlink`       | just before a node is spliced out                            |
//!
//! # Example
//!
//! ```rust
//! use intrusive_rbtree::{Color, RbTree, RbTreeOps};
//!
//! #[derive(Default)]
//! struct Slots {
//!     links: Vec<[Option<usize>; 3]>,
//!     colors: Vec<Color>,
//! }
//!
//! impl RbTreeOps for Slots {
//!     type Node = usize;
//!     fn parent(&self, n: usize) -> Option<usize> { self.links[n][0] }
//!     fn set_parent(&mut self, n: usize, p: Option<usize>) { self.links[n][0] = p }
//!     fn left(&self, n: usize) -> Option<usize> { self.links[n][1] }
//!     fn set_left(&mut self, n: usize, c: Option<usize>) { self.links[n][1] = c }
//!     fn right(&self, n: usize) -> Option<usize> { self.links[n][2] }
//!     fn set_right(&mut self, n: usize, c: Option<usize>) { self.links[n][2] = c }
//!     fn color(&self, n: usize) -> Color { self.colors[n] }
//!     fn set_color(&mut self, n: usize, c: Color) { self.colors[n] = c }
//! }
//!
//! let mut slots = Slots::default();
//! for _ in 0..3 {
//!     slots.links.push([None; 3]);
//!     slots.colors.push(Color::INITIAL);
//! }
//!
//! let mut tree = RbTree::new(slots);
//! tree.set_root(Some(0));
//! tree.balance_after_linking(0);
//!
//! // Chain 1 and 2 to the right; the tree rotates to keep its height bounded.
//! tree.ops_mut().set_right(0, Some(1));
//! tree.ops_mut().set_parent(1, Some(0));
//! tree.balance_after_linking(1);
//! tree.ops_mut().set_right(1, Some(2));
//! tree.ops_mut().set_parent(2, Some(1));
//! tree.balance_after_linking(2);
//!
//! assert_eq!(tree.root(), Some(1));
//! assert_eq!(tree.validate(), Ok(3));
//!
//! tree.unlink(1);
//! assert_eq!(tree.validate(), Ok(2));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod link;

pub use link::RbLink;

use core::fmt;

// =============================================================================
// Color
// =============================================================================

/// Two-valued tag used by the balancing rules.
///
/// Callers only ever need to store it; the tree decides its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Color of a freshly linked node.
    #[default]
    Red,
    /// Color of the root and of every node counted by the black height.
    Black,
}

impl Color {
    /// Value a node's color field should hold before it is first linked.
    pub const INITIAL: Color = Color::Red;
}

// =============================================================================
// RbTreeOps
// =============================================================================

/// Node capability set consumed by [`RbTree`].
///
/// The required methods are plain field accessors. The provided methods are
/// structural-change hooks; they default to no-ops and are invoked
/// synchronously from inside [`RbTree::balance_after_linking`] and
/// [`RbTree::unlink`], with the tree in exactly the state each hook describes.
///
/// Hooks must not restructure the tree.
pub trait RbTreeOps {
    /// Non-owning handle identifying a node.
    type Node: Copy + Eq + fmt::Debug;

    /// Returns the parent of `node`, `None` for the root or an unlinked node.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Sets the parent of `node`.
    fn set_parent(&mut self, node: Self::Node, parent: Option<Self::Node>);

    /// Returns the left child of `node`.
    fn left(&self, node: Self::Node) -> Option<Self::Node>;

    /// Sets the left child of `node`.
    fn set_left(&mut self, node: Self::Node, child: Option<Self::Node>);

    /// Returns the right child of `node`.
    fn right(&self, node: Self::Node) -> Option<Self::Node>;

    /// Sets the right child of `node`.
    fn set_right(&mut self, node: Self::Node, child: Option<Self::Node>);

    /// Returns the color of `node`.
    fn color(&self, node: Self::Node) -> Color;

    /// Sets the color of `node`.
    fn set_color(&mut self, node: Self::Node, color: Color);

    /// Node identity. Defaults to handle equality.
    #[inline]
    fn is_same(&self, node: Self::Node, other: Option<Self::Node>) -> bool {
        Some(node) == other
    }

    /// Called once when rebalancing of `node` starts.
    ///
    /// At this point `node` is a leaf already attached to its parent (or is
    /// the root) and the rest of the tree is unchanged.
    #[inline]
    fn after_link(&mut self, _node: Self::Node) {}

    /// Called after rotating left around `old_top`, so `new_top` (its former
    /// right child) is now the parent of `old_top`.
    #[inline]
    fn after_rotate_left(&mut self, _old_top: Self::Node, _new_top: Self::Node) {}

    /// Called after rotating right around `old_top`, so `new_top` (its former
    /// left child) is now the parent of `old_top`.
    #[inline]
    fn after_rotate_right(&mut self, _old_top: Self::Node, _new_top: Self::Node) {}

    /// Called after `node1` and `node2` exchanged tree positions (links and
    /// colors). Swap any other data tied to the tree position here.
    #[inline]
    fn swap_user_data(&mut self, _node1: Self::Node, _node2: Self::Node) {}

    /// Called just before removing `node`. The whole tree is well-balanced
    /// except `node`, which has at most one child.
    #[inline]
    fn before_unlink(&mut self, _node: Self::Node) {}
}

// =============================================================================
// TreeViolation
// =============================================================================

/// Structural defect reported by [`RbTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeViolation<N> {
    /// The root has a parent link.
    RootHasParent(N),
    /// The root is red.
    RedRoot(N),
    /// A child does not point back at its parent.
    BrokenParentLink {
        /// The node holding the child link.
        parent: N,
        /// The child whose parent link disagrees.
        child: N,
    },
    /// A red node has a red child.
    RedRedEdge {
        /// The red parent.
        parent: N,
        /// The red child.
        child: N,
    },
    /// The two subtrees of a node have different black heights.
    BlackHeightMismatch(N),
}

impl<N: fmt::Debug> fmt::Display for TreeViolation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeViolation::RootHasParent(n) => write!(f, "root {n:?} has a parent"),
            TreeViolation::RedRoot(n) => write!(f, "root {n:?} is red"),
            TreeViolation::BrokenParentLink { parent, child } => {
                write!(f, "child {child:?} does not point back at parent {parent:?}")
            }
            TreeViolation::RedRedEdge { parent, child } => {
                write!(f, "red node {parent:?} has red child {child:?}")
            }
            TreeViolation::BlackHeightMismatch(n) => {
                write!(f, "subtrees of {n:?} have different black heights")
            }
        }
    }
}

#[cfg(feature = "std")]
impl<N: fmt::Debug> std::error::Error for TreeViolation<N> {}

// =============================================================================
// RbTree
// =============================================================================

/// Red-black tree engine over caller-owned nodes.
///
/// Holds only the root handle and the [`RbTreeOps`] value. Not thread-safe:
/// concurrent use needs external synchronization.
pub struct RbTree<O: RbTreeOps> {
    root: Option<O::Node>,
    ops: O,
}

impl<O: RbTreeOps + Default> Default for RbTree<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<O: RbTreeOps + fmt::Debug> fmt::Debug for RbTree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTree")
            .field("root", &self.root)
            .field("ops", &self.ops)
            .finish()
    }
}

impl<O: RbTreeOps> RbTree<O> {
    /// Creates an empty tree driven by `ops`.
    #[inline]
    pub fn new(ops: O) -> Self {
        Self { root: None, ops }
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> Option<O::Node> {
        self.root
    }

    /// Replaces the root handle. Used to link the first node of an empty
    /// tree; does not touch any node.
    #[inline]
    pub fn set_root(&mut self, root: Option<O::Node>) {
        self.root = root;
    }

    /// Returns true if the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Shared access to the node capabilities.
    #[inline]
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Mutable access to the node capabilities.
    ///
    /// Changing tree fields of linked nodes through this reference breaks the
    /// tree.
    #[inline]
    pub fn ops_mut(&mut self) -> &mut O {
        &mut self.ops
    }

    /// Consumes the tree and returns the node capabilities.
    #[inline]
    pub fn into_ops(self) -> O {
        self.ops
    }

    /// Forgets every node in O(1).
    ///
    /// Nodes are not visited, so their tree fields keep stale values. Reset
    /// them before linking them anywhere again.
    #[inline]
    pub fn clear(&mut self) {
        self.root = None;
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Leftmost node of the subtree rooted at `node`.
    pub fn leftmost_in(&self, mut node: O::Node) -> O::Node {
        while let Some(left) = self.ops.left(node) {
            node = left;
        }
        node
    }

    /// Rightmost node of the subtree rooted at `node`.
    pub fn rightmost_in(&self, mut node: O::Node) -> O::Node {
        while let Some(right) = self.ops.right(node) {
            node = right;
        }
        node
    }

    /// Leftmost node of the tree.
    #[inline]
    pub fn first(&self) -> Option<O::Node> {
        self.root.map(|root| self.leftmost_in(root))
    }

    /// Rightmost node of the tree.
    #[inline]
    pub fn last(&self) -> Option<O::Node> {
        self.root.map(|root| self.rightmost_in(root))
    }

    /// In-order successor of a linked node.
    pub fn next(&self, node: O::Node) -> Option<O::Node> {
        if let Some(right) = self.ops.right(node) {
            return Some(self.leftmost_in(right));
        }
        let mut child = node;
        while let Some(parent) = self.ops.parent(child) {
            if self.ops.is_same(child, self.ops.left(parent)) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// In-order predecessor of a linked node.
    pub fn prev(&self, node: O::Node) -> Option<O::Node> {
        if let Some(left) = self.ops.left(node) {
            return Some(self.rightmost_in(left));
        }
        let mut child = node;
        while let Some(parent) = self.ops.parent(child) {
            if self.ops.is_same(child, self.ops.right(parent)) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Restores the red-black invariant after a raw insertion of `node`.
    ///
    /// The caller must already have attached `node` as a leaf: its parent
    /// holds it in the correct child slot and its own parent link is set
    /// (or it was installed with [`set_root`](Self::set_root) into an empty
    /// tree). Its child links must be `None`.
    pub fn balance_after_linking(&mut self, node: O::Node) {
        debug_assert!(self.ops.left(node).is_none(), "linked node has a left child");
        debug_assert!(self.ops.right(node).is_none(), "linked node has a right child");

        self.ops.after_link(node);
        self.ops.set_color(node, Color::Red);

        let mut node = node;
        while let Some(parent) = self.ops.parent(node) {
            if self.ops.color(parent) == Color::Black {
                break;
            }
            let grandparent = self
                .ops
                .parent(parent)
                .expect("a red node is never the root");

            if self.ops.is_same(parent, self.ops.left(grandparent)) {
                let uncle = self.ops.right(grandparent);
                if let Some(uncle) = uncle.filter(|&u| self.ops.color(u) == Color::Red) {
                    self.ops.set_color(parent, Color::Black);
                    self.ops.set_color(uncle, Color::Black);
                    self.ops.set_color(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
                let parent = if self.ops.is_same(node, self.ops.right(parent)) {
                    self.rotate_left(parent);
                    node
                } else {
                    parent
                };
                self.ops.set_color(parent, Color::Black);
                self.ops.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                let uncle = self.ops.left(grandparent);
                if let Some(uncle) = uncle.filter(|&u| self.ops.color(u) == Color::Red) {
                    self.ops.set_color(parent, Color::Black);
                    self.ops.set_color(uncle, Color::Black);
                    self.ops.set_color(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
                let parent = if self.ops.is_same(node, self.ops.left(parent)) {
                    self.rotate_right(parent);
                    node
                } else {
                    parent
                };
                self.ops.set_color(parent, Color::Black);
                self.ops.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
            break;
        }

        if let Some(root) = self.root {
            self.ops.set_color(root, Color::Black);
        }
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    /// Removes a linked `node` and rebalances.
    ///
    /// On return `node` has no parent and no children. Other nodes keep their
    /// identity; a node with two children first trades places with its
    /// in-order successor (reported through
    /// [`swap_user_data`](RbTreeOps::swap_user_data)).
    pub fn unlink(&mut self, node: O::Node) {
        debug_assert!(self.root.is_some(), "unlink on an empty tree");

        if let (Some(_), Some(right)) = (self.ops.left(node), self.ops.right(node)) {
            let successor = self.leftmost_in(right);
            self.swap_with_successor(node, successor);
        }

        self.ops.before_unlink(node);
        log::trace!("unlinking {node:?}");

        let child = self.ops.left(node).or(self.ops.right(node));
        let parent = self.ops.parent(node);
        if let Some(child) = child {
            self.ops.set_parent(child, parent);
        }
        self.replace_child(parent, node, child);

        let removed_color = self.ops.color(node);
        self.ops.set_parent(node, None);
        self.ops.set_left(node, None);
        self.ops.set_right(node, None);
        self.ops.set_color(node, Color::INITIAL);

        if removed_color == Color::Black {
            match child {
                Some(child) if self.ops.color(child) == Color::Red => {
                    self.ops.set_color(child, Color::Black);
                }
                _ => self.balance_after_unlinking(child, parent),
            }
        }
    }

    /// Exchanges the tree positions of `node` and its in-order successor,
    /// which is the leftmost node of `node`'s right subtree.
    fn swap_with_successor(&mut self, node: O::Node, successor: O::Node) {
        let node_parent = self.ops.parent(node);
        let node_left = self.ops.left(node);
        let node_right = self
            .ops
            .right(node)
            .expect("successor swap needs a right subtree");
        let successor_parent = self.ops.parent(successor);
        let successor_right = self.ops.right(successor);
        debug_assert!(self.ops.left(successor).is_none());

        self.replace_child(node_parent, node, Some(successor));
        self.ops.set_parent(successor, node_parent);

        self.ops.set_left(successor, node_left);
        if let Some(left) = node_left {
            self.ops.set_parent(left, Some(successor));
        }

        if self.ops.is_same(successor, Some(node_right)) {
            self.ops.set_right(successor, Some(node));
            self.ops.set_parent(node, Some(successor));
        } else {
            let successor_parent =
                successor_parent.expect("a non-adjacent successor has a parent");
            self.ops.set_right(successor, Some(node_right));
            self.ops.set_parent(node_right, Some(successor));
            self.ops.set_left(successor_parent, Some(node));
            self.ops.set_parent(node, Some(successor_parent));
        }

        self.ops.set_left(node, None);
        self.ops.set_right(node, successor_right);
        if let Some(right) = successor_right {
            self.ops.set_parent(right, Some(node));
        }

        let node_color = self.ops.color(node);
        let successor_color = self.ops.color(successor);
        self.ops.set_color(node, successor_color);
        self.ops.set_color(successor, node_color);

        self.ops.swap_user_data(node, successor);
    }

    /// Fixes the black-height deficit left at `node` (possibly an empty slot)
    /// under `parent`.
    fn balance_after_unlinking(&mut self, mut node: Option<O::Node>, mut parent: Option<O::Node>) {
        while let Some(p) = parent {
            if self.is_red(node) {
                break;
            }

            if self.same_slot(node, self.ops.left(p)) {
                let mut sibling = self.ops.right(p).expect("black height guarantees a sibling");
                if self.ops.color(sibling) == Color::Red {
                    self.ops.set_color(sibling, Color::Black);
                    self.ops.set_color(p, Color::Red);
                    self.rotate_left(p);
                    sibling = self.ops.right(p).expect("black height guarantees a sibling");
                }

                if !self.is_red(self.ops.left(sibling)) && !self.is_red(self.ops.right(sibling)) {
                    self.ops.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.ops.parent(p);
                    continue;
                }

                if !self.is_red(self.ops.right(sibling)) {
                    if let Some(close) = self.ops.left(sibling) {
                        self.ops.set_color(close, Color::Black);
                    }
                    self.ops.set_color(sibling, Color::Red);
                    self.rotate_right(sibling);
                    sibling = self.ops.right(p).expect("black height guarantees a sibling");
                }

                let parent_color = self.ops.color(p);
                self.ops.set_color(sibling, parent_color);
                self.ops.set_color(p, Color::Black);
                if let Some(distant) = self.ops.right(sibling) {
                    self.ops.set_color(distant, Color::Black);
                }
                self.rotate_left(p);
            } else {
                let mut sibling = self.ops.left(p).expect("black height guarantees a sibling");
                if self.ops.color(sibling) == Color::Red {
                    self.ops.set_color(sibling, Color::Black);
                    self.ops.set_color(p, Color::Red);
                    self.rotate_right(p);
                    sibling = self.ops.left(p).expect("black height guarantees a sibling");
                }

                if !self.is_red(self.ops.left(sibling)) && !self.is_red(self.ops.right(sibling)) {
                    self.ops.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.ops.parent(p);
                    continue;
                }

                if !self.is_red(self.ops.left(sibling)) {
                    if let Some(close) = self.ops.right(sibling) {
                        self.ops.set_color(close, Color::Black);
                    }
                    self.ops.set_color(sibling, Color::Red);
                    self.rotate_left(sibling);
                    sibling = self.ops.left(p).expect("black height guarantees a sibling");
                }

                let parent_color = self.ops.color(p);
                self.ops.set_color(sibling, parent_color);
                self.ops.set_color(p, Color::Black);
                if let Some(distant) = self.ops.left(sibling) {
                    self.ops.set_color(distant, Color::Black);
                }
                self.rotate_right(p);
            }

            node = self.root;
            break;
        }

        if let Some(node) = node {
            self.ops.set_color(node, Color::Black);
        }
    }

    // -------------------------------------------------------------------------
    // Rotations
    // -------------------------------------------------------------------------

    //      old_top                  new_top
    //       /   \                    /   \
    //      a   new_top    ==>    old_top  c
    //           /   \             /   \
    //          b     c           a     b
    fn rotate_left(&mut self, old_top: O::Node) {
        let new_top = self
            .ops
            .right(old_top)
            .expect("left rotation needs a right child");
        let middle = self.ops.left(new_top);

        self.ops.set_right(old_top, middle);
        if let Some(middle) = middle {
            self.ops.set_parent(middle, Some(old_top));
        }

        let parent = self.ops.parent(old_top);
        self.ops.set_parent(new_top, parent);
        self.replace_child(parent, old_top, Some(new_top));

        self.ops.set_left(new_top, Some(old_top));
        self.ops.set_parent(old_top, Some(new_top));

        log::trace!("rotated left around {old_top:?}, new top {new_top:?}");
        self.ops.after_rotate_left(old_top, new_top);
    }

    fn rotate_right(&mut self, old_top: O::Node) {
        let new_top = self
            .ops
            .left(old_top)
            .expect("right rotation needs a left child");
        let middle = self.ops.right(new_top);

        self.ops.set_left(old_top, middle);
        if let Some(middle) = middle {
            self.ops.set_parent(middle, Some(old_top));
        }

        let parent = self.ops.parent(old_top);
        self.ops.set_parent(new_top, parent);
        self.replace_child(parent, old_top, Some(new_top));

        self.ops.set_right(new_top, Some(old_top));
        self.ops.set_parent(old_top, Some(new_top));

        log::trace!("rotated right around {old_top:?}, new top {new_top:?}");
        self.ops.after_rotate_right(old_top, new_top);
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Points whichever slot holds `old` (a child slot of `parent`, or the
    /// root) at `new`.
    fn replace_child(&mut self, parent: Option<O::Node>, old: O::Node, new: Option<O::Node>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.ops.is_same(old, self.ops.left(parent)) {
                    self.ops.set_left(parent, new);
                } else {
                    debug_assert!(self.ops.is_same(old, self.ops.right(parent)));
                    self.ops.set_right(parent, new);
                }
            }
        }
    }

    #[inline]
    fn is_red(&self, node: Option<O::Node>) -> bool {
        node.is_some_and(|n| self.ops.color(n) == Color::Red)
    }

    #[inline]
    fn same_slot(&self, a: Option<O::Node>, b: Option<O::Node>) -> bool {
        match a {
            Some(a) => self.ops.is_same(a, b),
            None => b.is_none(),
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks the red-black invariants and every parent/child link.
    ///
    /// Returns the number of reachable nodes. O(n); meant for tests and
    /// debugging.
    pub fn validate(&self) -> Result<usize, TreeViolation<O::Node>> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        if self.ops.parent(root).is_some() {
            return Err(TreeViolation::RootHasParent(root));
        }
        if self.ops.color(root) == Color::Red {
            return Err(TreeViolation::RedRoot(root));
        }
        self.validate_subtree(root).map(|(count, _)| count)
    }

    /// Returns (node count, black height) of the subtree at `node`.
    fn validate_subtree(&self, node: O::Node) -> Result<(usize, usize), TreeViolation<O::Node>> {
        let node_is_red = self.ops.color(node) == Color::Red;
        let mut count = 1;
        let mut heights = [0usize; 2];

        for (side, child) in [self.ops.left(node), self.ops.right(node)]
            .into_iter()
            .enumerate()
        {
            let Some(child) = child else { continue };
            if !self.ops.is_same(node, self.ops.parent(child)) {
                return Err(TreeViolation::BrokenParentLink {
                    parent: node,
                    child,
                });
            }
            if node_is_red && self.ops.color(child) == Color::Red {
                return Err(TreeViolation::RedRedEdge {
                    parent: node,
                    child,
                });
            }
            let (child_count, child_height) = self.validate_subtree(child)?;
            count += child_count;
            heights[side] = child_height;
        }

        if heights[0] != heights[1] {
            return Err(TreeViolation::BlackHeightMismatch(node));
        }
        Ok((count, heights[0] + usize::from(!node_is_red)))
    }
}

// =============================================================================
// Tests
// =============================================================================

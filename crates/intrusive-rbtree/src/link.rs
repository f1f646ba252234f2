//! Embeddable tree link for pointer-based intrusive nodes.
//!
//! Embed an [`RbLink`] in a struct, hand out `NonNull<RbLink>` as the node
//! handle, and recover the containing struct with [`container_of!`] when the
//! ordering needs the payload.
//!
//! ```rust
//! use intrusive_rbtree::{container_of, Color, RbLink};
//! use std::ptr::NonNull;
//!
//! struct Task {
//!     deadline: u64,
//!     link: RbLink,
//! }
//!
//! let task = Task { deadline: 30, link: RbLink::new() };
//! let handle = NonNull::from(&task.link);
//! assert!(task.link.is_detached());
//! assert_eq!(task.link.color(), Color::INITIAL);
//!
//! unsafe {
//!     let task_ptr: *const Task = container_of!(handle.as_ptr(), Task, link);
//!     assert_eq!((*task_ptr).deadline, 30);
//! }
//! ```

use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;

use crate::Color;

/// Intrusive link that lets an object be a node of an [`RbTree`](crate::RbTree).
///
/// All fields sit behind `Cell`, so an [`RbTreeOps`](crate::RbTreeOps)
/// implementation can update them through shared pointers. A detached link
/// has no parent and no children.
#[repr(C)]
pub struct RbLink {
    parent: Cell<Option<NonNull<RbLink>>>,
    left: Cell<Option<NonNull<RbLink>>>,
    right: Cell<Option<NonNull<RbLink>>>,
    color: Cell<Color>,
}

impl RbLink {
    /// Creates a new detached `RbLink`.
    #[inline]
    pub const fn new() -> RbLink {
        RbLink {
            parent: Cell::new(None),
            left: Cell::new(None),
            right: Cell::new(None),
            color: Cell::new(Color::INITIAL),
        }
    }

    /// Returns true if the link has no parent and no children.
    ///
    /// The only node of a one-node tree is also detached by this definition;
    /// the tree alone knows whether it is the root.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.parent.get().is_none() && self.left.get().is_none() && self.right.get().is_none()
    }

    /// Resets every field to the detached state.
    ///
    /// Neighbors are not updated. Use this only on nodes dropped from a tree
    /// with [`RbTree::clear`](crate::RbTree::clear).
    #[inline]
    pub fn force_detach(&self) {
        self.parent.set(None);
        self.left.set(None);
        self.right.set(None);
        self.color.set(Color::INITIAL);
    }

    /// Gets the parent link pointer.
    #[inline]
    pub fn parent(&self) -> Option<NonNull<RbLink>> {
        self.parent.get()
    }

    /// Sets the parent link pointer.
    #[inline]
    pub fn set_parent(&self, parent: Option<NonNull<RbLink>>) {
        self.parent.set(parent);
    }

    /// Gets the left child link pointer.
    #[inline]
    pub fn left(&self) -> Option<NonNull<RbLink>> {
        self.left.get()
    }

    /// Sets the left child link pointer.
    #[inline]
    pub fn set_left(&self, left: Option<NonNull<RbLink>>) {
        self.left.set(left);
    }

    /// Gets the right child link pointer.
    #[inline]
    pub fn right(&self) -> Option<NonNull<RbLink>> {
        self.right.get()
    }

    /// Sets the right child link pointer.
    #[inline]
    pub fn set_right(&self, right: Option<NonNull<RbLink>>) {
        self.right.set(right);
    }

    /// Gets the node color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// Sets the node color.
    #[inline]
    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }
}

impl Default for RbLink {
    #[inline]
    fn default() -> Self {
        RbLink::new()
    }
}

impl Clone for RbLink {
    /// Cloning a link creates a new detached link.
    #[inline]
    fn clone(&self) -> Self {
        RbLink::new()
    }
}

impl fmt::Debug for RbLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_detached() {
            write!(f, "RbLink(detached, {:?})", self.color())
        } else {
            write!(f, "RbLink(linked, {:?})", self.color())
        }
    }
}

// A detached RbLink can be sent to another thread.
unsafe impl Send for RbLink {}

/// Converts a pointer to an embedded field back into a pointer to its
/// containing struct.
///
/// Must be used inside an `unsafe` block: the pointer must really point at
/// `$field` of a live `$type`.
#[macro_export]
macro_rules! container_of {
    ($ptr:expr, $type:ty, $field:ident) => {{
        let ptr = $ptr as *const u8;
        let offset = core::mem::offset_of!($type, $field);
        ptr.sub(offset) as *const $type
    }};
}

/// Mutable version of [`container_of!`].
#[macro_export]
macro_rules! container_of_mut {
    ($ptr:expr, $type:ty, $field:ident) => {{
        let ptr = $ptr as *mut u8;
        let offset = core::mem::offset_of!($type, $field);
        ptr.sub(offset) as *mut $type
    }};
}

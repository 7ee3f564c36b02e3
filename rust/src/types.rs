//! Core types and data structures for RBTreeMap.
//!
//! This module contains the node and tree definitions, the arena id type and
//! the sentinel used for absent links.

use crate::arena::Arena;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel id standing in for an absent child, parent or root.
pub const NULL_NODE: NodeId = u32::MAX;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered map backed by a red-black tree.
///
/// Nodes are stored in an arena and linked by [`NodeId`]. Children are owned
/// downward through `left`/`right`; `parent` is a plain back-reference that every
/// relink keeps consistent.
///
/// # Type Parameters
///
/// * `K` - Key type, totally ordered through `Ord`
/// * `V` - Value type
///
/// # Examples
///
/// ```
/// use rbtree::RBTreeMap;
///
/// let mut tree = RBTreeMap::new();
/// tree.insert(1, "one");
/// tree.insert(2, "two");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.remove(&2), Some("two"));
/// assert_eq!(tree.get(&2), None);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most two rotations
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n), at most three rotations
#[derive(Debug)]
pub struct RBTreeMap<K, V> {
    /// Root node, or `NULL_NODE` when the tree is empty.
    pub(crate) root: NodeId,
    /// Storage for every live node.
    pub(crate) arena: Arena<RBNode<K, V>>,
}

/// A single key-value entry and its links.
#[derive(Debug, Clone)]
pub struct RBNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<K, V> RBNode<K, V> {
    /// Creates an unlinked node.
    pub(crate) fn new(key: K, value: V, color: Color, parent: NodeId) -> Self {
        Self {
            key,
            value,
            color,
            parent,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    /// Drops every link so a detached node no longer points into the tree.
    pub(crate) fn unlink(&mut self) {
        self.parent = NULL_NODE;
        self.left = NULL_NODE;
        self.right = NULL_NODE;
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

//! Tree structure management for RBTreeMap.
//!
//! Link accessors over the arena, the rotation primitives every fixup is built
//! from, and tree-level queries such as size and clearing. All accessors accept
//! `NULL_NODE` and treat it as an implicit black leaf.

use log::{debug, trace};

use crate::arena::ArenaStats;
use crate::types::{Color, NodeId, RBNode, RBTreeMap, Side, NULL_NODE};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K, V> RBTreeMap<K, V> {
    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Clear all entries from the tree.
    pub fn clear(&mut self) {
        debug!("clearing tree with {} nodes", self.arena.len());
        self.arena.clear();
        self.root = NULL_NODE;
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    // ============================================================================
    // ROOT ACCESS (internal and test use only)
    // ============================================================================

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        if self.root != id {
            debug!("root changed: {} -> {}", self.root, id);
        }
        self.root = id;
    }

    // ============================================================================
    // LINK ACCESSORS
    // ============================================================================

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> Option<&RBNode<K, V>> {
        self.arena.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut RBNode<K, V>> {
        self.arena.get_mut(id)
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.parent)
    }

    #[inline]
    pub(crate) fn left_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.left)
    }

    #[inline]
    pub(crate) fn right_of(&self, id: NodeId) -> NodeId {
        self.node(id).map_or(NULL_NODE, |n| n.right)
    }

    #[inline]
    pub(crate) fn child_of(&self, id: NodeId, side: Side) -> NodeId {
        match side {
            Side::Left => self.left_of(id),
            Side::Right => self.right_of(id),
        }
    }

    /// Color of `id`; absent nodes are black.
    #[inline]
    pub(crate) fn color_of(&self, id: NodeId) -> Color {
        self.node(id).map_or(Color::Black, |n| n.color)
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color_of(id).is_red()
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if let Some(node) = self.node_mut(id) {
            node.color = color;
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.parent = parent;
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        if let Some(node) = self.node_mut(id) {
            match side {
                Side::Left => node.left = child,
                Side::Right => node.right = child,
            }
        }
    }

    /// Point whatever referenced `old` (a parent slot or the root) at `new`.
    /// Only the downward link is written; `new.parent` is left to the caller.
    pub(crate) fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NULL_NODE {
            self.set_root(new);
        } else if self.left_of(parent) == old {
            self.set_child(parent, Side::Left, new);
        } else {
            self.set_child(parent, Side::Right, new);
        }
    }

    // ============================================================================
    // ROTATIONS
    // ============================================================================

    /// Move `p` down to the left, promoting its right child into its place.
    /// Colors are untouched. A no-op when `p` is absent.
    ///
    /// ```text
    ///     p              r
    ///    / \            / \
    ///   a   r    =>    p   c
    ///      / \        / \
    ///     b   c      a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, p: NodeId) {
        let r = self.right_of(p);
        if p == NULL_NODE || r == NULL_NODE {
            debug_assert!(p == NULL_NODE, "left rotation of {} without a right child", p);
            return;
        }
        trace!("rotate left at {} (promoting {})", p, r);

        let inner = self.left_of(r);
        self.set_child(p, Side::Right, inner);
        self.set_parent(inner, p);

        let grand = self.parent_of(p);
        self.set_parent(r, grand);
        self.replace_child(grand, p, r);

        self.set_child(r, Side::Left, p);
        self.set_parent(p, r);
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left): `p` moves down to
    /// the right and its left child takes its place.
    pub(crate) fn rotate_right(&mut self, p: NodeId) {
        let l = self.left_of(p);
        if p == NULL_NODE || l == NULL_NODE {
            debug_assert!(p == NULL_NODE, "right rotation of {} without a left child", p);
            return;
        }
        trace!("rotate right at {} (promoting {})", p, l);

        let inner = self.right_of(l);
        self.set_child(p, Side::Left, inner);
        self.set_parent(inner, p);

        let grand = self.parent_of(p);
        self.set_parent(l, grand);
        self.replace_child(grand, p, l);

        self.set_child(l, Side::Right, p);
        self.set_parent(p, l);
    }

    /// Rotate `p` down towards `dir`.
    #[inline]
    pub(crate) fn rotate(&mut self, p: NodeId, dir: Side) {
        match dir {
            Side::Left => self.rotate_left(p),
            Side::Right => self.rotate_right(p),
        }
    }
}

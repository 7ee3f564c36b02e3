//! Validation and debugging utilities for RBTreeMap.
//!
//! This module walks the whole tree and checks every structural property the
//! balancing code relies on: parent/child link agreement, key ordering, the
//! red-black coloring rules and agreement between the tree and its arena.

use std::fmt::Debug;

use crate::error::{BTreeResult, RBTreeError, TreeResult, TreeResultExt};
use crate::types::{Color, NodeId, RBTreeMap, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> RBTreeMap<K, V> {
    /// Check if the tree maintains the red-black invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_tree().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_tree().map(|_| ()).map_err(|e| e.to_string())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_tree().map(|_| ()).with_operation(operation)
    }

    /// Number of black nodes on every path from the root down to an absent
    /// child, or `None` if the tree is not a valid red-black tree.
    pub fn black_height(&self) -> Option<usize> {
        self.check_tree().ok()
    }

    /// Validate the whole tree, returning its black height.
    fn check_tree(&self) -> TreeResult<usize> {
        if self.root == NULL_NODE {
            if !self.arena.is_empty() {
                return Err(RBTreeError::arena_error(
                    "Empty tree check",
                    &format!("{} nodes left in arena", self.arena.len()),
                ));
            }
            return Ok(0);
        }

        if self.color_of(self.root).is_red() {
            return Err(RBTreeError::data_integrity("Root color", "root is red"));
        }

        let mut count = 0;
        let height = self.check_subtree(self.root, NULL_NODE, None, None, &mut count)?;

        if count != self.arena.len() {
            return Err(RBTreeError::arena_error(
                "Node count check",
                &format!("{} reachable vs {} in arena", count, self.arena.len()),
            ));
        }
        Ok(height)
    }

    /// Recursively check the subtree at `id`, returning its black height.
    fn check_subtree<'a>(
        &'a self,
        id: NodeId,
        expected_parent: NodeId,
        min_key: Option<&'a K>,
        max_key: Option<&'a K>,
        count: &mut usize,
    ) -> TreeResult<usize> {
        if id == NULL_NODE {
            return Ok(0);
        }
        let node = self.node(id).ok_or_else(|| {
            RBTreeError::arena_error("Node lookup", &format!("id {} is not allocated", id))
        })?;

        *count += 1;
        if *count > self.arena.len() {
            return Err(RBTreeError::corrupted_tree(
                "Child links",
                &format!("node {} reached more than once", id),
            ));
        }

        if node.parent != expected_parent {
            return Err(RBTreeError::corrupted_tree(
                "Parent link",
                &format!(
                    "node {} points to {} but hangs under {}",
                    id, node.parent, expected_parent
                ),
            ));
        }

        if min_key.is_some_and(|min| node.key <= *min) {
            return Err(RBTreeError::data_integrity(
                "Key ordering",
                &format!("node {} is not above its lower bound", id),
            ));
        }
        if max_key.is_some_and(|max| node.key >= *max) {
            return Err(RBTreeError::data_integrity(
                "Key ordering",
                &format!("node {} is not below its upper bound", id),
            ));
        }

        if node.color.is_red() && (self.is_red(node.left) || self.is_red(node.right)) {
            return Err(RBTreeError::data_integrity(
                "Red edge",
                &format!("red node {} has a red child", id),
            ));
        }

        let left = self.check_subtree(node.left, id, min_key, Some(&node.key), count)?;
        let right = self.check_subtree(node.right, id, Some(&node.key), max_key, count)?;
        if left != right {
            return Err(RBTreeError::data_integrity(
                "Black height",
                &format!("node {}: left {}, right {}", id, left, right),
            ));
        }

        Ok(left + usize::from(node.color.is_black()))
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K, V> RBTreeMap<K, V> {
    /// Returns all key-value pairs in key order (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        let mut items = Vec::with_capacity(self.len());
        let mut id = self.leftmost(self.root);
        while let Some(node) = self.node(id) {
            items.push((&node.key, &node.value));
            id = self.successor(id);
        }
        items
    }

    /// Keys in order paired with their node colors.
    #[cfg(test)]
    pub(crate) fn slice_colors(&self) -> Vec<(K, Color)>
    where
        K: Clone,
    {
        let mut items = Vec::with_capacity(self.len());
        let mut id = self.leftmost(self.root);
        while let Some(node) = self.node(id) {
            items.push((node.key.clone(), node.color));
            id = self.successor(id);
        }
        items
    }

    /// Prints the tree sideways for debugging, right subtree on top.
    pub fn print_node_chain(&self)
    where
        K: Debug,
    {
        println!("Tree structure ({} nodes):", self.len());
        self.print_node(self.root, 0);
    }

    fn print_node(&self, id: NodeId, depth: usize)
    where
        K: Debug,
    {
        let Some(node) = self.node(id) else {
            return;
        };
        self.print_node(node.right, depth + 1);
        let tag = match node.color {
            Color::Red => "R",
            Color::Black => "B",
        };
        println!("{}{}[id={}] {:?}", "    ".repeat(depth), tag, id, node.key);
        self.print_node(node.left, depth + 1);
    }
}

//! Construction and initialization logic for RBTreeMap.

use crate::arena::Arena;
use crate::types::{RBTreeMap, NULL_NODE};

impl<K, V> RBTreeMap<K, V> {
    /// Create an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let tree = RBTreeMap::<i32, String>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            arena: Arena::new(),
        }
    }

    /// Create an empty tree whose arena has room for `capacity` nodes before
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let tree = RBTreeMap::<i32, i32>::with_capacity(1024);
    /// assert!(tree.is_empty());
    /// assert!(tree.arena_stats().total_capacity >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            arena: Arena::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for RBTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

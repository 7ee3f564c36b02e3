//! GET operations for RBTreeMap.
//!
//! Key lookup plus in-order neighbour navigation. Nothing in this module
//! mutates the tree structure.

use std::cmp::Ordering;

use crate::error::{KeyResult, RBTreeError};
use crate::types::{NodeId, RBTreeMap, NULL_NODE};

impl<K: Ord, V> RBTreeMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.node(self.find_node(key)).map(|n| &n.value)
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// tree.insert(1, "one");
    /// if let Some(value) = tree.get_mut(&1) {
    ///     *value = "ONE";
    /// }
    /// assert_eq!(tree.get(&1), Some(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find_node(key);
        self.node_mut(id).map(|n| &mut n.value)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key) != NULL_NODE
    }

    /// Get value for a key, returning an error if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get_item(&1).unwrap(), &"one");
    /// assert!(tree.get_item(&2).is_err());
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(RBTreeError::KeyNotFound)
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entry(self.leftmost(self.root))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entry(self.rightmost(self.root))
    }

    /// Returns the entry immediately before `key` in key order. `key` itself
    /// must be present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// for k in [10, 20, 30] {
    ///     tree.insert(k, ());
    /// }
    /// assert_eq!(tree.predecessor_key(&20).map(|(k, _)| *k), Some(10));
    /// assert_eq!(tree.predecessor_key(&10), None);
    /// assert_eq!(tree.predecessor_key(&15), None);
    /// ```
    pub fn predecessor_key(&self, key: &K) -> Option<(&K, &V)> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            return None;
        }
        self.entry(self.predecessor(id))
    }

    /// Returns the entry immediately after `key` in key order. `key` itself
    /// must be present.
    pub fn successor_key(&self, key: &K) -> Option<(&K, &V)> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            return None;
        }
        self.entry(self.successor(id))
    }

    // ============================================================================
    // NAVIGATION HELPERS
    // ============================================================================

    /// Locate the node holding `key`, or `NULL_NODE`.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while let Some(node) = self.node(current) {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return current,
            };
        }
        NULL_NODE
    }
}

impl<K, V> RBTreeMap<K, V> {
    fn entry(&self, id: NodeId) -> Option<(&K, &V)> {
        self.node(id).map(|n| (&n.key, &n.value))
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while self.left_of(id) != NULL_NODE {
            id = self.left_of(id);
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while self.right_of(id) != NULL_NODE {
            id = self.right_of(id);
        }
        id
    }

    /// In-order predecessor of `id`, or `NULL_NODE` if it holds the smallest key.
    pub(crate) fn predecessor(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let left = self.left_of(id);
        if left != NULL_NODE {
            return self.rightmost(left);
        }
        // Climb until we leave a right subtree.
        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && self.left_of(parent) == child {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }

    /// In-order successor of `id`, or `NULL_NODE` if it holds the largest key.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        let right = self.right_of(id);
        if right != NULL_NODE {
            return self.leftmost(right);
        }
        let mut child = id;
        let mut parent = self.parent_of(id);
        while parent != NULL_NODE && self.right_of(parent) == child {
            child = parent;
            parent = self.parent_of(parent);
        }
        parent
    }
}

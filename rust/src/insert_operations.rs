//! INSERT operations for RBTreeMap.
//!
//! Insertion is an ordinary BST descent that attaches a red leaf, followed by
//! the recolor/rotate pass that removes any red-red edge the new leaf created.

use std::cmp::Ordering;

use log::trace;

use crate::types::{Color, NodeId, RBNode, RBTreeMap, Side, NULL_NODE};

impl<K: Ord, V> RBTreeMap<K, V> {
    /// Insert a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing key keeps its node; only the value is replaced and the tree
    /// shape is not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// assert_eq!(tree.insert(1, "one"), None);
    /// assert_eq!(tree.insert(1, "uno"), Some("one"));
    /// assert_eq!(tree.get(&1), Some(&"uno"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.root == NULL_NODE {
            let id = self
                .arena
                .allocate(RBNode::new(key, value, Color::Black, NULL_NODE));
            self.set_root(id);
            return None;
        }

        let mut parent = NULL_NODE;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(node) = self.node_mut(current) {
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
            };
            parent = current;
            current = self.child_of(current, side);
        }

        let id = self.arena.allocate(RBNode::new(key, value, Color::Red, parent));
        self.set_child(parent, side, id);
        self.fix_after_insert(id);
        None
    }

    /// Insert `key`, storing `value` or, when it is `None`, the key itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree: RBTreeMap<i64, i64> = RBTreeMap::new();
    /// tree.put(5, Some(50));
    /// tree.put(6, None);
    /// assert_eq!(tree.get(&5), Some(&50));
    /// assert_eq!(tree.get(&6), Some(&6));
    /// ```
    pub fn put(&mut self, key: K, value: Option<V>)
    where
        K: Clone + Into<V>,
    {
        let value = value.unwrap_or_else(|| key.clone().into());
        self.insert(key, value);
    }

    /// Restore the red-black invariants after `x` was attached as a red leaf.
    fn fix_after_insert(&mut self, mut x: NodeId) {
        while x != self.root && self.is_red(self.parent_of(x)) {
            let parent = self.parent_of(x);
            // A red parent is never the root, so the grandparent exists.
            let grand = self.parent_of(parent);
            debug_assert_ne!(grand, NULL_NODE, "red node {} has no parent", parent);

            let parent_side = if self.left_of(grand) == parent {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child_of(grand, parent_side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup at {}: red uncle {}, recolor", x, uncle);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grand, Color::Red);
                x = grand;
            } else {
                if x == self.child_of(parent, parent_side.opposite()) {
                    trace!("insert fixup at {}: inner child, rotate parent {}", x, parent);
                    x = parent;
                    self.rotate(x, parent_side);
                }
                let parent = self.parent_of(x);
                let grand = self.parent_of(parent);
                trace!("insert fixup at {}: outer child, rotate grandparent {}", x, grand);
                self.set_color(parent, Color::Black);
                self.set_color(grand, Color::Red);
                self.rotate(grand, parent_side.opposite());
            }
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

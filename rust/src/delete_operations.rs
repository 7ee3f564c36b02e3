//! DELETE operations for RBTreeMap.
//!
//! A node with two children is first reduced to its in-order predecessor by
//! exchanging entries, so the node that is actually unlinked has at most one
//! child. Removing a black node leaves its position one black short; the
//! fixup pass repairs that by borrowing from the sibling subtree or pushing the
//! deficit towards the root.

use log::trace;

use crate::types::{Color, NodeId, RBNode, RBTreeMap, Side, NULL_NODE};

impl<K: Ord, V> RBTreeMap<K, V> {
    /// Remove a key from the tree, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.remove(&1), Some("one"));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.find_node(key);
        if id == NULL_NODE {
            return None;
        }
        self.delete_node(id).map(|node| node.value)
    }
}

impl<K, V> RBTreeMap<K, V> {
    /// Unlink the entry stored at `node` and return the node that carried it.
    fn delete_node(&mut self, node: NodeId) -> Option<RBNode<K, V>> {
        let mut target = node;
        if self.left_of(target) != NULL_NODE && self.right_of(target) != NULL_NODE {
            let pred = self.predecessor(target);
            // `node` takes over the predecessor's entry; the predecessor node now
            // carries the entry being removed and is the one unlinked below.
            if let Some((a, b)) = self.arena.get2_mut(target, pred) {
                std::mem::swap(&mut a.key, &mut b.key);
                std::mem::swap(&mut a.value, &mut b.value);
            } else {
                debug_assert!(false, "node {} has two children but no predecessor", target);
            }
            trace!("delete {}: two children, using predecessor {}", node, pred);
            target = pred;
        }

        let replacement = if self.left_of(target) != NULL_NODE {
            self.left_of(target)
        } else {
            self.right_of(target)
        };
        let parent = self.parent_of(target);

        if replacement != NULL_NODE {
            self.set_parent(replacement, parent);
            self.replace_child(parent, target, replacement);
            if let Some(n) = self.node_mut(target) {
                n.unlink();
            }
            if self.color_of(target).is_black() {
                self.fix_after_remove(replacement);
            }
        } else if parent == NULL_NODE {
            self.set_root(NULL_NODE);
        } else {
            if self.color_of(target).is_black() {
                self.fix_after_remove(target);
            }
            // Rotations during the fixup may have moved the leaf under a new parent.
            let parent = self.parent_of(target);
            debug_assert_ne!(parent, NULL_NODE, "leaf {} was promoted to root", target);
            self.replace_child(parent, target, NULL_NODE);
            if let Some(n) = self.node_mut(target) {
                n.unlink();
            }
        }

        self.arena.deallocate(target)
    }

    /// Restore uniform black height after a black node was removed at `e`.
    fn fix_after_remove(&mut self, mut e: NodeId) {
        while e != self.root && self.color_of(e).is_black() {
            let parent = self.parent_of(e);
            let side = if self.left_of(parent) == e {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();

            let mut sib = self.child_of(parent, far);
            if self.is_red(sib) {
                trace!("delete fixup at {}: red sibling {}, rotate parent {}", e, sib, parent);
                self.set_color(sib, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sib = self.child_of(parent, far);
            }
            debug_assert_ne!(sib, NULL_NODE, "black node {} has no sibling", e);

            if !self.is_red(self.left_of(sib)) && !self.is_red(self.right_of(sib)) {
                trace!("delete fixup at {}: black nephews, recolor sibling {}", e, sib);
                self.set_color(sib, Color::Red);
                e = parent;
            } else {
                if !self.is_red(self.child_of(sib, far)) {
                    trace!("delete fixup at {}: near nephew red, rotate sibling {}", e, sib);
                    let near = self.child_of(sib, side);
                    self.set_color(near, Color::Black);
                    self.set_color(sib, Color::Red);
                    self.rotate(sib, far);
                    sib = self.child_of(parent, far);
                }
                trace!("delete fixup at {}: far nephew red, rotate parent {}", e, parent);
                let parent_color = self.color_of(parent);
                self.set_color(sib, parent_color);
                self.set_color(parent, Color::Black);
                let far_nephew = self.child_of(sib, far);
                self.set_color(far_nephew, Color::Black);
                self.rotate(parent, side);
                e = self.root;
            }
        }
        self.set_color(e, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> RBTreeMap<i32, i32> {
        let mut tree = RBTreeMap::new();
        for &k in keys {
            tree.insert(k, k * 10);
        }
        tree
    }

    fn color(tree: &RBTreeMap<i32, i32>, key: i32) -> Color {
        tree.color_of(tree.find_node(&key))
    }

    fn root_key(tree: &RBTreeMap<i32, i32>) -> Option<i32> {
        tree.node(tree.root_id()).map(|n| n.key)
    }

    #[test]
    fn test_remove_with_two_children_uses_predecessor() {
        let mut tree = build(&[20, 10, 30, 5, 15]);
        let root = tree.root_id();
        let fifteen = tree.find_node(&15);

        assert_eq!(tree.remove(&20), Some(200));

        // The root node stays in place and now holds the predecessor's entry.
        assert_eq!(tree.root_id(), root);
        assert_eq!(root_key(&tree), Some(15));
        assert_eq!(tree.get(&15), Some(&150));
        assert_eq!(tree.get(&20), None);
        assert!(tree.arena.get(fifteen).is_none());
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_red_leaf_needs_no_fixup() {
        let mut tree = build(&[10, 5, 1]);
        // 1 under red 5 with no uncle: right rotation at 10.
        assert_eq!(root_key(&tree), Some(5));
        let colors_before: Vec<_> = tree
            .slice_colors()
            .into_iter()
            .filter(|(k, _)| *k != 1)
            .collect();

        assert_eq!(tree.remove(&1), Some(10));
        assert_eq!(root_key(&tree), Some(5));
        assert_eq!(color(&tree, 5), Color::Black);
        assert_eq!(color(&tree, 10), Color::Red);
        assert_eq!(tree.left_of(tree.root_id()), NULL_NODE);
        assert_eq!(tree.slice_colors(), colors_before);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_lone_red_child() {
        let mut tree = build(&[10, 5]);
        assert_eq!(color(&tree, 5), Color::Red);
        assert_eq!(tree.remove(&5), Some(50));
        assert_eq!(root_key(&tree), Some(10));
        let root = tree.root_id();
        assert_eq!((tree.left_of(root), tree.right_of(root)), (NULL_NODE, NULL_NODE));
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_black_leaf_black_nephews() {
        let mut tree = build(&[20, 10, 30, 5]);
        tree.remove(&5);
        assert_eq!(color(&tree, 10), Color::Black);
        assert_eq!(color(&tree, 30), Color::Black);

        assert_eq!(tree.remove(&10), Some(100));
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.left_of(tree.root_id()), NULL_NODE);
        assert_eq!(color(&tree, 30), Color::Red);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_black_leaf_far_nephew_red() {
        let mut tree = build(&[20, 10, 30, 25, 35]);
        assert_eq!(tree.remove(&10), Some(100));

        assert_eq!(root_key(&tree), Some(30));
        assert_eq!(color(&tree, 30), Color::Black);
        assert_eq!(color(&tree, 20), Color::Black);
        assert_eq!(color(&tree, 35), Color::Black);
        assert_eq!(color(&tree, 25), Color::Red);
        let twenty = tree.find_node(&20);
        assert_eq!(tree.left_of(twenty), NULL_NODE);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_black_leaf_near_nephew_red() {
        let mut tree = build(&[20, 10, 30, 25]);
        assert_eq!(tree.remove(&10), Some(100));

        assert_eq!(root_key(&tree), Some(25));
        assert_eq!(color(&tree, 20), Color::Black);
        assert_eq!(color(&tree, 30), Color::Black);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_black_leaf_red_sibling() {
        let mut tree = build(&[10, 5, 30, 20, 40, 50]);
        tree.remove(&50);
        assert_eq!(color(&tree, 30), Color::Red);

        assert_eq!(tree.remove(&5), Some(50));
        assert_eq!(root_key(&tree), Some(30));
        assert_eq!(color(&tree, 10), Color::Black);
        assert_eq!(color(&tree, 20), Color::Red);
        assert_eq!(color(&tree, 40), Color::Black);
        let ten = tree.find_node(&10);
        assert_eq!(tree.left_of(ten), NULL_NODE);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_right_black_leaf_near_nephew_red() {
        let mut tree = build(&[20, 10, 30, 15]);
        assert_eq!(color(&tree, 15), Color::Red);
        assert_eq!(tree.remove(&30), Some(300));

        assert_eq!(root_key(&tree), Some(15));
        assert_eq!(color(&tree, 15), Color::Black);
        assert_eq!(color(&tree, 10), Color::Black);
        assert_eq!(color(&tree, 20), Color::Black);
        let twenty = tree.find_node(&20);
        assert_eq!(tree.right_of(twenty), NULL_NODE);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_right_black_leaf_far_nephew_red() {
        let mut tree = build(&[20, 10, 30, 5, 15]);
        assert_eq!(tree.remove(&30), Some(300));

        assert_eq!(root_key(&tree), Some(10));
        assert_eq!(color(&tree, 10), Color::Black);
        assert_eq!(color(&tree, 5), Color::Black);
        assert_eq!(color(&tree, 20), Color::Black);
        assert_eq!(color(&tree, 15), Color::Red);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_right_black_leaf_red_sibling() {
        let mut tree = build(&[40, 50, 20, 30, 10, 5]);
        tree.remove(&5);
        assert_eq!(color(&tree, 20), Color::Red);

        assert_eq!(tree.remove(&50), Some(500));
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(color(&tree, 10), Color::Black);
        assert_eq!(color(&tree, 40), Color::Black);
        assert_eq!(color(&tree, 30), Color::Red);
        let forty = tree.find_node(&40);
        assert_eq!(tree.right_of(forty), NULL_NODE);
        assert_eq!(tree.check_invariants_detailed(), Ok(()));
    }

    #[test]
    fn test_remove_root_until_empty() {
        let mut tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        while let Some(root) = root_key(&tree) {
            assert_eq!(tree.remove(&root), Some(root * 10));
            assert_eq!(tree.check_invariants_detailed(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.arena_stats().allocated_count, 0);
    }

    #[test]
    fn test_remove_absent_key_changes_nothing() {
        let mut tree = build(&[8, 4, 12, 2, 6, 10, 14]);
        let root = tree.root_id();
        let before = tree.slice_colors();

        assert_eq!(tree.remove(&7), None);
        assert_eq!(tree.root_id(), root);
        assert_eq!(tree.slice_colors(), before);
        assert_eq!(tree.len(), 7);

        let mut empty: RBTreeMap<i32, i32> = RBTreeMap::new();
        assert_eq!(empty.remove(&1), None);
    }

    #[test]
    fn test_interleaved_removals_keep_invariants() {
        let mut tree = build(&(0..200).collect::<Vec<_>>());
        for k in (0..200).step_by(3) {
            assert_eq!(tree.remove(&k), Some(k * 10));
            assert_eq!(tree.check_invariants_detailed(), Ok(()));
        }
        for k in (0..200).rev().filter(|k| k % 3 != 0) {
            assert_eq!(tree.remove(&k), Some(k * 10));
            assert_eq!(tree.check_invariants_detailed(), Ok(()));
        }
        assert!(tree.is_empty());
    }
}

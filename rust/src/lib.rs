//! Red-black tree implementation in Rust with an ordered map API.
//!
//! This crate provides [`RBTreeMap`], an ordered key-value container whose
//! nodes live in an arena and are kept balanced with the classic red-black
//! recolor/rotate rules, giving O(log n) insertion, lookup and removal.
//!
//! The map is single-threaded: it holds no locks, and callers that share it
//! across threads must serialize access themselves.

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod tree_structure;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use error::{BTreeResult, KeyResult, ModifyResult, RBTreeError, TreeResultExt};
pub use types::RBTreeMap;

impl<K: Ord, V> RBTreeMap<K, V> {
    /// Insert with invariant checks before and after the mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTreeMap;
    ///
    /// let mut tree = RBTreeMap::new();
    /// assert_eq!(tree.try_insert(1, "one").unwrap(), None);
    /// assert_eq!(tree.try_insert(1, "uno").unwrap(), Some("one"));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<Option<V>> {
        self.validate_for_operation("insert")?;
        let old_value = self.insert(key, value);
        self.validate_for_operation("insert")?;
        Ok(old_value)
    }

    /// Remove with invariant checks; a missing key is reported as
    /// [`RBTreeError::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{RBTreeError, RBTreeMap};
    ///
    /// let mut tree = RBTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.try_remove(&1), Ok("one"));
    /// assert_eq!(tree.try_remove(&1), Err(RBTreeError::KeyNotFound));
    /// ```
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.validate_for_operation("remove")?;
        let value = self.remove(key).ok_or(RBTreeError::KeyNotFound)?;
        self.validate_for_operation("remove")?;
        Ok(value)
    }
}

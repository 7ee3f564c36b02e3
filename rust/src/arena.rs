//! Slot arena used to store tree nodes.
//!
//! Nodes are addressed by a `NodeId` index into a `Vec` of slots. Freed slots go
//! on a free list and are handed out again by later allocations, so an id stays
//! valid for exactly as long as its node is live.

use std::convert::TryFrom;

use crate::types::{NodeId, NULL_NODE};

/// Statistics for an arena
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Number of occupied slots
    live: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Store `item` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the arena would need more than `u32::MAX - 1` slots.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.slots[free_index] = Some(item);
            free_index
        } else {
            self.slots.push(Some(item));
            self.slots.len() - 1
        };
        self.live += 1;

        match NodeId::try_from(index) {
            Ok(id) if id != NULL_NODE => id,
            _ => panic!("arena exhausted: slot {} does not fit in a NodeId", index),
        }
    }

    /// Remove the item at `id`, returning it. Freed or sentinel ids yield `None`.
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.index_of(id)?;
        let item = self.slots.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.live -= 1;
        Some(item)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.index_of(id)?;
        self.slots.get(index)?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        self.slots.get_mut(index)?.as_mut()
    }

    /// Borrow two distinct live items mutably at once.
    pub fn get2_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib || ia >= self.slots.len() || ib >= self.slots.len() {
            return None;
        }
        let (first, second) = if ia < ib {
            let (lo, hi) = self.slots.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        };
        Some((first.as_mut()?, second.as_mut()?))
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drop every item and forget all ids.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.live = 0;
    }

    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let allocated_count = self.live;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    #[inline]
    fn index_of(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        usize::try_from(id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_get() {
        let mut arena = Arena::new();
        let a = arena.allocate("a");
        let b = arena.allocate("b");

        assert_ne!(a, b);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_sentinel_is_never_live() {
        let mut arena: Arena<i32> = Arena::new();
        arena.allocate(1);

        assert!(arena.get(NULL_NODE).is_none());
        assert!(arena.get_mut(NULL_NODE).is_none());
        assert!(arena.deallocate(NULL_NODE).is_none());
    }

    #[test]
    fn test_deallocate_reuses_slot() {
        let mut arena = Arena::new();
        let a = arena.allocate(10);
        let _b = arena.allocate(20);

        assert_eq!(arena.deallocate(a), Some(10));
        assert_eq!(arena.deallocate(a), None);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.len(), 1);

        let c = arena.allocate(30);
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&30));
        assert_eq!(arena.stats().free_count, 0);
    }

    #[test]
    fn test_get2_mut_disjoint() {
        let mut arena = Arena::new();
        let a = arena.allocate(1);
        let b = arena.allocate(2);

        {
            let (x, y) = arena.get2_mut(b, a).unwrap();
            std::mem::swap(x, y);
        }
        assert_eq!(arena.get(a), Some(&2));
        assert_eq!(arena.get(b), Some(&1));

        assert!(arena.get2_mut(a, a).is_none());
        assert!(arena.get2_mut(a, NULL_NODE).is_none());
    }

    #[test]
    fn test_stats_and_clear() {
        let mut arena = Arena::with_capacity(8);
        let ids: Vec<_> = (0..4).map(|i| arena.allocate(i)).collect();
        arena.deallocate(ids[1]);

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 1);
        assert!(stats.total_capacity >= 4);
        assert!((stats.fragmentation - 0.25).abs() < f64::EPSILON);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.stats().allocated_count, 0);
    }
}

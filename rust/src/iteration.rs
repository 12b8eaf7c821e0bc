//! Iterator implementations for BPlusTreeIndex.
//!
//! Both iterators walk the leaf chain from the leftmost leaf. Each call to
//! `leaves()` or `keys()` starts a fresh walk.

use crate::types::{BPlusTreeIndex, NodeId, NULL_NODE};
use std::fmt;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the key runs of the leaves, left to right.
pub struct LeafIterator<'a, K> {
    tree: &'a BPlusTreeIndex<K>,
    current_leaf_id: NodeId,
}

/// Iterator over all keys in non-decreasing order.
pub struct KeyIterator<'a, K> {
    leaves: LeafIterator<'a, K>,
    current: std::slice::Iter<'a, K>,
}

// ============================================================================
// BPLUSTREE ITERATOR METHODS
// ============================================================================

impl<K: Ord + Clone> BPlusTreeIndex<K> {
    /// Returns an iterator over each leaf's keys in chain order.
    pub fn leaves(&self) -> LeafIterator<'_, K> {
        LeafIterator::new(self)
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K> {
        KeyIterator {
            leaves: self.leaves(),
            current: <&[K]>::default().iter(),
        }
    }

    /// Collect the keys of every leaf, one group per leaf.
    ///
    /// The groups come from the leaf chain, so their concatenation is the
    /// full sorted key sequence. An empty index yields no groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTreeIndex;
    ///
    /// let mut index = BPlusTreeIndex::new(3).unwrap();
    /// index.extend([3, 1, 2]);
    /// assert_eq!(index.display(), vec![vec![1], vec![2, 3]]);
    /// ```
    pub fn display(&self) -> Vec<Vec<K>> {
        self.leaves().map(|keys| keys.to_vec()).collect()
    }
}

// ============================================================================
// LEAFITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, K: Ord + Clone> LeafIterator<'a, K> {
    pub fn new(tree: &'a BPlusTreeIndex<K>) -> Self {
        Self {
            tree,
            current_leaf_id: tree.get_first_leaf_id().unwrap_or(NULL_NODE),
        }
    }
}

impl<'a, K: Ord + Clone> Iterator for LeafIterator<'a, K> {
    type Item = &'a [K];

    fn next(&mut self) -> Option<Self::Item> {
        let leaf = self.tree.get_leaf(self.current_leaf_id)?;
        self.current_leaf_id = leaf.next;
        Some(leaf.keys())
    }
}

impl<'a, K: Ord + Clone> Iterator for KeyIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.current.next() {
                return Some(key);
            }
            self.current = self.leaves.next()?.iter();
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

/// Renders the leaf groups separated by spaces, e.g. `[1 2] [3 5 8]`.
impl<K: Ord + Clone + fmt::Display> fmt::Display for BPlusTreeIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keys) in self.leaves().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for (j, key) in keys.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", key)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

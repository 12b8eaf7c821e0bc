//! GET operations for BPlusTreeIndex.
//!
//! This module contains the read operations for the B+ tree: point search,
//! leaf lookup, and the arena accessors for both node kinds.

use crate::types::{BPlusTreeIndex, NodeId, NodeRef};

arena_accessors!(leaf, LeafNode, leaf_arena);
arena_accessors!(branch, BranchNode, branch_arena);

impl<K: Ord + Clone> BPlusTreeIndex<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check whether `key` is stored in the index.
    ///
    /// Descends with the same right-biased routing as `insert`, then scans the
    /// leaf for an exact match. An empty index never contains anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTreeIndex;
    ///
    /// let mut index = BPlusTreeIndex::new(3).unwrap();
    /// assert!(!index.search(&1));
    ///
    /// index.insert(1);
    /// assert!(index.search(&1));
    /// assert!(!index.search(&2));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        self.find_leaf_for_key(key)
            .and_then(|leaf_id| self.get_leaf(leaf_id))
            .is_some_and(|leaf| leaf.contains(key))
    }

    /// Alias of `search` matching the std collections naming.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key)
    }

    /// Returns the smallest key in the index.
    pub fn first(&self) -> Option<&K> {
        self.keys().next()
    }

    /// Returns the largest key in the index.
    pub fn last(&self) -> Option<&K> {
        self.leaves().last().and_then(|keys| keys.last())
    }

    // ============================================================================
    // PRIVATE HELPER METHODS FOR GET OPERATIONS
    // ============================================================================

    /// Find the leaf a search for `key` ends in.
    pub(crate) fn find_leaf_for_key(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root?;

        loop {
            match current {
                NodeRef::Leaf(leaf_id) => return Some(leaf_id),
                NodeRef::Branch(branch_id) => {
                    current = self.get_branch(branch_id)?.get_child(key)?;
                }
            }
        }
    }
}

//! INSERT operations for BPlusTreeIndex.
//!
//! This module contains key insertion, the split cascade, and tree growth.
//! Every split learns its parent from the path recorded on the way down,
//! never by searching the tree again.

use crate::error::{BPlusTreeError, BTreeResultExt, ModifyResult, TreeResult};
use crate::types::{BPlusTreeIndex, LeafNode, NodeId, NodeRef, PathEntry};

impl<K: Ord + Clone> BPlusTreeIndex<K> {
    /// Insert a key into the index.
    ///
    /// Duplicate keys are kept; each insert adds one more entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTreeIndex;
    ///
    /// let mut index = BPlusTreeIndex::new(3).unwrap();
    /// index.insert(42);
    /// assert!(index.search(&42));
    /// assert_eq!(index.display(), vec![vec![42]]);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.insert_internal(key).or_default_with_log()
    }

    /// Insert with invariant validation before and after the insert.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.check_invariants_detailed()
            .with_context("before insert")?;

        self.insert_internal(key)?;

        self.check_invariants_detailed().with_context("after insert")
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Insert `key` and run the whole split cascade before returning.
    fn insert_internal(&mut self, key: K) -> TreeResult<()> {
        let Some(root) = self.root else {
            let leaf_id = self.allocate_leaf(LeafNode::with_key(self.order, key));
            self.root = Some(NodeRef::Leaf(leaf_id));
            return Ok(());
        };

        let (leaf_id, mut path) = self.find_leaf_with_path(root, &key)?;

        let leaf = self
            .get_leaf_mut(leaf_id)
            .ok_or_else(|| BPlusTreeError::corrupted_tree("Leaf arena", "missing target leaf"))?;
        leaf.insert_key(key);
        if !leaf.is_overfull() {
            return Ok(());
        }

        let (mut separator, mut new_child) = self.split_leaf(leaf_id)?;
        let mut split_child = NodeRef::Leaf(leaf_id);

        while let Some((parent_id, child_index)) = path.pop() {
            let parent = self.get_branch_mut(parent_id).ok_or_else(|| {
                BPlusTreeError::corrupted_tree("Branch arena", "missing ancestor on insert path")
            })?;
            parent.insert_child(child_index, separator, new_child);
            if !parent.is_overfull() {
                return Ok(());
            }

            (separator, new_child) = self.split_branch(parent_id)?;
            split_child = NodeRef::Branch(parent_id);
        }

        // The split reached the root.
        self.grow_root(split_child, separator, new_child);
        log::debug!("root split, tree height is now {}", self.height());
        Ok(())
    }

    /// Descend from `root` to the leaf responsible for `key`, recording each
    /// branch visited and the child index taken from it.
    fn find_leaf_with_path(&self, root: NodeRef, key: &K) -> TreeResult<(NodeId, Vec<PathEntry>)> {
        let mut path = Vec::new();
        let mut current = root;

        loop {
            match current {
                NodeRef::Leaf(leaf_id) => return Ok((leaf_id, path)),
                NodeRef::Branch(branch_id) => {
                    let branch = self.get_branch(branch_id).ok_or_else(|| {
                        BPlusTreeError::corrupted_tree("Branch arena", "missing branch on descent")
                    })?;
                    let child_index = branch.find_child_index(key);
                    current = *branch.children.get(child_index).ok_or_else(|| {
                        BPlusTreeError::corrupted_tree("Branch", "child index out of range")
                    })?;
                    path.push((branch_id, child_index));
                }
            }
        }
    }

    /// Split an overfull leaf and link the new right sibling into the chain.
    /// Returns the separator to copy into the parent and the sibling.
    fn split_leaf(&mut self, leaf_id: NodeId) -> TreeResult<(K, NodeRef)> {
        let leaf = self
            .get_leaf_mut(leaf_id)
            .ok_or_else(|| BPlusTreeError::corrupted_tree("Leaf arena", "missing leaf to split"))?;
        let right = leaf.split();
        let separator = right
            .first_key()
            .cloned()
            .ok_or_else(|| BPlusTreeError::data_integrity("leaf split", "empty right half"))?;

        let right_id = self.allocate_leaf(right);
        if let Some(leaf) = self.get_leaf_mut(leaf_id) {
            leaf.next = right_id;
        }

        log::trace!("split leaf {} into {}", leaf_id, right_id);
        Ok((separator, NodeRef::Leaf(right_id)))
    }

    /// Split an overfull branch. Returns the separator moved up and the new
    /// right sibling.
    fn split_branch(&mut self, branch_id: NodeId) -> TreeResult<(K, NodeRef)> {
        let branch = self.get_branch_mut(branch_id).ok_or_else(|| {
            BPlusTreeError::corrupted_tree("Branch arena", "missing branch to split")
        })?;
        let (separator, right) = branch.split();

        let right_id = self.allocate_branch(right);
        log::trace!("split branch {} into {}", branch_id, right_id);
        Ok((separator, NodeRef::Branch(right_id)))
    }
}

impl<K: Ord + Clone> Extend<K> for BPlusTreeIndex<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

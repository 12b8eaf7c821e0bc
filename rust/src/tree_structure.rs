//! Tree structure management operations for BPlusTreeIndex.
//!
//! This module contains tree-level operations that look at the overall shape:
//! size queries, height, node counting and clearing.

use crate::types::{BPlusTreeIndex, NodeId, NodeRef};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K: Ord + Clone> BPlusTreeIndex<K> {
    /// Returns the order this index was built with.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the root node, or `None` for an empty index.
    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    /// Returns the number of keys in the index, counting duplicates.
    pub fn len(&self) -> usize {
        self.root.map_or(0, |root| self.len_recursive(&root))
    }

    fn len_recursive(&self, node: &NodeRef) -> usize {
        match node {
            NodeRef::Leaf(id) => self.get_leaf(*id).map(|leaf| leaf.len()).unwrap_or(0),
            NodeRef::Branch(id) => self
                .get_branch(*id)
                .map(|branch| {
                    branch
                        .children
                        .iter()
                        .map(|child| self.len_recursive(child))
                        .sum()
                })
                .unwrap_or(0),
        }
    }

    /// Returns true if the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns true if the root is a leaf node.
    pub fn is_leaf_root(&self) -> bool {
        matches!(self.root, Some(NodeRef::Leaf(_)))
    }

    /// Number of levels from the root to the leaves; 0 for an empty index.
    ///
    /// All leaves sit at the same depth, so following the first child is enough.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;

        while let Some(node) = current {
            height += 1;
            current = match node {
                NodeRef::Leaf(_) => None,
                NodeRef::Branch(id) => self
                    .get_branch(id)
                    .and_then(|branch| branch.children.first().copied()),
            };
        }
        height
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        self.count_nodes_in_tree().0
    }

    /// Count the leaf and branch nodes reachable from the root.
    pub fn count_nodes_in_tree(&self) -> (usize, usize) {
        self.root
            .map_or((0, 0), |root| self.count_nodes_recursive(&root))
    }

    fn count_nodes_recursive(&self, node: &NodeRef) -> (usize, usize) {
        match node {
            NodeRef::Leaf(_) => (1, 0),
            NodeRef::Branch(id) => {
                if let Some(branch) = self.get_branch(*id) {
                    let mut total_leaves = 0;
                    let mut total_branches = 1; // Count this branch

                    for child in &branch.children {
                        let (child_leaves, child_branches) = self.count_nodes_recursive(child);
                        total_leaves += child_leaves;
                        total_branches += child_branches;
                    }

                    (total_leaves, total_branches)
                } else {
                    // Invalid branch reference
                    (0, 0)
                }
            }
        }
    }

    /// Remove every key, returning the index to its empty state.
    pub fn clear(&mut self) {
        self.leaf_arena.clear();
        self.branch_arena.clear();
        self.root = None;
    }

    // ============================================================================
    // TREE NAVIGATION HELPERS
    // ============================================================================

    /// Get the ID of the first (leftmost) leaf in the tree
    pub fn get_first_leaf_id(&self) -> Option<NodeId> {
        let mut current = self.root?;

        loop {
            match current {
                NodeRef::Leaf(leaf_id) => return Some(leaf_id),
                NodeRef::Branch(branch_id) => {
                    current = *self.get_branch(branch_id)?.children.first()?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_shape() {
        let index = BPlusTreeIndex::<i32>::new(3).unwrap();
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
        assert!(!index.is_leaf_root());
        assert_eq!(index.height(), 0);
        assert_eq!(index.leaf_count(), 0);
        assert_eq!(index.count_nodes_in_tree(), (0, 0));
        assert_eq!(index.get_first_leaf_id(), None);
    }

    #[test]
    fn test_shape_after_inserts() {
        let mut index = BPlusTreeIndex::new(3).unwrap();
        index.extend(1..=3);

        assert_eq!(index.len(), 3);
        assert_eq!(index.height(), 2);
        assert_eq!(index.count_nodes_in_tree(), (2, 1));
        assert_eq!(index.order(), 3);

        let first = index.get_first_leaf_id().unwrap();
        assert_eq!(index.get_leaf(first).unwrap().keys(), &[1]);
    }

    #[test]
    fn test_len_counts_duplicates() {
        let mut index = BPlusTreeIndex::new(4).unwrap();
        index.extend([1, 1, 2, 2, 2, 3]);
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn test_clear() {
        let mut index = BPlusTreeIndex::new(3).unwrap();
        index.extend(0..100);
        assert!(index.height() > 2);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.height(), 0);
        assert!(!index.search(&5));
        assert_eq!(index.leaf_arena_stats().allocated_count, 0);

        index.insert(5);
        assert_eq!(index.display(), vec![vec![5]]);
    }
}

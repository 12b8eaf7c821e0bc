//! Construction and initialization logic for BPlusTreeIndex and nodes.
//!
//! This module contains order validation, the tree constructors and the node
//! constructors used by insertion and splitting.

use crate::arena::NodeArena;
use crate::error::{BPlusTreeError, BTreeResult, InitResult};
use crate::types::{BPlusTreeIndex, BranchNode, LeafNode, NodeRef, DEFAULT_ORDER, MIN_ORDER, NULL_NODE};

impl<K: Ord + Clone> BPlusTreeIndex<K> {
    /// Create an empty B+ tree index with the given order.
    ///
    /// # Arguments
    ///
    /// * `order` - Number of keys at which a node splits (minimum 3)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BPlusTreeIndex)` if the order is valid, or
    /// `Err(BPlusTreeError::InvalidConfiguration)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::BPlusTreeIndex;
    ///
    /// let index = BPlusTreeIndex::<i64>::new(4).unwrap();
    /// assert!(index.is_empty());
    ///
    /// assert!(BPlusTreeIndex::<i64>::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validation::validate_order(order)?;

        Ok(Self {
            order,
            root: None,
            leaf_arena: NodeArena::new(),
            branch_arena: NodeArena::new(),
        })
    }

    /// Create an empty index with `DEFAULT_ORDER`.
    pub fn with_default_order() -> InitResult<Self> {
        Self::new(DEFAULT_ORDER)
    }

    /// Create an index sized for roughly `expected_keys` keys.
    ///
    /// The order comes from `recommended_order` and both arenas are
    /// pre-allocated for the node counts that many keys produce.
    pub fn with_expected_keys(expected_keys: usize) -> InitResult<Self> {
        let order = validation::recommended_order(expected_keys);
        // Leaves end up between half and completely full after splits.
        let leaves = expected_keys / (order / 2).max(1) + 1;

        let mut index = Self::new(order)?;
        index.leaf_arena = NodeArena::with_capacity(leaves);
        index.branch_arena = NodeArena::with_capacity(leaves / (order / 2).max(1) + 1);
        Ok(index)
    }

    /// Replace the root with a new branch over `left` and `right`.
    ///
    /// This is the only place the tree grows in height.
    pub(crate) fn grow_root(&mut self, left: NodeRef, separator: K, right: NodeRef) -> NodeRef {
        let new_root = BranchNode::with_children(self.order, separator, left, right);
        let root = NodeRef::Branch(self.allocate_branch(new_root));
        self.root = Some(root);
        root
    }
}

impl<K> LeafNode<K> {
    /// Creates a new empty leaf node with the specified order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bplus_index::LeafNode;
    ///
    /// let leaf: LeafNode<i32> = LeafNode::new(4);
    /// assert!(leaf.is_empty());
    /// ```
    pub fn new(order: usize) -> Self {
        // Room for the transient overflow key before a split.
        Self {
            order,
            keys: Vec::with_capacity(order),
            next: NULL_NODE,
        }
    }

    /// Creates a leaf holding a single key.
    pub fn with_key(order: usize, key: K) -> Self {
        let mut leaf = Self::new(order);
        leaf.keys.push(key);
        leaf
    }
}

impl<K> BranchNode<K> {
    /// Creates a new empty branch node with the specified order.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            keys: Vec::with_capacity(order),
            children: Vec::with_capacity(order + 1),
        }
    }

    /// Creates a branch with one separator and two children.
    pub fn with_children(order: usize, separator: K, left: NodeRef, right: NodeRef) -> Self {
        let mut branch = Self::new(order);
        branch.keys.push(separator);
        branch.children.push(left);
        branch.children.push(right);
        branch
    }
}

impl<K: Ord + Clone> Default for BPlusTreeIndex<K> {
    /// Create an index with `DEFAULT_ORDER`.
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            root: None,
            leaf_arena: NodeArena::new(),
            branch_arena: NodeArena::new(),
        }
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an order is usable for B+ tree nodes.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` if valid, `Err(BPlusTreeError::InvalidConfiguration)` otherwise.
    pub fn validate_order(order: usize) -> BTreeResult<()> {
        if order < MIN_ORDER {
            Err(BPlusTreeError::invalid_configuration(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }

    /// Get the recommended order for a given expected number of keys.
    ///
    /// # Returns
    ///
    /// Recommended order (always >= MIN_ORDER)
    pub fn recommended_order(expected_keys: usize) -> usize {
        if expected_keys < 100 {
            4
        } else if expected_keys < 10_000 {
            DEFAULT_ORDER
        } else if expected_keys < 1_000_000 {
            32
        } else {
            64
        }
    }
}

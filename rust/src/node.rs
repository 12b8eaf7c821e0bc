//! Node implementations for BPlusTreeIndex.
//!
//! This module contains the node-level pieces of insertion and lookup:
//! sorted insertion, child routing, and splitting for leaves and branches.
//! Arena allocation and linking of split siblings happens in the tree.

use crate::types::{BranchNode, LeafNode, NodeId, NodeRef, NULL_NODE};

// ============================================================================
// LEAF NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord + Clone> LeafNode<K> {
    /// Returns the number of keys in this leaf.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this leaf node is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the keys in this leaf node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// ID of the next leaf in the chain, if any.
    pub fn next_leaf(&self) -> Option<NodeId> {
        (self.next != NULL_NODE).then_some(self.next)
    }

    pub fn first_key(&self) -> Option<&K> {
        self.keys.first()
    }

    pub fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    /// Linear scan for an exact match.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Insert a key at its sorted position, after any equal keys.
    pub fn insert_key(&mut self, key: K) {
        let index = self.keys.partition_point(|k| k <= &key);
        self.keys.insert(index, key);
    }

    /// Returns true once the leaf holds `order` keys and must split.
    pub fn is_overfull(&self) -> bool {
        self.keys.len() >= self.order
    }

    /// Split this leaf node, returning the new right node.
    ///
    /// The right node takes over this leaf's `next` pointer. This leaf's own
    /// `next` is left for the caller to point at the right node once it has
    /// an arena ID.
    pub fn split(&mut self) -> LeafNode<K> {
        let mid = self.keys.len() / 2;
        let right_keys = self.keys.split_off(mid);

        LeafNode {
            order: self.order,
            keys: right_keys,
            next: self.next,
        }
    }
}

// ============================================================================
// BRANCH NODE IMPLEMENTATION
// ============================================================================

impl<K: Ord + Clone> BranchNode<K> {
    /// Returns the number of separator keys in this branch.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the separator keys in this branch.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Get the children of this branch.
    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Find the index of the child that should contain the given key.
    ///
    /// Routing is right-biased: a key equal to a separator goes to the
    /// child on the separator's right.
    pub fn find_child_index(&self, key: &K) -> usize {
        self.keys.partition_point(|separator| separator <= key)
    }

    /// Get the child node for a given key.
    pub fn get_child(&self, key: &K) -> Option<NodeRef> {
        self.children.get(self.find_child_index(key)).copied()
    }

    /// Insert a separator and the child to its right after a split of
    /// `children[child_index]`.
    pub fn insert_child(&mut self, child_index: usize, separator: K, child: NodeRef) {
        self.keys.insert(child_index, separator);
        self.children.insert(child_index + 1, child);
    }

    /// Returns true once the branch holds `order` keys and must split.
    pub fn is_overfull(&self) -> bool {
        self.keys.len() >= self.order
    }

    /// Split this branch, returning the separator to move up and the new
    /// right node.
    ///
    /// The separator is removed from both halves; the left half keeps one
    /// more child than keys, and so does the right.
    pub fn split(&mut self) -> (K, BranchNode<K>) {
        let mid = self.keys.len() / 2;
        let mut right_keys = self.keys.split_off(mid);
        let separator = right_keys.remove(0);
        let right_children = self.children.split_off(mid + 1);

        let right = BranchNode {
            order: self.order,
            keys: right_keys,
            children: right_children,
        };
        (separator, right)
    }
}

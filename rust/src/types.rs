//! Core types and data structures for BPlusTreeIndex.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B+ tree index.

use crate::arena::NodeArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum order for any B+ tree index. Smaller orders cannot keep both
/// halves of a split non-empty.
pub const MIN_ORDER: usize = 3;

/// Order used by `with_default_order` and `Default`.
pub const DEFAULT_ORDER: usize = 16;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Sentinel for "no node", used by the leaf chain.
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B+ tree index over ordered keys.
///
/// Every key lives in a leaf. Internal (branch) nodes only hold separator keys
/// that route a search to the right child, and the leaves are chained left to
/// right so the whole key sequence can be read without revisiting branches.
///
/// The tree starts empty. The first insert creates a root leaf, and the tree
/// only ever grows in height at the root.
///
/// # Examples
///
/// ```
/// use bplus_index::BPlusTreeIndex;
///
/// let mut index = BPlusTreeIndex::new(3).unwrap();
/// for key in [5, 2, 8, 1, 9, 3] {
///     index.insert(key);
/// }
///
/// assert!(index.search(&8));
/// assert!(!index.search(&7));
///
/// let keys: Vec<i64> = index.display().into_iter().flatten().collect();
/// assert_eq!(keys, vec![1, 2, 3, 5, 8, 9]);
/// ```
///
/// # Order
///
/// The order is the number of keys at which a node must split, so every node
/// holds at most `order - 1` keys once an insert has returned.
///
/// - Minimum order: 3 (enforced)
/// - Default order: 16
///
/// # Concurrency
///
/// The index is a plain single-threaded structure. Share it between threads
/// only behind one exclusive lock, since a split touches several nodes.
#[derive(Debug)]
pub struct BPlusTreeIndex<K = i64> {
    /// Number of keys at which a node splits.
    pub(crate) order: usize,
    /// The root node, or `None` while the tree is empty.
    pub(crate) root: Option<NodeRef>,
    /// Arena storage for leaf nodes.
    pub(crate) leaf_arena: NodeArena<LeafNode<K>>,
    /// Arena storage for branch nodes.
    pub(crate) branch_arena: NodeArena<BranchNode<K>>,
}

/// Leaf node holding a sorted run of keys.
#[derive(Debug, Clone)]
pub struct LeafNode<K> {
    /// Number of keys at which this node splits.
    pub(crate) order: usize,
    /// Sorted keys. Duplicates sit next to each other.
    pub(crate) keys: Vec<K>,
    /// Next leaf in key order, or `NULL_NODE` for the last leaf.
    pub(crate) next: NodeId,
}

/// Internal (branch) node containing separator keys and child pointers.
#[derive(Debug, Clone)]
pub struct BranchNode<K> {
    /// Number of keys at which this node splits.
    pub(crate) order: usize,
    /// Sorted separator keys.
    pub(crate) keys: Vec<K>,
    /// Child nodes, always one more than `keys`.
    pub(crate) children: Vec<NodeRef>,
}

// ============================================================================
// ENUMS
// ============================================================================

/// Reference to a node in one of the two arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    Leaf(NodeId),
    Branch(NodeId),
}

impl NodeRef {
    /// Return the raw node ID.
    pub fn id(&self) -> NodeId {
        match *self {
            NodeRef::Leaf(id) => id,
            NodeRef::Branch(id) => id,
        }
    }

    /// Returns true if this reference points to a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeRef::Leaf(_))
    }
}

/// Entry on the descent path: a branch and the child index taken from it.
pub(crate) type PathEntry = (NodeId, usize);

//! In-memory B+ tree index with insertion, point search and in-order
//! traversal of the leaf chain.
//!
//! The index stores ordered keys (64-bit integers by default). Branch nodes
//! route searches with separator keys; leaves hold the keys and are chained
//! left to right. Nodes live in two typed arenas and refer to each other by
//! `NodeId`.
//!
//! ```
//! use bplus_index::BPlusTreeIndex;
//!
//! let mut index = BPlusTreeIndex::new(3).unwrap();
//! index.extend([5, 2, 8, 1, 9, 3]);
//!
//! assert!(index.search(&8));
//! assert!(!index.search(&7));
//! assert_eq!(index.to_string(), "[1] [2 3] [5] [8 9]");
//! assert_eq!(index.height(), 3);
//! ```

#[macro_use]
mod macros;

mod arena;
mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod tree_structure;
mod types;
mod validation;

pub use arena::{ArenaStats, NodeArena};
pub use construction::validation::{recommended_order, validate_order};
pub use error::{
    BPlusTreeError, BTreeResult, BTreeResultExt, InitResult, ModifyResult,
};
pub use iteration::{KeyIterator, LeafIterator};
pub use types::{
    BPlusTreeIndex, BranchNode, LeafNode, NodeId, NodeRef, DEFAULT_ORDER, MIN_ORDER, NULL_NODE,
};

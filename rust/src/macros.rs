//! Macros shared across the tree modules.

/// Generates the arena accessors for one node kind.
///
/// `arena_accessors!(leaf, LeafNode, leaf_arena)` expands to
/// `allocate_leaf`, `get_leaf`, `get_leaf_mut` and `leaf_arena_stats`.
macro_rules! arena_accessors {
    ($kind:ident, $node:ident, $arena:ident) => {
        paste::paste! {
            impl<K: Ord + Clone> $crate::types::BPlusTreeIndex<K> {
                /// Allocate a new node in the arena and return its ID.
                #[inline]
                pub(crate) fn [<allocate_ $kind>](
                    &mut self,
                    node: $crate::types::$node<K>,
                ) -> $crate::types::NodeId {
                    self.$arena.allocate(node)
                }

                /// Get a reference to a node in the arena.
                #[inline]
                pub fn [<get_ $kind>](
                    &self,
                    id: $crate::types::NodeId,
                ) -> Option<&$crate::types::$node<K>> {
                    self.$arena.get(id)
                }

                /// Get a mutable reference to a node in the arena.
                #[inline]
                pub(crate) fn [<get_ $kind _mut>](
                    &mut self,
                    id: $crate::types::NodeId,
                ) -> Option<&mut $crate::types::$node<K>> {
                    self.$arena.get_mut(id)
                }

                /// Get statistics for this node kind's arena.
                pub fn [<$kind _arena_stats>](&self) -> $crate::arena::ArenaStats {
                    self.$arena.stats()
                }
            }
        }
    };
}

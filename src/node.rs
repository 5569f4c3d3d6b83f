//! AVL node record and slot handles.

use std::fmt;

use safe_bump::Idx;

/// Arena slot: a live node, or `None` while the slot sits on the free list.
pub type Slot<K, V> = Option<Node<K, V>>;

/// Handle to a node slot in the store.
pub type NodeIdx<K, V> = Idx<Slot<K, V>>;

/// Handle to an optional subtree.
pub type Link<K, V> = Option<NodeIdx<K, V>>;

/// AVL tree node.
///
/// A node owns its key and value. Rotations and successor promotion relink
/// nodes in place, so an entry stays in the slot it was inserted into until
/// it is removed.
///
/// Invariant: `height == 1 + max(height(left), height(right))`.
pub struct Node<K, V> {
    /// Entry key.
    pub key: K,
    /// Entry value.
    pub value: V,
    /// Left subtree: all keys compare less than `key`.
    pub left: Link<K, V>,
    /// Right subtree: all keys compare greater than `key`.
    pub right: Link<K, V>,
    /// Cached subtree height, `1` for a leaf.
    pub height: u32,
}

impl<K, V> Node<K, V> {
    /// Builds a leaf (height 1).
    #[must_use]
    pub const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }
}

// Manual impl: no `K: Debug, V: Debug` bound.
impl<K, V> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("height", &self.height)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish_non_exhaustive()
    }
}

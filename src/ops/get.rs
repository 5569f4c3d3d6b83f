//! Lookup operations — descent by key comparison.

use std::cmp::Ordering;

use crate::node::{Link, NodeIdx};
use crate::store::AvlStore;

/// Searches for `key` in the subtree rooted at `link`.
///
/// Returns the index of the node holding the key, if any.
pub fn find<K, V, S>(store: &S, mut link: Link<K, V>, key: &K) -> Option<NodeIdx<K, V>>
where
    K: Ord,
    S: AvlStore<K, V>,
{
    while let Some(idx) = link {
        let node = store.get_node(idx);
        link = match key.cmp(&node.key) {
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
            Ordering::Equal => return Some(idx),
        };
    }
    None
}

/// Returns the leftmost node of the subtree rooted at `idx`.
pub fn minimum<K, V, S: AvlStore<K, V>>(store: &S, mut idx: NodeIdx<K, V>) -> NodeIdx<K, V> {
    while let Some(left) = store.get_node(idx).left {
        idx = left;
    }
    idx
}

/// Returns the rightmost node of the subtree rooted at `idx`.
pub fn maximum<K, V, S: AvlStore<K, V>>(store: &S, mut idx: NodeIdx<K, V>) -> NodeIdx<K, V> {
    while let Some(right) = store.get_node(idx).right {
        idx = right;
    }
    idx
}

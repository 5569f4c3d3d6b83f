//! Structural invariant checks used by the diagnostic API.

use std::cmp;

use crate::node::Link;
use crate::ops::balance::balance_factor;
use crate::store::AvlStore;

/// Returns `true` if every node in the subtree has `|balance factor| <= 1`.
pub fn is_balanced<K, V, S: AvlStore<K, V>>(store: &S, link: Link<K, V>) -> bool {
    let Some(idx) = link else {
        return true;
    };
    let node = store.get_node(idx);
    balance_factor(store, node).abs() <= 1
        && is_balanced(store, node.left)
        && is_balanced(store, node.right)
}

/// Returns `true` if every cached height equals `1 + max(children)`.
///
/// Heights are recomputed from the leaves rather than trusted, so a stale
/// cache anywhere below a node is detected.
pub fn heights_consistent<K, V, S: AvlStore<K, V>>(store: &S, link: Link<K, V>) -> bool {
    actual_height(store, link).is_some()
}

/// Returns the true height of the subtree, or `None` on the first node
/// whose cached height disagrees.
fn actual_height<K, V, S: AvlStore<K, V>>(store: &S, link: Link<K, V>) -> Option<u32> {
    let Some(idx) = link else {
        return Some(0);
    };
    let node = store.get_node(idx);
    let left = actual_height(store, node.left)?;
    let right = actual_height(store, node.right)?;
    let expected = 1 + cmp::max(left, right);
    (node.height == expected).then_some(expected)
}

/// Returns `true` if keys in in-order sequence are strictly increasing.
pub fn is_ordered<K: Ord>(in_order_keys: &[&K]) -> bool {
    in_order_keys.windows(2).all(|pair| pair[0] < pair[1])
}

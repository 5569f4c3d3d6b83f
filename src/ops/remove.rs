//! Removal operation — delete with successor promotion and bottom-up
//! rebalancing.

use std::cmp::Ordering;

use crate::node::{Link, Node, NodeIdx};
use crate::ops::balance::rebalance;
use crate::store::AvlStore;

/// Outcome of a recursive remove.
pub enum RemoveOutcome<K, V> {
    /// Key was not found — tree unchanged.
    NotFound,
    /// Key was removed.
    Removed {
        /// New root of the modified subtree, or `None` if the subtree is now empty.
        node: Link<K, V>,
        /// The removed node, already released from the store.
        removed: Node<K, V>,
    },
}

/// Removes `key` from the subtree rooted at `link`.
///
/// Nothing is touched when the key is absent.
pub fn remove_recursive<K, V, S>(store: &mut S, link: Link<K, V>, key: &K) -> RemoveOutcome<K, V>
where
    K: Ord,
    S: AvlStore<K, V>,
{
    let Some(idx) = link else {
        return RemoveOutcome::NotFound;
    };
    let node = store.get_node(idx);
    let (left, right) = (node.left, node.right);

    match key.cmp(&node.key) {
        Ordering::Less => match remove_recursive(store, left, key) {
            RemoveOutcome::NotFound => RemoveOutcome::NotFound,
            RemoveOutcome::Removed { node, removed } => {
                store.get_node_mut(idx).left = node;
                RemoveOutcome::Removed {
                    node: Some(rebalance(store, idx)),
                    removed,
                }
            }
        },
        Ordering::Greater => match remove_recursive(store, right, key) {
            RemoveOutcome::NotFound => RemoveOutcome::NotFound,
            RemoveOutcome::Removed { node, removed } => {
                store.get_node_mut(idx).right = node;
                RemoveOutcome::Removed {
                    node: Some(rebalance(store, idx)),
                    removed,
                }
            }
        },
        Ordering::Equal => RemoveOutcome::Removed {
            node: unlink(store, left, right),
            removed: store.free_node(idx),
        },
    }
}

/// Detaches the minimum node of the subtree rooted at `idx`.
///
/// Returns the remaining subtree (rebalanced on the way up) and the
/// detached node, whose slot stays live.
pub fn remove_min_recursive<K, V, S: AvlStore<K, V>>(
    store: &mut S,
    idx: NodeIdx<K, V>,
) -> (Link<K, V>, NodeIdx<K, V>) {
    let node = store.get_node(idx);
    let Some(left) = node.left else {
        return (node.right, idx);
    };
    let (rest, min) = remove_min_recursive(store, left);
    store.get_node_mut(idx).left = rest;
    (Some(rebalance(store, idx)), min)
}

/// Detaches the maximum node of the subtree rooted at `idx`.
///
/// Mirror image of [`remove_min_recursive`].
pub fn remove_max_recursive<K, V, S: AvlStore<K, V>>(
    store: &mut S,
    idx: NodeIdx<K, V>,
) -> (Link<K, V>, NodeIdx<K, V>) {
    let node = store.get_node(idx);
    let Some(right) = node.right else {
        return (node.left, idx);
    };
    let (rest, max) = remove_max_recursive(store, right);
    store.get_node_mut(idx).right = rest;
    (Some(rebalance(store, idx)), max)
}

/// Computes the subtree that replaces a matched node with children `left`
/// and `right`.
///
/// With at most one child the child is spliced in directly. With two
/// children the in-order successor (minimum of `right`) is detached and
/// relinked in the matched node's place over `left` and the remainder of
/// `right`.
fn unlink<K, V, S: AvlStore<K, V>>(store: &mut S, left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let (rest, successor) = remove_min_recursive(store, right);
            let promoted = store.get_node_mut(successor);
            promoted.left = Some(left);
            promoted.right = rest;
            Some(rebalance(store, successor))
        }
    }
}

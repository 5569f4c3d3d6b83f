//! Height bookkeeping and rotation dispatch.
//!
//! Rotations relink node slots in place. No entry moves and no slot is
//! allocated or freed.

use std::cmp;

use crate::node::{Link, Node, NodeIdx};
use crate::store::AvlStore;

/// Returns the cached height of a subtree, `0` when absent.
#[inline]
pub fn height<K, V, S: AvlStore<K, V>>(store: &S, link: Link<K, V>) -> u32 {
    link.map_or(0, |idx| store.get_node(idx).height)
}

/// Returns `height(left) - height(right)` for `node`.
#[inline]
pub fn balance_factor<K, V, S: AvlStore<K, V>>(store: &S, node: &Node<K, V>) -> i64 {
    i64::from(height(store, node.left)) - i64::from(height(store, node.right))
}

/// Recomputes the cached height of `idx` from its children.
pub fn update_height<K, V, S: AvlStore<K, V>>(store: &mut S, idx: NodeIdx<K, V>) {
    let node = store.get_node(idx);
    let fresh = 1 + cmp::max(height(store, node.left), height(store, node.right));
    store.get_node_mut(idx).height = fresh;
}

/// Refreshes the height of `idx`, restores the balance property there and
/// returns the root of the resulting subtree.
///
/// The children of `idx` must be balanced, with heights differing by at
/// most two.
pub fn rebalance<K, V, S: AvlStore<K, V>>(store: &mut S, idx: NodeIdx<K, V>) -> NodeIdx<K, V> {
    update_height(store, idx);
    let node = store.get_node(idx);
    let bf = balance_factor(store, node);

    if bf > 1 {
        let Some(left) = node.left else {
            return idx;
        };
        if balance_factor(store, store.get_node(left)) < 0 {
            // LR: straighten the left child first.
            let pivot = rotate_left(store, left);
            store.get_node_mut(idx).left = Some(pivot);
        }
        // LL
        rotate_right(store, idx)
    } else if bf < -1 {
        let Some(right) = node.right else {
            return idx;
        };
        if balance_factor(store, store.get_node(right)) > 0 {
            // RL: straighten the right child first.
            let pivot = rotate_right(store, right);
            store.get_node_mut(idx).right = Some(pivot);
        }
        // RR
        rotate_left(store, idx)
    } else {
        idx
    }
}

/// Right rotation of `y` around its left child `x`.
///
/// ```text
///         y                x
///        / \              / \
///       x   T4    =>     z   y
///      / \                  / \
///     z   T3               T3  T4
/// ```
///
/// Heights are refreshed for `y` first, then `x`. Returns `x`, or `y`
/// unchanged if it has no left child.
fn rotate_right<K, V, S: AvlStore<K, V>>(store: &mut S, y: NodeIdx<K, V>) -> NodeIdx<K, V> {
    let Some(x) = store.get_node(y).left else {
        return y;
    };
    let t3 = store.get_node(x).right;
    store.get_node_mut(y).left = t3;
    store.get_node_mut(x).right = Some(y);
    update_height(store, y);
    update_height(store, x);
    x
}

/// Left rotation of `y` around its right child `x`.
///
/// ```text
///     y                    x
///    / \                  / \
///   T1  x        =>      y   z
///      / \              / \
///     T2  z            T1  T2
/// ```
///
/// Mirror image of [`rotate_right`].
fn rotate_left<K, V, S: AvlStore<K, V>>(store: &mut S, y: NodeIdx<K, V>) -> NodeIdx<K, V> {
    let Some(x) = store.get_node(y).right else {
        return y;
    };
    let t2 = store.get_node(x).left;
    store.get_node_mut(y).right = t2;
    store.get_node_mut(x).left = Some(y);
    update_height(store, y);
    update_height(store, x);
    x
}

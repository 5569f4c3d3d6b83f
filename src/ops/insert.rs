//! Insertion operation — descent, leaf attach, bottom-up rebalancing.

use std::cmp::Ordering;
use std::mem;

use crate::node::{Link, Node, NodeIdx};
use crate::ops::balance::rebalance;
use crate::store::AvlStore;

/// Outcome of a recursive insert.
pub struct InsertOutcome<K, V> {
    /// Root of the modified subtree.
    pub node: NodeIdx<K, V>,
    /// Value that was replaced, or `None` if a new key was inserted.
    pub old_value: Option<V>,
}

/// Inserts `key` → `value` into the subtree rooted at `link`.
///
/// A new key becomes a leaf and every ancestor on the way back up is
/// rebalanced. An existing key keeps its stored key and gets the new value
/// in place; heights are unchanged, so no ancestor is touched.
pub fn insert_recursive<K, V, S>(store: &mut S, link: Link<K, V>, key: K, value: V) -> InsertOutcome<K, V>
where
    K: Ord,
    S: AvlStore<K, V>,
{
    let Some(idx) = link else {
        return InsertOutcome {
            node: store.alloc_node(Node::leaf(key, value)),
            old_value: None,
        };
    };

    let node = store.get_node(idx);
    let (left, right) = (node.left, node.right);
    match key.cmp(&node.key) {
        Ordering::Less => {
            let outcome = insert_recursive(store, left, key, value);
            store.get_node_mut(idx).left = Some(outcome.node);
            finish(store, idx, outcome.old_value)
        }
        Ordering::Greater => {
            let outcome = insert_recursive(store, right, key, value);
            store.get_node_mut(idx).right = Some(outcome.node);
            finish(store, idx, outcome.old_value)
        }
        Ordering::Equal => InsertOutcome {
            node: idx,
            old_value: Some(mem::replace(&mut store.get_node_mut(idx).value, value)),
        },
    }
}

fn finish<K, V, S: AvlStore<K, V>>(store: &mut S, idx: NodeIdx<K, V>, old_value: Option<V>) -> InsertOutcome<K, V> {
    let node = if old_value.is_some() {
        // Value replacement below: shape and heights are unchanged.
        idx
    } else {
        rebalance(store, idx)
    };
    InsertOutcome { node, old_value }
}

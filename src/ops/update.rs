//! In-place value replacement — never inserts, never restructures.

use std::mem;

use crate::node::Link;
use crate::ops::get::find;
use crate::store::AvlStore;

/// Swaps the value stored under `key` for `value` and returns the old one.
///
/// Returns `None` if `key` is absent; `value` is dropped and the tree is
/// left untouched.
pub fn replace_value<K, V, S>(store: &mut S, root: Link<K, V>, key: &K, value: V) -> Option<V>
where
    K: Ord,
    S: AvlStore<K, V>,
{
    let idx = find(store, root, key)?;
    Some(mem::replace(&mut store.get_node_mut(idx).value, value))
}

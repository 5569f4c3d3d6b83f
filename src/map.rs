//! Single-threaded AVL map.

use std::fmt;
use std::ops;

use crate::arena::AvlArena;
use crate::error::{AvlError, Result};
use crate::node::{Link, NodeIdx};
use crate::ops::balance::height;
use crate::ops::get::{find, maximum, minimum};
use crate::ops::insert::insert_recursive;
use crate::ops::remove::{RemoveOutcome, remove_max_recursive, remove_min_recursive, remove_recursive};
use crate::ops::update::replace_value;
use crate::ops::validate;
use crate::store::AvlStore;
use crate::traverse::{self, Order};

/// Ordered map backed by an AVL tree in a slot arena.
///
/// Every mutation rebalances each ancestor of the edited node on the way
/// back to the root, so the height stays within `1.44 · log₂(n + 2)` under
/// any sequence of inserts and removes. A removed entry's slot goes on a
/// free list and is reused by the next insert.
pub struct AvlMap<K, V> {
    store: AvlArena<K, V>,
    root: Link<K, V>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<K, V> AvlMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: AvlArena::new(),
            root: None,
            size: 0,
        }
    }

    /// Returns the number of key-value pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree, `0` when empty.
    #[must_use]
    pub fn height(&self) -> u32 {
        height(&self.store, self.root)
    }

    /// Returns the number of node slots in the arena, live or vacant.
    ///
    /// Removed entries leave vacant slots that later inserts reuse, so this
    /// tracks the largest size the map has reached, not its history.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.slot_count()
    }

    /// Removes every entry, dropping all keys and values.
    pub fn clear(&mut self) {
        self.store = AvlArena::new();
        self.root = None;
        self.size = 0;
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::EmptyMap`] if the map is empty.
    pub fn first_key_value(&self) -> Result<(&K, &V)> {
        let root = self.root.ok_or(AvlError::EmptyMap)?;
        Ok(self.entry(minimum(&self.store, root)))
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::EmptyMap`] if the map is empty.
    pub fn last_key_value(&self) -> Result<(&K, &V)> {
        let root = self.root.ok_or(AvlError::EmptyMap)?;
        Ok(self.entry(maximum(&self.store, root)))
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::EmptyMap`] if the map is empty.
    pub fn min_key(&self) -> Result<&K> {
        self.first_key_value().map(|(k, _)| k)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::EmptyMap`] if the map is empty.
    pub fn max_key(&self) -> Result<&K> {
        self.last_key_value().map(|(k, _)| k)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (rest, min) = remove_min_recursive(&mut self.store, root);
        Some(self.detach(rest, min))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (rest, max) = remove_max_recursive(&mut self.store, root);
        Some(self.detach(rest, max))
    }

    /// Returns all entries in the given traversal order.
    #[must_use]
    pub fn traverse(&self, order: Order) -> Vec<(&K, &V)> {
        traverse::collect(&self.store, self.root, order)
    }

    /// Returns all keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.traverse(Order::In).into_iter().map(|(k, _)| k).collect()
    }

    /// Diagnostic: `true` if every node satisfies the AVL balance property.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        validate::is_balanced(&self.store, self.root)
    }

    /// Diagnostic: `true` if every cached node height matches its children.
    #[must_use]
    pub fn heights_consistent(&self) -> bool {
        validate::heights_consistent(&self.store, self.root)
    }

    fn entry(&self, idx: NodeIdx<K, V>) -> (&K, &V) {
        let node = self.store.get_node(idx);
        (&node.key, &node.value)
    }

    fn detach(&mut self, rest: Link<K, V>, idx: NodeIdx<K, V>) -> (K, V) {
        self.root = rest;
        self.size -= 1;
        let node = self.store.free_node(idx);
        (node.key, node.value)
    }
}

// ---------------------------------------------------------------------------
// Keyed operations — K: Ord
// ---------------------------------------------------------------------------

impl<K: Ord, V> AvlMap<K, V> {
    /// Returns a reference to the value associated with `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        find(&self.store, self.root, key).map(|idx| self.entry(idx))
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = find(&self.store, self.root, key)?;
        Some(&mut self.store.get_node_mut(idx).value)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        find(&self.store, self.root, key).is_some()
    }

    /// Diagnostic: `true` if the in-order key sequence is strictly increasing.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        validate::is_ordered(&self.keys())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Returns `None` if the key was new, or `Some(old_value)` if an existing
    /// value was replaced. Replacing a value keeps the stored key and leaves
    /// the tree shape untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let outcome = insert_recursive(&mut self.store, self.root, key, value);
        self.root = Some(outcome.node);
        if outcome.old_value.is_none() {
            self.size += 1;
        }
        outcome.old_value
    }

    /// Replaces the value of an existing key, returning the previous value.
    ///
    /// Never inserts.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::KeyNotFound`] if `key` is absent; the map is
    /// left unchanged and `value` is dropped.
    pub fn update(&mut self, key: &K, value: V) -> Result<V> {
        replace_value(&mut self.store, self.root, key, value).ok_or(AvlError::KeyNotFound)
    }

    /// Removes a key from the map. Returns the removed value, or `None` if
    /// the key was not present.
    ///
    /// The stored key is dropped before this returns.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        match remove_recursive(&mut self.store, self.root, key) {
            RemoveOutcome::NotFound => None,
            RemoveOutcome::Removed { node, removed } => {
                self.root = node;
                self.size -= 1;
                Some((removed.key, removed.value))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V> Default for AvlMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for AvlMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlMap")
            .field("len", &self.size)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> ops::Index<&K> for AvlMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

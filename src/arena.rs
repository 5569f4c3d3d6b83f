//! Slot arena with a free list.

use safe_bump::Arena;

use crate::node::{Node, NodeIdx, Slot};
use crate::store::AvlStore;

/// Single-threaded storage backend: an [`Arena`] of node slots plus a
/// LIFO list of vacated slots.
pub struct AvlArena<K, V> {
    slots: Arena<Slot<K, V>>,
    free: Vec<NodeIdx<K, V>>,
}

impl<K, V> AvlArena<K, V> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            slots: Arena::new(),
            free: Vec::new(),
        }
    }
}

impl<K, V> Default for AvlArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
fn vacant<K, V>(idx: NodeIdx<K, V>) -> ! {
    panic!("node handle {idx:?} points at a vacant slot")
}

impl<K, V> AvlStore<K, V> for AvlArena<K, V> {
    fn alloc_node(&mut self, node: Node<K, V>) -> NodeIdx<K, V> {
        match self.free.pop() {
            Some(idx) => {
                *self.slots.get_mut(idx) = Some(node);
                idx
            }
            None => self.slots.alloc(Some(node)),
        }
    }

    fn free_node(&mut self, idx: NodeIdx<K, V>) -> Node<K, V> {
        let Some(node) = self.slots.get_mut(idx).take() else {
            vacant(idx)
        };
        self.free.push(idx);
        node
    }

    fn get_node(&self, idx: NodeIdx<K, V>) -> &Node<K, V> {
        let Some(node) = self.slots.get(idx) else {
            vacant(idx)
        };
        node
    }

    fn get_node_mut(&mut self, idx: NodeIdx<K, V>) -> &mut Node<K, V> {
        let Some(node) = self.slots.get_mut(idx) else {
            vacant(idx)
        };
        node
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn free_count(&self) -> usize {
        self.free.len()
    }
}

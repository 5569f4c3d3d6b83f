//! Storage abstraction for AVL tree operations.

use crate::node::{Node, NodeIdx};

/// Storage backend for AVL operations.
///
/// Nodes live in reusable slots addressed by [`NodeIdx`]. Freeing a slot
/// hands its node back to the caller, so the entry is dropped or returned
/// at the moment it leaves the tree.
///
/// Every handle reachable from a map's root names a live slot. Accessors
/// panic on a vacant slot.
pub trait AvlStore<K, V> {
    /// Stores `node` in a free slot, or a new one, returning its index.
    fn alloc_node(&mut self, node: Node<K, V>) -> NodeIdx<K, V>;

    /// Vacates the slot at `idx`, returning the node it held. The slot is
    /// reused by a later [`alloc_node`](Self::alloc_node).
    fn free_node(&mut self, idx: NodeIdx<K, V>) -> Node<K, V>;

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: NodeIdx<K, V>) -> &Node<K, V>;

    /// Returns a mutable reference to the node at `idx`.
    fn get_node_mut(&mut self, idx: NodeIdx<K, V>) -> &mut Node<K, V>;

    /// Returns the number of slots ever allocated, live or vacant.
    fn slot_count(&self) -> usize;

    /// Returns the number of vacant slots awaiting reuse.
    fn free_count(&self) -> usize;
}

//! Snapshot traversals of an [`AvlMap`](crate::AvlMap).
//!
//! Depth-first orders run on an explicit worklist of commands instead of
//! the call stack; level order uses a FIFO queue. Each traversal collects
//! references up front, so the result is a plain `Vec`.

use std::collections::VecDeque;

use crate::node::{Link, NodeIdx};
use crate::store::AvlStore;

/// Visiting order for [`AvlMap::traverse`](crate::AvlMap::traverse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, node, right subtree — ascending key order.
    In,
    /// Left subtree, right subtree, then node.
    Post,
    /// Breadth-first, top to bottom, left to right.
    Level,
}

/// Worklist entry: expand a subtree, or emit a node.
enum Command<K, V> {
    Go(NodeIdx<K, V>),
    Visit(NodeIdx<K, V>),
}

/// Collects `(&K, &V)` pairs of the subtree rooted at `root` in `order`.
pub fn collect<'a, K, V, S: AvlStore<K, V>>(
    store: &'a S,
    root: Link<K, V>,
    order: Order,
) -> Vec<(&'a K, &'a V)> {
    let mut out = Vec::new();
    let Some(root) = root else {
        return out;
    };

    let emit = move |out: &mut Vec<(&'a K, &'a V)>, idx: NodeIdx<K, V>| {
        let node = store.get_node(idx);
        out.push((&node.key, &node.value));
    };

    if order == Order::Level {
        let mut queue = VecDeque::from([root]);
        while let Some(idx) = queue.pop_front() {
            emit(&mut out, idx);
            let node = store.get_node(idx);
            queue.extend(node.left);
            queue.extend(node.right);
        }
        return out;
    }

    let mut stack = vec![Command::Go(root)];
    while let Some(command) = stack.pop() {
        let idx = match command {
            Command::Visit(idx) => {
                emit(&mut out, idx);
                continue;
            }
            Command::Go(idx) => idx,
        };
        let node = store.get_node(idx);
        // Pushed in reverse: the last command pushed runs first.
        if order == Order::Post {
            stack.push(Command::Visit(idx));
        }
        stack.extend(node.right.map(Command::Go));
        if order == Order::In {
            stack.push(Command::Visit(idx));
        }
        stack.extend(node.left.map(Command::Go));
        if order == Order::Pre {
            stack.push(Command::Visit(idx));
        }
    }
    out
}

//! Arena-backed AVL ordered map.
//!
//! An AVL tree keeps `|height(left) − height(right)| ≤ 1` at every node by
//! recomputing cached heights and rotating on the way back up from every
//! insert and remove. Lookup, insert, update and remove are O(log n) worst
//! case.
//!
//! # Key properties
//!
//! - **Arena storage**: nodes live in a [`safe_bump`] arena and are
//!   addressed by typed indices — no `Box` chains
//! - **Slot reuse**: a removed entry is dropped or returned immediately and
//!   its slot goes on a free list, so memory tracks the live entry count
//! - **In-place rotations**: rebalancing relinks nodes, keys and values
//!   never move or clone
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # References
//!
//! - Adelson-Velsky & Landis, 1962 — "An algorithm for the organization
//!   of information"
//! - Knuth, TAOCP vol. 3, §6.2.3 — "Balanced Trees"

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod node;
pub mod store;
pub mod traverse;

mod arena;
mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use error::AvlError;
pub use map::AvlMap;
pub use traverse::Order;

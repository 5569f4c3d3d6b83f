//! Error type for fallible map operations.

use std::fmt;

/// Errors returned by [`AvlMap`](crate::AvlMap).
///
/// Lookups and removals of absent keys are not errors; they return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvlError {
    /// [`update`](crate::AvlMap::update) was called with a key that is not
    /// in the map. The map is unchanged.
    KeyNotFound,
    /// A minimum or maximum was requested from an empty map.
    EmptyMap,
}

impl fmt::Display for AvlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyNotFound => write!(f, "key not found"),
            Self::EmptyMap => write!(f, "map is empty"),
        }
    }
}

impl std::error::Error for AvlError {}

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, AvlError>;

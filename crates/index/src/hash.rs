//! Hash index implementation.
//!
//! This module provides a unique hash-based index for O(1) point lookups.

use core::borrow::Borrow;
use core::hash::Hash;
use hashbrown::HashMap;
use std::fmt;

/// Error type for index operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// A key was inserted that is already present in the index.
    DuplicateKey,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::DuplicateKey => write!(f, "duplicate key in unique index"),
        }
    }
}

impl std::error::Error for IndexError {}

/// A unique hash-based index from keys to arena positions.
///
/// Backed by a HashMap, so point lookups are O(1) expected. Keys are unique:
/// `insert` rejects a key that is already present, while `set` overwrites it
/// (last wins).
#[derive(Clone, Debug, Default)]
pub struct HashIndex<K> {
    map: HashMap<K, usize>,
}

impl<K: Eq + Hash> HashIndex<K> {
    /// Creates a new, empty hash index.
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Creates a hash index sized for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a key, rejecting duplicates.
    pub fn insert(&mut self, key: K, pos: usize) -> Result<(), IndexError> {
        if self.map.contains_key(&key) {
            return Err(IndexError::DuplicateKey);
        }
        self.map.insert(key, pos);
        Ok(())
    }

    /// Inserts a key, overwriting any previous entry for it.
    pub fn set(&mut self, key: K, pos: usize) {
        self.map.insert(key, pos);
    }

    /// Looks up the position for a key. Matching is byte-exact.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key).copied()
    }

    /// Returns whether the index contains the key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all keys from the index.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

//! NeoDB Index - Hash index for the NEO close-approach database.
//!
//! This crate provides `HashIndex`, a unique hash-based index mapping entity
//! keys to arena positions with O(1) expected point lookups. The database
//! builds two of these over its NEO collection: designation -> position and
//! name -> position.
//!
//! # Example
//!
//! ```rust
//! use neodb_index::HashIndex;
//!
//! let mut index: HashIndex<String> = HashIndex::new();
//! index.insert("433".into(), 0).unwrap();
//! assert_eq!(index.get("433"), Some(0));
//! assert_eq!(index.get("434"), None);
//! ```

pub mod hash;

pub use hash::{HashIndex, IndexError};

//! NeoDB Database - the in-memory NEO close-approach database.
//!
//! `NeoDatabase` owns the two entity arenas (NEOs and close approaches),
//! builds the designation and name lookup indexes, and cross-links each
//! approach with its owning NEO. After construction the data set is fixed
//! and read-only; the database answers O(1) point lookups and lazy
//! predicate-filtered scans.

mod database;

pub use database::{NeoDatabase, Query};

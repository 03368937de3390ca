//! NeoDB Core - Entity model for the NEO close-approach database.
//!
//! This crate provides the foundational types for the in-memory NEO database:
//!
//! - `NearEarthObject`: a near-Earth object with a unique primary designation
//! - `CloseApproach`: one recorded close approach of an NEO to Earth
//! - `Value`: typed reference values used by query criteria
//! - `DataType`: the types a criterion value can take
//!
//! Entities are held in position-indexed arenas owned by the database; the
//! cross-links between them (`NeoId`, `ApproachId`) are plain positions into
//! those arenas, so neither entity owns the other's lifetime.
//!
//! # Example
//!
//! ```rust
//! use neodb_core::NearEarthObject;
//!
//! let neo = NearEarthObject::new("433", Some("Eros".into()), Some(16.84), false);
//! assert_eq!(neo.fullname(), "433 (Eros)");
//!
//! let unnamed = NearEarthObject::new("2021 AB", None, None, false);
//! assert_eq!(unnamed.fullname(), "2021 AB");
//! assert!(unnamed.diameter_unknown());
//! ```

mod approach;
mod neo;
mod types;
mod value;

pub use approach::{ApproachId, ApproachRecord, CloseApproach, TIME_FORMAT};
pub use neo::{NearEarthObject, NeoId, NeoRecord};
pub use types::DataType;
pub use value::Value;

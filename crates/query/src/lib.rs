//! NeoDB Query - Criterion and filter engine for close-approach queries.
//!
//! A query filter is a conjunction of independent criteria, each a
//! (selector, operator, reference value) triple evaluated against a close
//! approach and its linked NEO. Both the selector and the operator are closed
//! enums resolved through explicit match tables, so the criterion set is
//! enumerable and exhaustively testable.
//!
//! The crate also provides `limit`, an iterator adapter that bounds the
//! number of results a query stream produces.
//!
//! # Example
//!
//! ```rust
//! use neodb_query::Filter;
//!
//! // No bounds supplied: the builder yields the "no filter" sentinel.
//! assert!(Filter::builder().build().is_none());
//!
//! let filter = Filter::builder()
//!     .distance_min(Some(0.1))
//!     .distance_max(Some(0.2))
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.criteria().len(), 2);
//! ```

mod filter;
mod limit;

pub use filter::{CmpOp, Criterion, Filter, FilterBuilder, Selector};
pub use limit::{limit, Limit};

//! NeoDB Extract - loaders and writers for the NASA data files.
//!
//! `load_neos` reads near-Earth objects from the NEO CSV file and
//! `load_approaches` reads close approaches from the close-approach JSON
//! file, coercing raw field strings into the typed constructor arguments the
//! entity model expects. All of the data set's quirks (missing names, unknown
//! diameters) are normalized here or in the entity constructors, nowhere
//! else.
//!
//! `write_csv` and `write_json` serialize query results - each close approach
//! together with its linked NEO - for downstream consumption.

mod error;
mod load;
mod write;

pub use error::ExtractError;
pub use load::{load_approaches, load_neos, CD_TIME_FORMAT};
pub use write::{write_csv, write_json};

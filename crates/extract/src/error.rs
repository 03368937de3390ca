//! Error types for loading and writing data files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the NASA data files or writing results.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("close-approach file has no {0:?} field")]
    MissingField(&'static str),

    #[error("malformed close-approach row: {0}")]
    MalformedRow(String),

    #[error("invalid timestamp {value:?}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid number {value:?}")]
    Number {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the I/O edges of the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading posts or parsing command-line values.
/// Extraction itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read {path}: {source}")]
    ReadPost {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timestamp format: {0} (expected YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)")]
    InvalidTimestamp(String),

    #[error("Unknown profile: {0} (expected full or lean)")]
    UnknownProfile(String),

    #[error("Unknown output format: {0} (expected json or tsv)")]
    UnknownFormat(String),
}

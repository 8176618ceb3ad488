//! Error types for anagram-index

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reading the dictionary file
    #[error("cannot read dictionary '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Unrecognized backend selection token
    #[error("invalid backend '{0}': expected one of bst, rbt, hash")]
    InvalidBackend(String),

    /// A map backend failed its internal consistency check. This is a
    /// defect in the backend, not a recoverable runtime condition.
    #[error("map invariant violated: {0}")]
    InvariantViolation(String),

    /// JSON serialization error (serde_json)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error tagged with the offending path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invariant-violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}

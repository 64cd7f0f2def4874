//! Error types for loading and saving the data file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the data file.
///
/// A data file that does not exist yet is not an error; see
/// [`Hydration::Fresh`](super::Hydration::Fresh).
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be read or written.
    #[error("Cannot access data file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid canteen document.
    #[error("Data file {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory state could not be encoded.
    #[error("Cannot encode canteen data: {0}")]
    Encode(#[source] serde_json::Error),
}

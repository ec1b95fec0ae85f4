//! Error types for the reading store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;


/// Errors surfaced by the store and its storage backend.
///
/// Backend failures are reported to the immediate caller and never
/// retried internally; the caller decides whether to try again.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage engine could not be opened, read, or written.
    #[error("storage backend unavailable: {0}")]
    Backend(#[from] rusqlite::Error),

    /// The directory that should hold the database could not be created.
    #[error("failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        source: io::Error,
    },
}

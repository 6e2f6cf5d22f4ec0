//! Error types for SpoolQ
//!
//! Every failure surfaced by a storage backend or the queue storage adapter
//! falls into one of two kinds: the referenced key is missing, or the backing
//! store misbehaved.

use thiserror::Error;

/// Main error type for SpoolQ storage operations
#[derive(Error, Debug)]
pub enum Error {
    /// No record exists for the given key or entry identifier
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// The backing store refused a write because it is out of capacity
    #[error("Storage full: {0}")]
    StorageFull(String),

    /// Any other fault raised by the backing store
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// True for every fault that originates in the backing store rather than
    /// in a missing record.
    pub fn is_storage_failure(&self) -> bool {
        !self.is_not_found()
    }
}

/// Result type alias for SpoolQ operations
pub type Result<T> = std::result::Result<T, Error>;

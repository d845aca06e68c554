//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the local store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to serialize or deserialize a stored value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The value under a key is not valid for the requested type.
    #[error("Malformed value under key '{key}': {reason}")]
    Malformed { key: String, reason: String },
}

//! Error types for the storage layer

use thiserror::Error;

/// Failure of a storage operation, always returned as a value.
///
/// Every variant names the failed operation, the key where one applies,
/// and the underlying cause. Provider failures (`ListKeys`, `Read`,
/// `Write`, `Delete`) are distinguishable from codec failures (`Encode`,
/// `Decode`) by message content, so callers can branch without matching
/// on the provider's own error types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to list storage keys from {provider}: {cause}")]
    ListKeys { provider: String, cause: String },

    #[error("failed to read key `{key}` from {provider}: {cause}")]
    Read {
        key: String,
        provider: String,
        cause: String,
    },

    #[error("failed to write key `{key}` to {provider}: {cause}")]
    Write {
        key: String,
        provider: String,
        cause: String,
    },

    #[error("failed to delete key `{key}` from {provider}: {cause}")]
    Delete {
        key: String,
        provider: String,
        cause: String,
    },

    #[error("failed to encode value for key `{key}`: {cause}")]
    Encode { key: String, cause: String },

    #[error("failed to decode stored value for key `{key}`: {cause}")]
    Decode { key: String, cause: String },
}

impl StorageError {
    /// True when the stored value itself was unreadable, as opposed to
    /// the provider failing.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, StorageError::Decode { .. })
    }

    /// The key involved in the failed operation, if the operation had
    /// one.
    pub fn key(&self) -> Option<&str> {
        match self {
            StorageError::ListKeys { .. } => None,
            StorageError::Read { key, .. }
            | StorageError::Write { key, .. }
            | StorageError::Delete { key, .. }
            | StorageError::Encode { key, .. }
            | StorageError::Decode { key, .. } => Some(key),
        }
    }
}

//! # Endevor Explorer storage layer
//!
//! Uniform, non-throwing wrappers over the host editor's key/value
//! persistence providers. Callers never catch panics or provider
//! errors directly: every operation reports failure through its return
//! value, as a [`StorageError`] naming the operation, the key, and the
//! root cause.
//!
//! Two wrappers are provided:
//!
//! - [`GenericStorage`] over a [`StorageProvider`] — non-secret values,
//!   stored as JSON values; synchronous reads, asynchronous writes.
//! - [`SecureStorage`] over a [`SecretStorageProvider`] — secret-bearing
//!   values, serialized to JSON text before reaching the secret store
//!   and decoded on read; fully asynchronous.
//!
//! The wrappers hold no state beyond the provider handle: no cache, no
//! retry loop, no locking. Concurrent writes to the same key are
//! provider-defined last-write-wins.

pub mod error;
pub mod generic;
pub mod providers;
pub mod secure;

pub use error::StorageError;
pub use generic::{make_generic_storage, GenericStorage};
pub use providers::memory::{InMemorySecretStorage, InMemoryStorage};
pub use secure::{make_secure_storage, SecureStorage};

use async_trait::async_trait;
use serde_json::Value;

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Key/value persistence supplied by the host.
///
/// Reads are synchronous and writes asynchronous, matching the host
/// editor's memento API. Implementations may fail any operation; the
/// wrappers normalize those failures into [`StorageError`] values and
/// never let them propagate as panics.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Provider name, used in failure messages and logs.
    fn name(&self) -> &str;

    /// List all stored keys.
    fn keys(&self) -> anyhow::Result<Vec<String>>;

    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> anyhow::Result<Option<Value>>;

    /// Write `value` under `key`; `None` writes the absent marker,
    /// removing the entry.
    async fn update(&self, key: &str, value: Option<Value>) -> anyhow::Result<()>;
}

/// Secret-bearing key/value persistence supplied by the host.
///
/// Values cross this boundary only in textual form; the typed codec
/// lives in [`SecureStorage`].
#[async_trait]
pub trait SecretStorageProvider: Send + Sync {
    /// Provider name, used in failure messages and logs.
    fn name(&self) -> &str;

    /// Read the raw textual value under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Persist the raw textual `value` under `key`.
    async fn store(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove the secret under `key`.
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}

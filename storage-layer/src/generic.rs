//! Generic (non-secret) storage wrapper

use crate::error::StorageError;
use crate::{Result, StorageProvider};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed, failure-normalizing view over a [`StorageProvider`].
///
/// The value type is fixed per instance. The wrapper is a stateless
/// pass-through: it keeps no cache, so two reads always observe the
/// provider's current state.
pub struct GenericStorage<T> {
    provider: Arc<dyn StorageProvider>,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for GenericStorage<T> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            _value: PhantomData,
        }
    }
}

/// Bind a provider handle into a typed generic storage instance.
pub fn make_generic_storage<T>(provider: Arc<dyn StorageProvider>) -> GenericStorage<T> {
    GenericStorage::new(provider)
}

impl<T> GenericStorage<T> {
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self {
            provider,
            _value: PhantomData,
        }
    }
}

impl<T> GenericStorage<T>
where
    T: Serialize + DeserializeOwned,
{
    /// List all keys held by the provider.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ListKeys`] when the provider fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.provider.keys().map_err(|e| {
            warn!(provider = self.provider.name(), "key listing failed: {e}");
            StorageError::ListKeys {
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })
    }

    /// Read the value under `key`, or `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the provider fails and
    /// [`StorageError::Decode`] when the stored value does not decode
    /// into `T`.
    pub fn get(&self, key: &str, default: T) -> Result<T> {
        debug!(key, "reading stored value");
        let stored = self.provider.get(key).map_err(|e| {
            warn!(provider = self.provider.name(), key, "read failed: {e}");
            StorageError::Read {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })?;

        match stored {
            None => Ok(default),
            Some(value) => serde_json::from_value(value).map_err(|e| StorageError::Decode {
                key: key.to_string(),
                cause: e.to_string(),
            }),
        }
    }

    /// Persist `value` under `key`, creating or overwriting the entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] when the value does not
    /// serialize and [`StorageError::Write`] when the provider fails.
    pub async fn store(&self, key: &str, value: &T) -> Result<()> {
        debug!(key, "storing value");
        let encoded = serde_json::to_value(value).map_err(|e| StorageError::Encode {
            key: key.to_string(),
            cause: e.to_string(),
        })?;

        self.provider.update(key, Some(encoded)).await.map_err(|e| {
            warn!(provider = self.provider.name(), key, "write failed: {e}");
            StorageError::Write {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })
    }

    /// Remove the entry under `key` by writing the absent marker.
    ///
    /// Whether deleting an already-absent key succeeds is up to the
    /// provider; the bundled in-memory provider treats it as success.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Delete`] when the provider fails.
    pub async fn delete(&self, key: &str) -> Result<()> {
        debug!(key, "deleting stored value");
        self.provider.update(key, None).await.map_err(|e| {
            warn!(provider = self.provider.name(), key, "delete failed: {e}");
            StorageError::Delete {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })
    }
}

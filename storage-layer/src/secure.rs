//! Secure storage wrapper with a JSON-text codec

use crate::error::StorageError;
use crate::{Result, SecretStorageProvider};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed view over a [`SecretStorageProvider`].
///
/// Values are serialized to JSON text before reaching the secret store
/// and decoded on read. `get` keeps the three-way distinction callers
/// depend on: `Ok(Some(value))`, `Ok(None)` for an absent key, and
/// `Err(..)` for a provider or decode failure — absence is never
/// reported as an error.
pub struct SecureStorage<T> {
    provider: Arc<dyn SecretStorageProvider>,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for SecureStorage<T> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            _value: PhantomData,
        }
    }
}

/// Bind a secret provider handle into a typed secure storage instance.
pub fn make_secure_storage<T>(provider: Arc<dyn SecretStorageProvider>) -> SecureStorage<T> {
    SecureStorage::new(provider)
}

impl<T> SecureStorage<T> {
    pub fn new(provider: Arc<dyn SecretStorageProvider>) -> Self {
        Self {
            provider,
            _value: PhantomData,
        }
    }
}

impl<T> SecureStorage<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read and decode the secret under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the provider fails and
    /// [`StorageError::Decode`] when the stored text is not a valid
    /// encoding of `T` (a corrupted secret surfaces here, never as a
    /// panic).
    pub async fn get(&self, key: &str) -> Result<Option<T>> {
        debug!(key, "reading secret");
        let stored = self.provider.get(key).await.map_err(|e| {
            warn!(provider = self.provider.name(), key, "secret read failed: {e}");
            StorageError::Read {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })?;

        match stored {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| StorageError::Decode {
                    key: key.to_string(),
                    cause: e.to_string(),
                }),
        }
    }

    /// Encode `value` to its textual form and persist it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] when serialization fails and
    /// [`StorageError::Write`] when the provider fails; the two are
    /// distinguishable by message.
    pub async fn store(&self, key: &str, value: &T) -> Result<()> {
        debug!(key, "storing secret");
        let encoded = serde_json::to_string(value).map_err(|e| StorageError::Encode {
            key: key.to_string(),
            cause: e.to_string(),
        })?;

        self.provider.store(key, &encoded).await.map_err(|e| {
            warn!(provider = self.provider.name(), key, "secret write failed: {e}");
            StorageError::Write {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })
    }

    /// Remove the secret under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Delete`] when the provider fails.
    pub async fn delete(&self, key: &str) -> Result<()> {
        debug!(key, "deleting secret");
        self.provider.delete(key).await.map_err(|e| {
            warn!(provider = self.provider.name(), key, "secret delete failed: {e}");
            StorageError::Delete {
                key: key.to_string(),
                provider: self.provider.name().to_string(),
                cause: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::memory::InMemorySecretStorage;
    use async_trait::async_trait;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Credentials {
        user: String,
        a: u32,
    }

    struct RejectingProvider;

    #[async_trait]
    impl SecretStorageProvider for RejectingProvider {
        fn name(&self) -> &str {
            "rejecting"
        }

        async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("keychain locked"))
        }

        async fn store(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("keychain locked"))
        }

        async fn delete(&self, _key: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("keychain locked"))
        }
    }

    #[tokio::test]
    async fn store_then_get_round_trips() {
        let storage: SecureStorage<Credentials> =
            SecureStorage::new(Arc::new(InMemorySecretStorage::new()));

        let creds = Credentials {
            user: "HLQ".to_string(),
            a: 1,
        };
        storage.store("k", &creds).await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some(creds));
    }

    #[tokio::test]
    async fn absent_key_is_none_not_an_error() {
        let storage: SecureStorage<Credentials> =
            SecureStorage::new(Arc::new(InMemorySecretStorage::new()));
        assert!(storage.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupted_text_is_a_decode_failure_value() {
        let provider = Arc::new(InMemorySecretStorage::new());
        let storage: SecureStorage<Credentials> =
            SecureStorage::new(provider.clone() as Arc<dyn SecretStorageProvider>);

        let creds = Credentials {
            user: "HLQ".to_string(),
            a: 1,
        };
        storage.store("k", &creds).await.unwrap();

        // Corrupt the stored textual form behind the wrapper's back.
        provider.store("k", "{not json").await.unwrap();

        let err = storage.get("k").await.unwrap_err();
        assert!(err.is_decode_failure());
        assert_eq!(err.key(), Some("k"));
    }

    #[tokio::test]
    async fn delete_removes_the_secret() {
        let storage: SecureStorage<Credentials> =
            SecureStorage::new(Arc::new(InMemorySecretStorage::new()));

        let creds = Credentials {
            user: "HLQ".to_string(),
            a: 1,
        };
        storage.store("k", &creds).await.unwrap();
        storage.delete("k").await.unwrap();
        assert!(storage.get("k").await.unwrap().is_none());

        // Deleting the now-absent key succeeds again.
        storage.delete("k").await.unwrap();
    }

    #[tokio::test]
    async fn provider_failures_become_values() {
        let storage: SecureStorage<Credentials> = SecureStorage::new(Arc::new(RejectingProvider));

        let err = storage.get("k").await.unwrap_err();
        assert!(!err.is_decode_failure());
        assert!(err.to_string().contains("keychain locked"));

        let creds = Credentials {
            user: "HLQ".to_string(),
            a: 1,
        };
        let err = storage.store("k", &creds).await.unwrap_err();
        assert!(err.to_string().contains("write key `k`"));

        let err = storage.delete("k").await.unwrap_err();
        assert!(err.to_string().contains("delete key `k`"));
    }
}

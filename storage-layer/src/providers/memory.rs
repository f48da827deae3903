//! In-memory provider backends
//!
//! Used by tests and as a local fallback when the host supplies no
//! persistence backend. Deleting an absent key is a success on both
//! providers, so deletes are idempotent here.

use crate::{SecretStorageProvider, StorageProvider};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Map-backed [`StorageProvider`].
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    fn name(&self) -> &str {
        "in-memory storage"
    }

    fn keys(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn update(&self, key: &str, value: Option<Value>) -> anyhow::Result<()> {
        let mut entries = self.entries.write();
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value);
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }
}

/// Map-backed [`SecretStorageProvider`].
#[derive(Debug, Default)]
pub struct InMemorySecretStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySecretStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecretStorageProvider for InMemorySecretStorage {
    fn name(&self) -> &str {
        "in-memory secret storage"
    }

    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn store(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

//! In-memory key/value backend
//!
//! Fast, non-persistent storage for development and testing.
//! All data is lost when the process exits.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use spoolq_types::{Error, Result};
use tracing::{info, trace};

use crate::traits::KeyValueStore;

/// In-memory store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStoreConfig {
    /// Maximum number of keys held at once (0 = unlimited)
    #[serde(default)]
    pub max_entries: u64,
}

/// In-memory key/value store
///
/// Capacity is checked before inserting a new key, so concurrent inserts of
/// distinct keys may briefly overshoot `max_entries`.
pub struct MemoryStore<V> {
    config: MemoryStoreConfig,
    entries: DashMap<String, V>,
}

impl<V> MemoryStore<V> {
    /// Create an unbounded in-memory store
    pub fn new() -> Self {
        Self::with_config(MemoryStoreConfig::default())
    }

    /// Create an in-memory store with custom config
    pub fn with_config(config: MemoryStoreConfig) -> Self {
        info!(max_entries = config.max_entries, "Initializing in-memory store");
        Self {
            config,
            entries: DashMap::new(),
        }
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_full(&self) -> bool {
        self.config.max_entries > 0 && self.entries.len() as u64 >= self.config.max_entries
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> KeyValueStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn has(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<V> {
        self.entries
            .get(key)
            .map(|v| v.value().clone())
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: V) -> Result<()> {
        if !self.entries.contains_key(key) && self.is_full() {
            return Err(Error::StorageFull(format!(
                "in-memory store holds {} entries",
                self.config.max_entries
            )));
        }

        self.entries.insert(key.to_string(), value);
        trace!(key = %key, "Value stored");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(_) => {
                trace!(key = %key, "Value deleted");
                Ok(())
            }
            None => Err(Error::NotFound(key.to_string())),
        }
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|e| e.key().clone()).collect())
    }
}

//! JSON codec over byte-valued stores
//!
//! Disk maps and database tables usually hold raw bytes. [`JsonCodecStore`]
//! lets such a store back either side of the queue storage adapter by
//! encoding values with `serde_json` on the way in and decoding on the way out.

use std::marker::PhantomData;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};
use spoolq_types::Result;

use crate::traits::KeyValueStore;

/// Typed view over a `KeyValueStore<Bytes>`
pub struct JsonCodecStore<S, V> {
    inner: S,
    _value: PhantomData<fn() -> V>,
}

impl<S, V> JsonCodecStore<S, V> {
    /// Wrap a byte-valued store
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _value: PhantomData,
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, returning the byte-valued store
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S, V> KeyValueStore<V> for JsonCodecStore<S, V>
where
    S: KeyValueStore<Bytes>,
    V: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(key).await
    }

    async fn get(&self, key: &str) -> Result<V> {
        let raw = self.inner.get(key).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn set(&self, key: &str, value: V) -> Result<()> {
        let raw = serde_json::to_vec(&value)?;
        self.inner.set(key, Bytes::from(raw)).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key).await
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.inner.keys().await
    }
}

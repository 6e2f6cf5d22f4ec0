//! Queue storage over two key/value stores
//!
//! [`DictStorage`] keeps envelopes in one store and scheduling metadata in
//! another, both keyed by the same generated [`EntryId`]. Its job is keeping
//! the two sides paired: envelopes are written before their metadata and
//! removed after it, so anything `load` reports can be fetched with `get`.
//!
//! Writers sharing one adapter reserve identifiers one at a time, so two
//! concurrent writes never claim the same key. Read-modify-write operations
//! (`set_timestamp`, `increment_attempts`) are not synchronized. Callers that
//! update one entry from several workers must serialize those updates
//! themselves.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spoolq_types::{EntryId, EntryMeta, Envelope, Result};
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

use crate::id::{IdGenerator, UuidGenerator};
#[cfg(feature = "memory")]
use crate::memory::MemoryStore;
use crate::traits::{KeyValueStore, QueueStorage};

/// Queue storage backed by an envelope store and a metadata store
pub struct DictStorage<E, M, G = UuidGenerator> {
    envelopes: E,
    meta: M,
    ids: G,
    /// Held from the collision check until the envelope is stored
    reserve: Mutex<()>,
}

impl<E, M> DictStorage<E, M>
where
    E: KeyValueStore<Envelope>,
    M: KeyValueStore<EntryMeta>,
{
    /// Create a storage adapter generating random UUID identifiers
    pub fn new(envelopes: E, meta: M) -> Self {
        Self::with_id_generator(envelopes, meta, UuidGenerator)
    }
}

impl<E, M, G> DictStorage<E, M, G>
where
    E: KeyValueStore<Envelope>,
    M: KeyValueStore<EntryMeta>,
    G: IdGenerator,
{
    /// Create a storage adapter with a custom identifier source
    pub fn with_id_generator(envelopes: E, meta: M, ids: G) -> Self {
        Self {
            envelopes,
            meta,
            ids,
            reserve: Mutex::new(()),
        }
    }

    /// The envelope store
    pub fn envelopes(&self) -> &E {
        &self.envelopes
    }

    /// The metadata store
    pub fn metadata(&self) -> &M {
        &self.meta
    }

    /// Draw identifiers until one is not a live envelope key.
    async fn fresh_id(&self) -> Result<EntryId> {
        loop {
            let id = self.ids.generate();
            if !self.envelopes.has(id.as_str()).await? {
                return Ok(id);
            }
            trace!(entry_id = %id, "Identifier collision, drawing another");
        }
    }

    async fn load_meta(&self, id: &EntryId) -> Result<EntryMeta> {
        self.meta.get(id.as_str()).await
    }

    /// Undo a half-finished write. Metadata goes first: if it cannot be
    /// deleted the envelope stays, so `load` never lists an id `get` can't
    /// fetch.
    async fn roll_back(&self, id: &EntryId) {
        if let Err(e) = ignore_not_found(self.meta.delete(id.as_str()).await) {
            warn!(
                entry_id = %id,
                error = %e,
                "Failed to roll back metadata, leaving entry in place"
            );
            return;
        }
        if let Err(e) = ignore_not_found(self.envelopes.delete(id.as_str()).await) {
            warn!(
                entry_id = %id,
                error = %e,
                "Failed to roll back envelope, leaving orphan"
            );
        }
    }
}

#[cfg(feature = "memory")]
impl DictStorage<MemoryStore<Envelope>, MemoryStore<EntryMeta>> {
    /// Volatile storage on two fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), MemoryStore::new())
    }
}

/// Treat a missing key as already deleted.
fn ignore_not_found(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if e.is_not_found() => Ok(()),
        other => other,
    }
}

#[async_trait]
impl<E, M, G> QueueStorage for DictStorage<E, M, G>
where
    E: KeyValueStore<Envelope>,
    M: KeyValueStore<EntryMeta>,
    G: IdGenerator,
{
    async fn write(&self, envelope: Envelope, timestamp: DateTime<Utc>) -> Result<EntryId> {
        let id = {
            let _reserved = self.reserve.lock().await;
            let id = self.fresh_id().await?;
            self.envelopes.set(id.as_str(), envelope).await?;
            id
        };

        if let Err(e) = self.meta.set(id.as_str(), EntryMeta::new(timestamp)).await {
            // The store may have kept the record before failing
            self.roll_back(&id).await;
            return Err(e);
        }

        debug!(entry_id = %id, next_attempt = %timestamp, "Entry written");
        Ok(id)
    }

    async fn set_timestamp(&self, id: &EntryId, timestamp: DateTime<Utc>) -> Result<()> {
        let meta = self.load_meta(id).await?;
        self.meta
            .set(id.as_str(), meta.with_next_attempt(timestamp))
            .await?;

        debug!(entry_id = %id, next_attempt = %timestamp, "Entry rescheduled");
        Ok(())
    }

    async fn increment_attempts(&self, id: &EntryId) -> Result<u32> {
        let meta = self.load_meta(id).await?.incremented();
        self.meta.set(id.as_str(), meta).await?;

        debug!(entry_id = %id, attempts = meta.attempts, "Attempt recorded");
        Ok(meta.attempts)
    }

    async fn load(&self) -> Result<Vec<(DateTime<Utc>, EntryId)>> {
        let keys = self.meta.keys().await?;
        let mut entries = Vec::with_capacity(keys.len());

        for key in keys {
            match self.meta.get(&key).await {
                Ok(meta) => entries.push((meta.next_attempt, EntryId::from(key))),
                // Removed since the key snapshot was taken
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }

        trace!(count = entries.len(), "Entries loaded");
        Ok(entries)
    }

    async fn get(&self, id: &EntryId) -> Result<Envelope> {
        self.envelopes.get(id.as_str()).await
    }

    async fn remove(&self, id: &EntryId) -> Result<()> {
        ignore_not_found(self.meta.delete(id.as_str()).await)?;
        ignore_not_found(self.envelopes.delete(id.as_str()).await)?;

        debug!(entry_id = %id, "Entry removed");
        Ok(())
    }
}

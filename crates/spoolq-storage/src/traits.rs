//! Storage trait definitions
//!
//! [`KeyValueStore`] is the capability set every backing store provides.
//! [`QueueStorage`] is the interface a queue scheduler drives.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spoolq_types::{EntryId, Envelope, Result};

/// Minimal key/value store - all backends implement this
#[async_trait]
pub trait KeyValueStore<V>: Send + Sync
where
    V: Send + 'static,
{
    /// Check whether a key is present
    async fn has(&self, key: &str) -> Result<bool>;

    /// Fetch the value for a key, failing with `NotFound` if absent
    async fn get(&self, key: &str) -> Result<V>;

    /// Insert or overwrite a value
    async fn set(&self, key: &str, value: V) -> Result<()>;

    /// Delete a key, failing with `NotFound` if absent
    async fn delete(&self, key: &str) -> Result<()>;

    /// Snapshot of the current key set
    async fn keys(&self) -> Result<Vec<String>>;
}

/// Queue storage - what a scheduler uses to persist and revisit entries
#[async_trait]
pub trait QueueStorage: Send + Sync {
    /// Store a new envelope due at `timestamp`, returning its fresh identifier
    async fn write(&self, envelope: Envelope, timestamp: DateTime<Utc>) -> Result<EntryId>;

    /// Reschedule an entry, keeping its attempt count
    async fn set_timestamp(&self, id: &EntryId, timestamp: DateTime<Utc>) -> Result<()>;

    /// Record one more delivery attempt, returning the new count
    async fn increment_attempts(&self, id: &EntryId) -> Result<u32>;

    /// Every stored entry as `(next_attempt, id)`, in no particular order
    async fn load(&self) -> Result<Vec<(DateTime<Utc>, EntryId)>>;

    /// Fetch the envelope of an entry
    async fn get(&self, id: &EntryId) -> Result<Envelope>;

    /// Delete an entry. Removing an absent entry is not an error.
    async fn remove(&self, id: &EntryId) -> Result<()>;
}

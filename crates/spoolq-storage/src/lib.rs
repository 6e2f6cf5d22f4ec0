//! SpoolQ Storage - Queue storage for the message queue
//!
//! This crate provides the queue storage adapter and the key/value backends
//! it is layered on.
//! Currently supports:
//! - [`DictStorage`]: pairs an envelope store with a metadata store
//! - In-memory key/value store (default, for development/testing)
//! - JSON codec over any byte-valued key/value store

pub mod codec;
pub mod dict;
pub mod id;
pub mod traits;

#[cfg(feature = "memory")]
pub mod memory;

// Re-exports
pub use codec::JsonCodecStore;
pub use dict::DictStorage;
pub use id::{IdGenerator, UuidGenerator};
pub use traits::{KeyValueStore, QueueStorage};

#[cfg(feature = "memory")]
pub use memory::{MemoryStore, MemoryStoreConfig};

//! SpoolQ Types - Core domain types for the queue storage layer
//!
//! This crate contains the types shared by every storage backend.

pub mod envelope;
pub mod error;
pub mod meta;

// Re-export commonly used types
pub use envelope::{EntryId, Envelope};
pub use error::{Error, Result};
pub use meta::EntryMeta;

//! Entry identifier generation
//!
//! The storage adapter asks an [`IdGenerator`] for candidate identifiers and
//! checks each one against the live key set itself, so generators only have
//! to produce high-entropy tokens, not unique ones.

use spoolq_types::EntryId;
use uuid::Uuid;

/// Source of fresh candidate identifiers
pub trait IdGenerator: Send + Sync {
    /// Produce a new candidate identifier
    fn generate(&self) -> EntryId;
}

/// Random 128-bit identifiers rendered as 32 lowercase hex characters
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> EntryId {
        EntryId::new(Uuid::new_v4().simple().to_string())
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> EntryId + Send + Sync,
{
    fn generate(&self) -> EntryId {
        self()
    }
}

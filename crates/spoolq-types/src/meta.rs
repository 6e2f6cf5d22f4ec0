//! Scheduling metadata kept alongside every envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Next-attempt time and attempt counter of a queue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMeta {
    /// When the entry becomes eligible for delivery
    pub next_attempt: DateTime<Utc>,

    /// Number of delivery attempts made so far
    #[serde(default)]
    pub attempts: u32,
}

impl EntryMeta {
    /// Metadata for a freshly written entry: no attempts yet
    pub fn new(next_attempt: DateTime<Utc>) -> Self {
        Self {
            next_attempt,
            attempts: 0,
        }
    }

    /// Same attempt count, new next-attempt time
    pub fn with_next_attempt(self, next_attempt: DateTime<Utc>) -> Self {
        Self {
            next_attempt,
            ..self
        }
    }

    /// Same next-attempt time, one more attempt
    pub fn incremented(self) -> Self {
        Self {
            attempts: self.attempts.saturating_add(1),
            ..self
        }
    }
}

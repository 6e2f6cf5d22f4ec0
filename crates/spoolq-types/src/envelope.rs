//! Envelope and entry identifier types
//!
//! An [`Envelope`] is the opaque payload of a queued message. Storage never
//! looks inside it.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Identifier of a queue entry, shared by its envelope and metadata records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an existing token
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A queued message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Raw message bytes
    #[serde(with = "base64_bytes")]
    body: Bytes,
}

impl Envelope {
    /// Create a new envelope with the given body
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }

    /// Raw payload
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Get the body as a string (if valid UTF-8)
    pub fn body_as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True when the payload is empty
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Consume the envelope, returning its payload
    pub fn into_bytes(self) -> Bytes {
        self.body
    }
}

impl From<Bytes> for Envelope {
    fn from(body: Bytes) -> Self {
        Self::new(body)
    }
}

/// Bytes are always written as standard base64 so binary payloads survive
/// text formats unchanged.
mod base64_bytes {
    use base64::Engine;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        base64::engine::general_purpose::STANDARD
            .encode(bytes)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}

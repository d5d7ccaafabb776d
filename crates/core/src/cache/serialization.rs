//! Pure functions for serializing/deserializing cycle collections to/from
//! cache bytes.
//!
//! Cached collections are wrapped in a versioned JSON envelope
//! (`{"v": N, "data": [...]}`). A version bump makes every stale entry
//! deserialize-fail, which readers treat as a cache miss rather than an
//! error, so schema changes never require flushing the cache by hand.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cycle::Cycle;

/// Version of the cache envelope. Bump on any change to the cached shape.
pub const CACHE_SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
    /// The envelope carries a schema version this build does not understand.
    #[error("Unsupported cache schema version: {0}")]
    UnsupportedVersion(u32),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    v: u32,
    data: T,
}

/// Serializes a cycle collection into versioned JSON bytes.
///
/// An empty slice serializes fine; an empty collection is a legitimate
/// cacheable value, distinct from an absent key.
pub fn serialize_cycles(cycles: &[Cycle]) -> Result<Vec<u8>> {
    let envelope = Envelope {
        v: CACHE_SCHEMA_VERSION,
        data: cycles,
    };
    serde_json::to_vec(&envelope).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes versioned JSON bytes into a cycle collection.
///
/// Fails on malformed bytes, on a non-envelope payload, and on a version
/// mismatch. Callers treat any of these as a cache miss.
pub fn deserialize_cycles(bytes: &[u8]) -> Result<Vec<Cycle>> {
    let envelope: Envelope<Vec<Cycle>> = serde_json::from_slice(bytes)
        .map_err(|e| SerializationError::DeserializeFailed(e.to_string()))?;
    if envelope.v != CACHE_SCHEMA_VERSION {
        return Err(SerializationError::UnsupportedVersion(envelope.v));
    }
    Ok(envelope.data)
}

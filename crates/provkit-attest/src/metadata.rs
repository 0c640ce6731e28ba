//! # Assertion Metadata Attestation
//!
//! Free-form key/value context for a capture: when, where, on what device.
//! Values go through [`AssertionPayload`], so objects and scalars pass
//! through and anything else is stringified. Setting a key twice replaces
//! the value in place.

use provkit_core::{AssertionPayload, PayloadMap};
use serde_json::{Map, Value};

/// The `c2pa.assertion.metadata` attestation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssertionMetadataAttestation {
    metadata: PayloadMap,
}

impl AssertionMetadataAttestation {
    /// Empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary metadata entry.
    pub fn add_metadata(mut self, key: impl Into<String>, value: impl Into<AssertionPayload>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Set `dateTime`.
    pub fn date_time(self, date_time: impl Into<String>) -> Self {
        self.add_metadata("dateTime", date_time.into())
    }

    /// Set `location` to a structured place or coordinate object.
    pub fn location(self, location: Map<String, Value>) -> Self {
        self.add_metadata("location", location)
    }

    /// Set `device`.
    pub fn device(self, device: impl Into<String>) -> Self {
        self.add_metadata("device", device.into())
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&AssertionPayload> {
        self.metadata.get(key)
    }

    /// Render the entries in insertion order.
    pub fn to_json(&self) -> Value {
        Value::Object(self.metadata.to_json_object())
    }
}

//! # Assertion Payloads
//!
//! Assertion data attached to a manifest is free-form: callers hand over
//! objects, arrays, scalars, or arbitrary values that only know how to
//! print themselves. [`AssertionPayload`] makes that set explicit. The
//! `Raw` case is the stringify fallback: anything that is not one of the
//! JSON shapes is carried as its textual rendering.
//!
//! [`PayloadMap`] is the ordered label-to-payload map used by the manifest
//! builder and the assertion-metadata attestation. Re-inserting an
//! existing key replaces the value in place and keeps its original
//! position.

use serde_json::{Map, Number, Value};

/// A typed assertion payload.
#[derive(Debug, Clone, PartialEq)]
pub enum AssertionPayload {
    /// A JSON object, passed through.
    Object(Map<String, Value>),
    /// A JSON array, passed through.
    Array(Vec<Value>),
    /// A string scalar.
    String(String),
    /// A numeric scalar.
    Number(Number),
    /// A boolean scalar.
    Boolean(bool),
    /// Any other value, carried as its string rendering.
    Raw(String),
}

impl AssertionPayload {
    /// Wrap any displayable value as the stringified fallback.
    pub fn raw(value: impl std::fmt::Display) -> Self {
        Self::Raw(value.to_string())
    }

    /// Render the payload as the JSON value placed under `data`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Object(map) => Value::Object(map.clone()),
            Self::Array(items) => Value::Array(items.clone()),
            Self::String(s) | Self::Raw(s) => Value::String(s.clone()),
            Self::Number(n) => Value::Number(n.clone()),
            Self::Boolean(b) => Value::Bool(*b),
        }
    }

    /// Consume the payload into a JSON value.
    pub fn into_json(self) -> Value {
        match self {
            Self::Object(map) => Value::Object(map),
            Self::Array(items) => Value::Array(items),
            Self::String(s) | Self::Raw(s) => Value::String(s),
            Self::Number(n) => Value::Number(n),
            Self::Boolean(b) => Value::Bool(b),
        }
    }
}

impl From<Value> for AssertionPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(map),
            Value::Array(items) => Self::Array(items),
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Boolean(b),
            Value::Null => Self::Raw("null".to_string()),
        }
    }
}

impl From<Map<String, Value>> for AssertionPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Object(map)
    }
}

impl From<Vec<Value>> for AssertionPayload {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<&str> for AssertionPayload {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AssertionPayload {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AssertionPayload {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for AssertionPayload {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for AssertionPayload {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u64> for AssertionPayload {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<f64> for AssertionPayload {
    /// Non-finite floats have no JSON number form and fall back to `Raw`.
    fn from(f: f64) -> Self {
        match Number::from_f64(f) {
            Some(n) => Self::Number(n),
            None => Self::Raw(f.to_string()),
        }
    }
}

/// An insertion-ordered map of string keys to payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadMap {
    entries: Vec<(String, AssertionPayload)>,
}

impl PayloadMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. Returns the previous value if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AssertionPayload>,
    ) -> Option<AssertionPayload> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&AssertionPayload> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssertionPayload)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the map as a JSON object, preserving insertion order.
    pub fn to_json_object(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

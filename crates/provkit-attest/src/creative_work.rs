//! # Creative Work Attestation
//!
//! Authorship claims: an ordered author list, a creation date and a review
//! status. An author's identifier serializes under the JSON-LD key `@id`.

use provkit_core::Timestamp;
use serde::{Deserialize, Serialize};

/// One author entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Credential reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    /// JSON-LD identifier.
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// A creation date: either a timestamp, normalized to the UTC second-precision
/// format, or a caller-formatted string passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// A timestamp rendered as `YYYY-MM-DDTHH:MM:SSZ`.
    Timestamp(Timestamp),
    /// A pre-formatted string, not validated.
    Text(String),
}

impl From<Timestamp> for DateValue {
    fn from(ts: Timestamp) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// The `c2pa.creative_work` attestation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeWorkAttestation {
    #[serde(rename = "author", default, skip_serializing_if = "Vec::is_empty")]
    authors: Vec<Author>,
    #[serde(rename = "dateCreated", default, skip_serializing_if = "Option::is_none")]
    date_created: Option<DateValue>,
    #[serde(rename = "reviewStatus", default, skip_serializing_if = "Option::is_none")]
    review_status: Option<String>,
}

impl CreativeWorkAttestation {
    /// A creative work with no authors or date.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an author with only a name.
    pub fn add_author(self, name: impl Into<String>) -> Self {
        self.add_author_with(name, None, None)
    }

    /// Append an author with optional credential and identifier.
    pub fn add_author_with(
        mut self,
        name: impl Into<String>,
        credential: Option<String>,
        identifier: Option<String>,
    ) -> Self {
        self.authors.push(Author {
            name: name.into(),
            credential,
            identifier,
        });
        self
    }

    /// Set the creation date.
    pub fn date_created(mut self, date: impl Into<DateValue>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    /// Set `reviewStatus`.
    pub fn review_status(mut self, status: impl Into<String>) -> Self {
        self.review_status = Some(status.into());
        self
    }

    /// Authors in insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }
}

//! # Data Hash Attestation
//!
//! Describes the byte ranges excluded from the asset hash. Only the
//! descriptive fields live here; computing the hash is the engine's job.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name used when none is configured.
pub const DEFAULT_DATA_HASH_NAME: &str = "jumbf manifest";

fn default_name() -> String {
    DEFAULT_DATA_HASH_NAME.to_string()
}

/// The `c2pa.data_hash` attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataHashAttestation {
    /// Free-form exclusion ranges, rendered verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    exclusions: Vec<Map<String, Value>>,
    #[serde(default = "default_name")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pad: Option<u64>,
}

impl Default for DataHashAttestation {
    fn default() -> Self {
        Self {
            exclusions: Vec::new(),
            name: default_name(),
            pad: None,
        }
    }
}

impl DataHashAttestation {
    /// A data hash with the default name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the exclusion list.
    pub fn exclusions(mut self, exclusions: Vec<Map<String, Value>>) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Override the hash name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the padding length.
    pub fn pad(mut self, pad: u64) -> Self {
        self.pad = Some(pad);
        self
    }
}

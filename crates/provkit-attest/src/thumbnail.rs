//! # Thumbnail Attestation

use serde::{Deserialize, Serialize};

fn default_content_type() -> String {
    provkit_manifest::vocab::formats::JPEG.to_string()
}

/// The `c2pa.thumbnail` attestation. `contentType` is always emitted and
/// defaults to `image/jpeg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailAttestation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(rename = "contentType", default = "default_content_type")]
    content_type: String,
}

impl Default for ThumbnailAttestation {
    fn default() -> Self {
        Self {
            format: None,
            identifier: None,
            content_type: default_content_type(),
        }
    }
}

impl ThumbnailAttestation {
    /// A thumbnail with only the default content type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thumbnail format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the thumbnail identifier.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Override the content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

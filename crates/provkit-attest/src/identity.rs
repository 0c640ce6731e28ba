//! # CAWG Identity Attestation
//!
//! An identity-claims-aggregation credential asserting that the signer
//! controls one or more verified online identities.
//!
//! ## Invariants
//!
//! - `@context` and `type` are insertion-ordered sets: adding a value that
//!   is already present is a no-op.
//! - `verifiedIdentities` and `credentialSchema` are plain lists: every add
//!   appends, identical entries included.
//! - The credential starts with two contexts, two types, the default issuer
//!   and one default credential schema.

use provkit_core::Timestamp;
use provkit_manifest::vocab::{identity_types, providers};
use serde::{Deserialize, Serialize};

/// Issuer used when none is configured.
pub const DEFAULT_ISSUER: &str = "did:web:connected-identities.identity.adobe.com";

/// Contexts every credential starts with.
pub const DEFAULT_CONTEXTS: [&str; 2] = [
    "https://www.w3.org/ns/credentials/v2",
    "https://cawg.io/identity/1.1/ica/context/",
];

/// Types every credential starts with.
pub const DEFAULT_TYPES: [&str; 2] = ["VerifiableCredential", "IdentityClaimsAggregationCredential"];

/// Identifier of the default credential schema.
pub const DEFAULT_SCHEMA_ID: &str = "https://cawg.io/identity/1.1/ica/schema/";

/// Type of the default credential schema.
pub const DEFAULT_SCHEMA_TYPE: &str = "JSONSchema";

/// The service that verified an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProvider {
    /// Provider URL.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// One verified identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// Identity kind, e.g. `cawg.social_media`.
    #[serde(rename = "type")]
    pub identity_type: String,
    /// Account name on the provider.
    pub username: String,
    /// Profile URL.
    pub uri: String,
    /// When the provider verified the account.
    #[serde(rename = "verifiedAt")]
    pub verified_at: String,
    /// Who verified it.
    pub provider: IdentityProvider,
}

/// A credential schema reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSchema {
    /// Schema URL.
    pub id: String,
    /// Schema language, normally `JSONSchema`.
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl Default for CredentialSchema {
    fn default() -> Self {
        Self {
            id: DEFAULT_SCHEMA_ID.to_string(),
            schema_type: DEFAULT_SCHEMA_TYPE.to_string(),
        }
    }
}

/// The `cawg.identity` attestation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CawgIdentityAttestation {
    #[serde(rename = "@context")]
    contexts: Vec<String>,
    #[serde(rename = "type")]
    types: Vec<String>,
    issuer: String,
    #[serde(rename = "validFrom", default, skip_serializing_if = "Option::is_none")]
    valid_from: Option<String>,
    #[serde(rename = "verifiedIdentities", default, skip_serializing_if = "Vec::is_empty")]
    verified_identities: Vec<VerifiedIdentity>,
    #[serde(rename = "credentialSchema", default, skip_serializing_if = "Vec::is_empty")]
    credential_schemas: Vec<CredentialSchema>,
}

impl Default for CawgIdentityAttestation {
    fn default() -> Self {
        Self {
            contexts: DEFAULT_CONTEXTS.iter().map(|s| s.to_string()).collect(),
            types: DEFAULT_TYPES.iter().map(|s| s.to_string()).collect(),
            issuer: DEFAULT_ISSUER.to_string(),
            valid_from: None,
            verified_identities: Vec::new(),
            credential_schemas: vec![CredentialSchema::default()],
        }
    }
}

impl CawgIdentityAttestation {
    /// A credential with the default issuer, contexts, types and schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the issuer identifier.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set `validFrom` verbatim.
    pub fn valid_from(mut self, valid_from: impl Into<String>) -> Self {
        self.valid_from = Some(valid_from.into());
        self
    }

    /// Stamp `validFrom` with the current UTC second.
    pub fn valid_from_now(self) -> Self {
        self.valid_from(Timestamp::now().to_iso8601())
    }

    /// Add a JSON-LD context unless already present.
    pub fn add_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        if !self.contexts.contains(&context) {
            self.contexts.push(context);
        }
        self
    }

    /// Add a credential type unless already present.
    pub fn add_type(mut self, credential_type: impl Into<String>) -> Self {
        let credential_type = credential_type.into();
        if !self.types.contains(&credential_type) {
            self.types.push(credential_type);
        }
        self
    }

    /// Append a verified identity. Never deduplicates.
    pub fn add_verified_identity(
        mut self,
        identity_type: impl Into<String>,
        username: impl Into<String>,
        uri: impl Into<String>,
        verified_at: impl Into<String>,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        self.verified_identities.push(VerifiedIdentity {
            identity_type: identity_type.into(),
            username: username.into(),
            uri: uri.into(),
            verified_at: verified_at.into(),
            provider: IdentityProvider {
                id: provider_id.into(),
                name: provider_name.into(),
            },
        });
        self
    }

    /// Append a `cawg.social_media` identity.
    pub fn add_social_media_identity(
        self,
        username: impl Into<String>,
        uri: impl Into<String>,
        verified_at: impl Into<String>,
        provider_id: impl Into<String>,
        provider_name: impl Into<String>,
    ) -> Self {
        self.add_verified_identity(
            identity_types::SOCIAL_MEDIA,
            username,
            uri,
            verified_at,
            provider_id,
            provider_name,
        )
    }

    /// Append an Instagram account.
    pub fn add_instagram_identity(self, username: &str, verified_at: impl Into<String>) -> Self {
        let uri = format!("https://www.instagram.com/{username}");
        self.add_social_media_identity(username, uri, verified_at, providers::INSTAGRAM, "instagram")
    }

    /// Append a Twitter/X account.
    pub fn add_twitter_identity(self, username: &str, verified_at: impl Into<String>) -> Self {
        let uri = format!("https://twitter.com/{username}");
        self.add_social_media_identity(username, uri, verified_at, providers::TWITTER, "twitter")
    }

    /// LinkedIn profiles have no username-derived URL; the caller supplies it.
    pub fn add_linkedin_identity(
        self,
        display_name: impl Into<String>,
        profile_url: impl Into<String>,
        verified_at: impl Into<String>,
    ) -> Self {
        self.add_social_media_identity(
            display_name,
            profile_url,
            verified_at,
            providers::LINKEDIN,
            "linkedin",
        )
    }

    /// Append a Behance profile.
    pub fn add_behance_identity(self, username: &str, verified_at: impl Into<String>) -> Self {
        let uri = format!("https://www.behance.net/{username}");
        self.add_social_media_identity(username, uri, verified_at, providers::BEHANCE, "behance")
    }

    /// Append a YouTube channel.
    pub fn add_youtube_identity(
        self,
        channel_name: impl Into<String>,
        channel_url: impl Into<String>,
        verified_at: impl Into<String>,
    ) -> Self {
        self.add_social_media_identity(
            channel_name,
            channel_url,
            verified_at,
            providers::YOUTUBE,
            "youtube",
        )
    }

    /// Append a GitHub account.
    pub fn add_github_identity(self, username: &str, verified_at: impl Into<String>) -> Self {
        let uri = format!("https://github.com/{username}");
        self.add_social_media_identity(username, uri, verified_at, providers::GITHUB, "github")
    }

    /// Append a credential schema. Never deduplicates.
    pub fn add_credential_schema(
        mut self,
        id: impl Into<String>,
        schema_type: impl Into<String>,
    ) -> Self {
        self.credential_schemas.push(CredentialSchema {
            id: id.into(),
            schema_type: schema_type.into(),
        });
        self
    }

    /// JSON-LD contexts in insertion order.
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// Credential types in insertion order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Verified identities in insertion order.
    pub fn verified_identities(&self) -> &[VerifiedIdentity] {
        &self.verified_identities
    }

    /// Credential schemas in insertion order, duplicates included.
    pub fn credential_schemas(&self) -> &[CredentialSchema] {
        &self.credential_schemas
    }

    /// The `validFrom` value, if set.
    pub fn valid_from_value(&self) -> Option<&str> {
        self.valid_from.as_deref()
    }
}

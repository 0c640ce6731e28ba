//! # Attestation Union
//!
//! A closed sum over every modeled attestation, plus a `Custom` case for
//! labels this crate does not model. Each case has a fixed label and a
//! pure rendering to its JSON fragment.

use provkit_manifest::vocab::assertions;
use serde::Serialize;
use serde_json::Value;

use crate::actions::ActionsAttestation;
use crate::creative_work::CreativeWorkAttestation;
use crate::data_hash::DataHashAttestation;
use crate::identity::CawgIdentityAttestation;
use crate::metadata::AssertionMetadataAttestation;
use crate::thumbnail::ThumbnailAttestation;

/// A labelled, renderable attestation.
#[derive(Debug, Clone, PartialEq)]
pub enum Attestation {
    /// `c2pa.creative_work`.
    CreativeWork(CreativeWorkAttestation),
    /// `c2pa.actions`.
    Actions(ActionsAttestation),
    /// `c2pa.assertion.metadata`.
    AssertionMetadata(AssertionMetadataAttestation),
    /// `c2pa.thumbnail`.
    Thumbnail(ThumbnailAttestation),
    /// `c2pa.data_hash`.
    DataHash(DataHashAttestation),
    /// `cawg.identity`.
    VerifiedIdentity(CawgIdentityAttestation),
    /// Raw JSON under a caller-chosen label.
    Custom {
        /// Assertion label.
        label: String,
        /// Fragment emitted verbatim.
        data: Value,
    },
}

impl Attestation {
    /// The assertion label this attestation is stored under.
    pub fn label(&self) -> &str {
        match self {
            Self::CreativeWork(_) => assertions::CREATIVE_WORK,
            Self::Actions(_) => assertions::ACTIONS,
            Self::AssertionMetadata(_) => assertions::ASSERTION_METADATA,
            Self::Thumbnail(_) => assertions::THUMBNAIL,
            Self::DataHash(_) => assertions::DATA_HASH,
            Self::VerifiedIdentity(_) => assertions::CAWG_IDENTITY,
            Self::Custom { label, .. } => label,
        }
    }

    /// Render the JSON fragment.
    pub fn to_json(&self) -> Value {
        match self {
            Self::CreativeWork(a) => to_value(a),
            Self::Actions(a) => a.to_json(),
            Self::AssertionMetadata(a) => a.to_json(),
            Self::Thumbnail(a) => to_value(a),
            Self::DataHash(a) => to_value(a),
            Self::VerifiedIdentity(a) => to_value(a),
            Self::Custom { data, .. } => data.clone(),
        }
    }
}

// These records hold only strings, integers and JSON values with string
// keys, so conversion to a Value cannot fail.
fn to_value<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or_default()
}

impl From<CreativeWorkAttestation> for Attestation {
    fn from(a: CreativeWorkAttestation) -> Self {
        Self::CreativeWork(a)
    }
}

impl From<ActionsAttestation> for Attestation {
    fn from(a: ActionsAttestation) -> Self {
        Self::Actions(a)
    }
}

impl From<AssertionMetadataAttestation> for Attestation {
    fn from(a: AssertionMetadataAttestation) -> Self {
        Self::AssertionMetadata(a)
    }
}

impl From<ThumbnailAttestation> for Attestation {
    fn from(a: ThumbnailAttestation) -> Self {
        Self::Thumbnail(a)
    }
}

impl From<DataHashAttestation> for Attestation {
    fn from(a: DataHashAttestation) -> Self {
        Self::DataHash(a)
    }
}

impl From<CawgIdentityAttestation> for Attestation {
    fn from(a: CawgIdentityAttestation) -> Self {
        Self::VerifiedIdentity(a)
    }
}

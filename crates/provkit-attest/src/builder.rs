//! # Attestation Builder
//!
//! Accumulates heterogeneous attestations through closure-configured
//! adders and renders them as a label-to-JSON map.
//!
//! ## Label Collisions
//!
//! Attestations are keyed by label. When two share a label, the later one
//! replaces the earlier one in [`AttestationBuilder::build`]; the entry
//! keeps the position where the label was first seen. This mirrors the
//! behavior existing consumers depend on, so it is kept as is and logged
//! at debug level.

use provkit_manifest::ManifestBuilder;
use serde_json::{Map, Value};

use crate::actions::ActionsAttestation;
use crate::attestation::Attestation;
use crate::creative_work::CreativeWorkAttestation;
use crate::data_hash::DataHashAttestation;
use crate::identity::CawgIdentityAttestation;
use crate::metadata::AssertionMetadataAttestation;
use crate::thumbnail::ThumbnailAttestation;

/// Fluent accumulator of [`Attestation`]s.
#[derive(Debug, Clone, Default)]
pub struct AttestationBuilder {
    attestations: Vec<Attestation>,
}

impl AttestationBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built attestation.
    pub fn add(mut self, attestation: impl Into<Attestation>) -> Self {
        self.attestations.push(attestation.into());
        self
    }

    /// Append a `c2pa.creative_work` attestation configured by `configure`.
    pub fn add_creative_work(
        self,
        configure: impl FnOnce(CreativeWorkAttestation) -> CreativeWorkAttestation,
    ) -> Self {
        self.add(configure(CreativeWorkAttestation::new()))
    }

    /// Append a `c2pa.actions` attestation configured by `configure`.
    pub fn add_actions(
        self,
        configure: impl FnOnce(ActionsAttestation) -> ActionsAttestation,
    ) -> Self {
        self.add(configure(ActionsAttestation::new()))
    }

    /// Append a `c2pa.assertion.metadata` attestation configured by `configure`.
    pub fn add_assertion_metadata(
        self,
        configure: impl FnOnce(AssertionMetadataAttestation) -> AssertionMetadataAttestation,
    ) -> Self {
        self.add(configure(AssertionMetadataAttestation::new()))
    }

    /// Append a thumbnail attestation configured by `configure`.
    pub fn add_thumbnail(
        self,
        configure: impl FnOnce(ThumbnailAttestation) -> ThumbnailAttestation,
    ) -> Self {
        self.add(configure(ThumbnailAttestation::new()))
    }

    /// Append a `c2pa.data_hash` attestation configured by `configure`.
    pub fn add_data_hash(
        self,
        configure: impl FnOnce(DataHashAttestation) -> DataHashAttestation,
    ) -> Self {
        self.add(configure(DataHashAttestation::new()))
    }

    /// Append a CAWG identity credential configured by `configure`.
    pub fn add_cawg_identity(
        self,
        configure: impl FnOnce(CawgIdentityAttestation) -> CawgIdentityAttestation,
    ) -> Self {
        self.add(configure(CawgIdentityAttestation::new()))
    }

    /// Append raw JSON under an arbitrary label.
    pub fn add_custom(self, label: impl Into<String>, data: impl Into<Value>) -> Self {
        self.add(Attestation::Custom {
            label: label.into(),
            data: data.into(),
        })
    }

    /// Attestations in the order they were added, duplicates included.
    pub fn attestations(&self) -> &[Attestation] {
        &self.attestations
    }

    /// Number of attestations added, duplicates included.
    pub fn len(&self) -> usize {
        self.attestations.len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.attestations.is_empty()
    }

    /// Render to a label-keyed map. A repeated label keeps only the last
    /// attestation's content.
    pub fn build(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for attestation in &self.attestations {
            let label = attestation.label();
            if out.insert(label.to_string(), attestation.to_json()).is_some() {
                tracing::debug!(%label, "attestation replaced by a later one with the same label");
            }
        }
        out
    }

    /// Fold every built attestation into the manifest as an assertion.
    pub fn build_for_manifest(&self, manifest: ManifestBuilder) -> ManifestBuilder {
        self.build()
            .into_iter()
            .fold(manifest, |manifest, (label, data)| manifest.add_assertion(label, data))
    }
}

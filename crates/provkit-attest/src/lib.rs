//! # provkit-attest: Attestation Model and Builder
//!
//! Reusable assertion payloads: authorship, edit history, capture metadata,
//! thumbnail, data-hash exclusions and CAWG verified identity. Each variant
//! renders its own JSON fragment and omits every field that was never set.
//!
//! ## Architecture
//!
//! - One module per variant, each a consuming builder over `self`.
//! - [`Attestation`] is the closed union with a `Custom` escape hatch.
//! - [`AttestationBuilder`] collects attestations through configuration
//!   closures and folds them into a [`provkit_manifest::ManifestBuilder`].
//!
//! ## Crate Policy
//!
//! - Depends on `provkit-core` and `provkit-manifest` only.
//! - Variants share no state; every builder owns its data.

pub mod actions;
pub mod attestation;
pub mod builder;
pub mod creative_work;
pub mod data_hash;
pub mod identity;
pub mod metadata;
pub mod thumbnail;

pub use actions::ActionsAttestation;
pub use attestation::Attestation;
pub use builder::AttestationBuilder;
pub use creative_work::{Author, CreativeWorkAttestation, DateValue};
pub use data_hash::{DataHashAttestation, DEFAULT_DATA_HASH_NAME};
pub use identity::{
    CawgIdentityAttestation, CredentialSchema, IdentityProvider, VerifiedIdentity,
    DEFAULT_CONTEXTS, DEFAULT_ISSUER, DEFAULT_TYPES,
};
pub use metadata::AssertionMetadataAttestation;
pub use thumbnail::ThumbnailAttestation;

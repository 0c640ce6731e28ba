//! # provkit-manifest: Manifest Model and Builder
//!
//! Assembles provenance manifests: the top-level claim fields, ingredients,
//! an edit-history actions list, and labelled assertions, rendered as JSON
//! in the fixed order the signing engine consumes.
//!
//! ## Architecture
//!
//! - [`model`] holds the wire records and their ordered rendering.
//! - [`builder`] is the fluent per-session accumulator.
//! - [`parse`] reads documents back, structurally or strictly.
//! - [`vocab`] carries the controlled labels and IPTC source types.
//!
//! ## Crate Policy
//!
//! - Depends only on `provkit-core` inside the workspace.
//! - Builders are single-session values with no shared state.

pub mod builder;
pub mod model;
pub mod parse;
pub mod vocab;

pub use builder::ManifestBuilder;
pub use model::{
    Action, ActionChange, ClaimGenerator, Ingredient, ManifestAssertion, ManifestDocument,
    SoftwareAgent, Thumbnail, ACTIONS_LABEL, CLAIM_VERSION,
};
pub use vocab::DigitalSourceType;

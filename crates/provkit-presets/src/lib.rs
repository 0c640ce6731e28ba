//! # provkit-presets: Manifest Factories
//!
//! Opinionated compositions of [`provkit_manifest::ManifestBuilder`] and
//! [`provkit_attest::AttestationBuilder`] for common authoring scenarios:
//! a plain image, an edit, a camera capture, a video edit, a composite, a
//! screenshot, a social-media re-share, a filtered copy, and captures with
//! verified creator identities.

pub mod factory;
pub mod location;

pub use factory::{Capture, Presets, Source, DEFAULT_GENERATOR_NAME, DEFAULT_GENERATOR_VERSION};
pub use location::{add_standard_thumbnail, geo_location, location, DEFAULT_THUMBNAIL_ID};

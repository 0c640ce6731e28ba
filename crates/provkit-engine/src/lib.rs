//! # provkit-engine: Signing Engine Bridge
//!
//! provkit does no cryptography and writes no container formats. Those
//! belong to an external signing engine. This crate defines the contract
//! with that engine, runs sign and archive sessions over provkit streams
//! with scoped handle release, and resolves where signer material lives.
//!
//! ## Crate Policy
//!
//! - Engine failures are surfaced as opaque
//!   [`SigningError`](provkit_core::SigningError)s tagged with a stage.
//! - No retries, no timeouts, no parallel signing.
//! - Private key material never appears in `Debug` output or logs.

pub mod algorithm;
pub mod config;
pub mod engine;
pub mod session;
pub mod signer;

pub use algorithm::{SigningAlgorithm, UnknownAlgorithm};
pub use config::{EngineConfig, SIGNING_PATH};
pub use engine::{BuilderHandle, Close, Scoped, SigningEngine};
pub use session::{archive_manifest, sign_file, sign_manifest, SignOptions};
pub use signer::SignerInfo;

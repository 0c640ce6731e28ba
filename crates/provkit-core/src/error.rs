//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout provkit. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Builder configuration never fails. Errors only arise at the strict
//!   parsing boundary, during stream I/O, while loading configuration,
//!   or inside the external signing engine.
//! - Stream adapters surface the underlying I/O failure unchanged.
//! - Engine failures are opaque: they carry the engine's message and the
//!   stage of the signing session at which they happened, nothing more.

use thiserror::Error;

/// Top-level error type for provkit.
#[derive(Error, Debug)]
pub enum ProvError {
    /// Manifest JSON failed syntax or required-field validation.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Stream read/write/seek failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure surfaced by the external signing engine.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// JSON serialization error outside the strict parsing boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while parsing a manifest document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input was empty or whitespace only.
    #[error("manifest JSON is empty")]
    Empty,

    /// The input is not syntactically valid JSON.
    #[error("invalid JSON syntax: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The root JSON value is not an object.
    #[error("manifest root must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// A field is present but explicitly `null`.
    #[error("field \"{0}\" must not be null")]
    NullField(String),

    /// A field is present but has the wrong shape.
    #[error("invalid field \"{field}\": {reason}")]
    InvalidField {
        /// The offending field name.
        field: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// The point in an engine session where a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningStage {
    /// Creating the signer handle from certificate and key material.
    Signer,
    /// Creating the builder handle from manifest JSON.
    Builder,
    /// Embedding and signing into the destination stream.
    Sign,
    /// Writing a builder archive.
    Archive,
    /// Releasing a handle.
    Release,
}

impl std::fmt::Display for SigningStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Signer => "signer",
            Self::Builder => "builder",
            Self::Sign => "sign",
            Self::Archive => "archive",
            Self::Release => "release",
        };
        f.write_str(s)
    }
}

/// An opaque failure reported by the external signing engine.
///
/// Certificate, algorithm and embedding failures are not decomposed at
/// this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} failed: {message}")]
pub struct SigningError {
    /// Where in the session the engine failed.
    pub stage: SigningStage,
    /// The engine's own description.
    pub message: String,
}

impl SigningError {
    /// Build a signing error for the given stage.
    pub fn new(stage: SigningStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

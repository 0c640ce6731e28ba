//! # Engine Contracts
//!
//! The signing engine is an external collaborator: it owns certificates,
//! key material and the container formats. This module names what provkit
//! needs from it.
//!
//! ## Handles
//!
//! Signer and builder handles may hold native file descriptors or key
//! material, so every handle is [`Close`] and is held in a [`Scoped`]
//! guard. The guard releases the handle on every exit path: explicitly
//! through [`Scoped::release`], or on drop if an error unwinds the session
//! first.

use std::ops::{Deref, DerefMut};

use provkit_core::{SigningError, Stream};

use crate::signer::SignerInfo;

/// A handle that must be released exactly once.
pub trait Close {
    fn close(&mut self) -> Result<(), SigningError>;
}

/// Factory for engine handles.
pub trait SigningEngine {
    /// Certificate and key material bound to an algorithm.
    type Signer: Close;
    /// A manifest loaded into the engine, ready to sign.
    type Builder: BuilderHandle<Self::Signer>;

    /// Create a signer from PEM material.
    fn signer_from_info(&self, info: &SignerInfo) -> Result<Self::Signer, SigningError>;

    /// Load manifest JSON into a builder.
    fn builder_from_json(&self, manifest_json: &str) -> Result<Self::Builder, SigningError>;
}

/// Operations on a loaded manifest.
pub trait BuilderHandle<S>: Close {
    /// Produce a detached manifest instead of embedding it.
    fn set_no_embed(&mut self);

    /// Read the asset from `source`, write the signed asset to `dest`, and
    /// return the manifest bytes.
    fn sign(
        &mut self,
        mime_type: &str,
        source: &mut dyn Stream,
        dest: &mut dyn Stream,
        signer: &S,
    ) -> Result<Vec<u8>, SigningError>;

    /// Write the builder state as an archive.
    fn to_archive(&mut self, dest: &mut dyn Stream) -> Result<(), SigningError>;
}

/// Owns a [`Close`] handle and releases it exactly once.
pub struct Scoped<H: Close> {
    handle: H,
    released: bool,
    name: &'static str,
}

impl<H: Close> Scoped<H> {
    /// Take ownership of `handle`. `name` labels the handle in logs.
    pub fn new(name: &'static str, handle: H) -> Self {
        Self {
            handle,
            released: false,
            name,
        }
    }

    /// Release now and report the engine's answer.
    pub fn release(mut self) -> Result<(), SigningError> {
        self.released = true;
        tracing::trace!(handle = self.name, "releasing engine handle");
        self.handle.close()
    }
}

impl<H: Close> Deref for Scoped<H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.handle
    }
}

impl<H: Close> DerefMut for Scoped<H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut self.handle
    }
}

impl<H: Close> Drop for Scoped<H> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        tracing::debug!(handle = self.name, "releasing engine handle on early exit");
        if let Err(e) = self.handle.close() {
            tracing::warn!(handle = self.name, error = %e, "engine handle release failed");
        }
    }
}

//! # Signing Sessions
//!
//! One blocking call into the engine per session. The manifest is checked
//! at the strict parsing boundary first, so malformed documents fail with
//! a [`ParseError`](provkit_core::ParseError) before any handle is created.
//!
//! ## Resource Discipline
//!
//! Handles are released in reverse acquisition order: builder, then
//! signer. On the success path each release is checked and a failure is
//! reported as a signing error. On an error path the [`Scoped`] guards
//! release whatever was acquired and the original error is returned.

use std::path::Path;

use provkit_core::{FileMode, FileStream, ProvError, Stream};
use provkit_manifest::ManifestDocument;

use crate::engine::{BuilderHandle, Scoped, SigningEngine};
use crate::signer::SignerInfo;

/// Per-session switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignOptions {
    /// Return a detached manifest and leave the asset bytes unchanged.
    pub no_embed: bool,
}

/// Sign `source` into `dest` with the given manifest. Returns the
/// manifest bytes produced by the engine.
pub fn sign_manifest<E: SigningEngine>(
    engine: &E,
    signer_info: &SignerInfo,
    manifest_json: &str,
    mime_type: &str,
    source: &mut dyn Stream,
    dest: &mut dyn Stream,
    options: SignOptions,
) -> Result<Vec<u8>, ProvError> {
    let manifest = ManifestDocument::from_json(manifest_json)?;

    let signer = Scoped::new("signer", engine.signer_from_info(signer_info)?);
    let mut builder = Scoped::new("builder", engine.builder_from_json(manifest_json)?);
    if options.no_embed {
        builder.set_no_embed();
    }

    let manifest_bytes = builder.sign(mime_type, source, dest, &*signer)?;
    dest.flush()?;

    builder.release()?;
    signer.release()?;

    tracing::info!(
        mime_type,
        algorithm = %signer_info.algorithm,
        title = manifest.title.as_deref().unwrap_or(""),
        manifest_len = manifest_bytes.len(),
        no_embed = options.no_embed,
        "manifest signed"
    );
    Ok(manifest_bytes)
}

/// Sign a file on disk. Both file streams are closed whether signing
/// succeeds or fails.
pub fn sign_file<E: SigningEngine>(
    engine: &E,
    signer_info: &SignerInfo,
    manifest_json: &str,
    mime_type: &str,
    source_path: impl AsRef<Path>,
    dest_path: impl AsRef<Path>,
    options: SignOptions,
) -> Result<Vec<u8>, ProvError> {
    let mut source = FileStream::open(source_path, FileMode::Read)?;
    let mut dest = FileStream::open(dest_path, FileMode::Write)?;

    let result = sign_manifest(
        engine,
        signer_info,
        manifest_json,
        mime_type,
        &mut source,
        &mut dest,
        options,
    );

    let closed_source = source.close();
    let closed_dest = dest.close();
    let manifest_bytes = result?;
    closed_source?;
    closed_dest?;
    Ok(manifest_bytes)
}

/// Write the engine's archive of the manifest to `dest`.
pub fn archive_manifest<E: SigningEngine>(
    engine: &E,
    manifest_json: &str,
    dest: &mut dyn Stream,
) -> Result<(), ProvError> {
    ManifestDocument::from_json(manifest_json)?;

    let mut builder = Scoped::new("builder", engine.builder_from_json(manifest_json)?);
    builder.to_archive(dest)?;
    dest.flush()?;
    builder.release()?;

    tracing::info!(archive_len = dest.position(), "manifest archived");
    Ok(())
}

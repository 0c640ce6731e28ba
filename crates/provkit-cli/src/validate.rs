//! # Validate Subcommand
//!
//! Runs manifest JSON files through the same strict parser the signing
//! session uses, so a file that passes here will not be rejected at the
//! engine boundary for structural reasons.
//!
//! Exit codes: `0` when every file is valid, `2` when any file is
//! rejected. Unreadable files are errors (`1`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use provkit_manifest::ManifestDocument;

/// Arguments for `provkit validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest JSON files to check.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print a one-line summary for each valid manifest.
    #[arg(long)]
    pub summary: bool,
}

/// Outcome for one file.
#[derive(Debug)]
pub enum Verdict {
    Valid(ManifestDocument),
    Invalid(String),
}

/// Strictly parse the manifest at `path`.
pub fn validate_file(path: &Path) -> Result<Verdict> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading manifest: {}", path.display()))?;
    Ok(match ManifestDocument::from_json(&text) {
        Ok(document) => Verdict::Valid(document),
        Err(e) => Verdict::Invalid(e.to_string()),
    })
}

fn summarize(document: &ManifestDocument) -> String {
    let labels: Vec<&str> = document.assertions.iter().map(|a| a.label.as_str()).collect();
    format!(
        "title={} format={} ingredients={} assertions=[{}]",
        document.title.as_deref().unwrap_or("-"),
        document.format.as_deref().unwrap_or("-"),
        document.ingredients.len(),
        labels.join(", ")
    )
}

/// Execute `provkit validate`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut rejected = 0usize;
    for path in &args.paths {
        match validate_file(path)? {
            Verdict::Valid(document) => {
                if args.summary {
                    println!("OK: {} {}", path.display(), summarize(&document));
                } else {
                    println!("OK: {}", path.display());
                }
            }
            Verdict::Invalid(reason) => {
                rejected += 1;
                eprintln!("INVALID: {}: {reason}", path.display());
            }
        }
    }
    tracing::info!(checked = args.paths.len(), rejected, "validation finished");
    Ok(if rejected == 0 { 0 } else { 2 })
}

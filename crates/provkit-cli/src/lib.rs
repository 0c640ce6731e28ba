//! # provkit-cli: Command-Line Front End
//!
//! Provides the `provkit` binary over the library crates.
//!
//! ## Subcommands
//!
//! - `provkit preset`: Build a manifest from a named preset and print or
//!   write its JSON.
//! - `provkit validate`: Run a manifest file through the strict parser.
//! - `provkit config`: Show the resolved signing configuration, or check
//!   that the signer material it points at is readable.
//!
//! ```bash
//! provkit preset photo --title beach.jpg --author "A. Person" --lat 52.5 --lon 13.4
//! provkit validate manifest.json
//! provkit --config provkit.yaml config show
//! ```

pub mod config;
pub mod preset;
pub mod validate;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Open `path` for writing, creating missing parent directories, or fall
/// back to stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory: {}", parent.display()))?;
            }
            let file = File::create(path).with_context(|| format!("creating: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_output_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/manifest.json");
        let mut out = open_output(Some(&path)).unwrap();
        out.write_all(b"{}").unwrap();
        out.flush().unwrap();
        drop(out);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn open_output_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        std::fs::write(&path, "stale content").unwrap();
        let mut out = open_output(Some(&path)).unwrap();
        out.write_all(b"x").unwrap();
        out.flush().unwrap();
        drop(out);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x");
    }
}

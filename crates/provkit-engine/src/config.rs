//! # Engine Configuration
//!
//! Where signer material lives and which services to use. Loaded from a
//! YAML file, then overridden from the environment:
//!
//! | Variable | Field |
//! |---|---|
//! | `PROVKIT_ALGORITHM` | `algorithm` |
//! | `PROVKIT_CERT_PATH` | `certificate_path` |
//! | `PROVKIT_KEY_PATH` | `private_key_path` |
//! | `PROVKIT_TA_URL` | `timestamp_url` |
//! | `SIGNING_SERVER_URL` | `signing_server_url` |
//!
//! An unparseable algorithm override is logged and ignored. Empty values
//! count as unset.

use std::path::{Path, PathBuf};

use provkit_core::ProvError;
use provkit_manifest::vocab::timestamp_authorities;
use serde::{Deserialize, Serialize};

use crate::algorithm::SigningAlgorithm;
use crate::signer::SignerInfo;

/// Path appended to the signing server URL.
pub const SIGNING_PATH: &str = "/api/v1/c2pa/sign";

fn default_timestamp_url() -> Option<String> {
    Some(timestamp_authorities::DIGICERT.to_string())
}

/// Signing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: SigningAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_server_url: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: SigningAlgorithm::default(),
            certificate_path: None,
            private_key_path: None,
            timestamp_url: default_timestamp_url(),
            signing_server_url: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EngineConfig {
    /// Read a YAML file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProvError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
            .map_err(|e| ProvError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse YAML text. An empty document is the default configuration.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = non_empty(lookup("PROVKIT_ALGORITHM")) {
            match raw.parse() {
                Ok(algorithm) => self.algorithm = algorithm,
                Err(e) => tracing::warn!(
                    error = %e,
                    fallback = %self.algorithm,
                    "ignoring PROVKIT_ALGORITHM override"
                ),
            }
        }
        if let Some(path) = non_empty(lookup("PROVKIT_CERT_PATH")) {
            self.certificate_path = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty(lookup("PROVKIT_KEY_PATH")) {
            self.private_key_path = Some(PathBuf::from(path));
        }
        if let Some(url) = non_empty(lookup("PROVKIT_TA_URL")) {
            self.timestamp_url = Some(url);
        }
        if let Some(url) = non_empty(lookup("SIGNING_SERVER_URL")) {
            self.signing_server_url = Some(url);
        }
        self
    }

    /// The remote signing endpoint, when a server is configured.
    pub fn signing_url(&self) -> Option<String> {
        let server = non_empty(self.signing_server_url.clone())?;
        Some(format!("{}{SIGNING_PATH}", server.trim_end_matches('/')))
    }

    /// Read the certificate and key files into a [`SignerInfo`].
    pub fn signer_info(&self) -> Result<SignerInfo, ProvError> {
        let cert_path = self
            .certificate_path
            .as_ref()
            .ok_or_else(|| ProvError::Config("certificate_path is not set".into()))?;
        let key_path = self
            .private_key_path
            .as_ref()
            .ok_or_else(|| ProvError::Config("private_key_path is not set".into()))?;

        let info = SignerInfo::new(
            self.algorithm,
            std::fs::read_to_string(cert_path)?,
            std::fs::read_to_string(key_path)?,
        );
        Ok(match non_empty(self.timestamp_url.clone()) {
            Some(url) => info.with_ta_url(url),
            None => info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.algorithm, SigningAlgorithm::Es256);
        assert_eq!(cfg.timestamp_url.as_deref(), Some("http://timestamp.digicert.com"));
        assert_eq!(cfg.signing_url(), None);
    }

    #[test]
    fn yaml_with_partial_keys() {
        let cfg = EngineConfig::from_yaml("algorithm: ps256\ncertificate_path: /etc/cert.pem\n").unwrap();
        assert_eq!(cfg.algorithm, SigningAlgorithm::Ps256);
        assert_eq!(cfg.certificate_path, Some(PathBuf::from("/etc/cert.pem")));
        assert_eq!(cfg.timestamp_url.as_deref(), Some("http://timestamp.digicert.com"));
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(EngineConfig::from_yaml("  \n").unwrap(), EngineConfig::default());
    }

    #[test]
    fn bad_algorithm_in_yaml_is_an_error() {
        assert!(EngineConfig::from_yaml("algorithm: md5").is_err());
    }

    #[test]
    fn overrides_apply() {
        let cfg = EngineConfig::default().apply_overrides(lookup(&[
            ("PROVKIT_ALGORITHM", "ED25519"),
            ("PROVKIT_CERT_PATH", "/c.pem"),
            ("PROVKIT_KEY_PATH", "/k.pem"),
            ("PROVKIT_TA_URL", "http://timestamp.sectigo.com"),
            ("SIGNING_SERVER_URL", "https://signer.example.com/"),
        ]));
        assert_eq!(cfg.algorithm, SigningAlgorithm::Ed25519);
        assert_eq!(cfg.private_key_path, Some(PathBuf::from("/k.pem")));
        assert_eq!(cfg.timestamp_url.as_deref(), Some("http://timestamp.sectigo.com"));
        assert_eq!(
            cfg.signing_url().as_deref(),
            Some("https://signer.example.com/api/v1/c2pa/sign")
        );
    }

    #[test]
    fn invalid_algorithm_override_keeps_previous() {
        let cfg = EngineConfig::default().apply_overrides(lookup(&[("PROVKIT_ALGORITHM", "rsa1")]));
        assert_eq!(cfg.algorithm, SigningAlgorithm::Es256);
    }

    #[test]
    fn empty_server_url_counts_as_unset() {
        let cfg = EngineConfig::default().apply_overrides(lookup(&[("SIGNING_SERVER_URL", "")]));
        assert_eq!(cfg.signing_url(), None);
        let cfg = EngineConfig {
            signing_server_url: Some(String::new()),
            ..EngineConfig::default()
        };
        assert_eq!(cfg.signing_url(), None);
    }

    #[test]
    fn signer_info_requires_paths() {
        let err = EngineConfig::default().signer_info().unwrap_err();
        assert!(matches!(err, ProvError::Config(ref m) if m.contains("certificate_path")));
    }

    #[test]
    fn signer_info_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("cert.pem");
        let key = dir.path().join("key.pem");
        std::fs::write(&cert, "CERT").unwrap();
        std::fs::write(&key, "KEY").unwrap();
        let cfg = EngineConfig {
            certificate_path: Some(cert),
            private_key_path: Some(key),
            ..EngineConfig::default()
        };
        let info = cfg.signer_info().unwrap();
        assert_eq!(info.certificate_pem, "CERT");
        assert_eq!(info.private_key_pem, "KEY");
        assert_eq!(info.ta_url.as_deref(), Some("http://timestamp.digicert.com"));
    }

    #[test]
    fn unreadable_key_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let cert = dir.path().join("cert.pem");
        std::fs::write(&cert, "CERT").unwrap();
        let cfg = EngineConfig {
            certificate_path: Some(cert),
            private_key_path: Some(dir.path().join("missing.pem")),
            ..EngineConfig::default()
        };
        assert!(matches!(cfg.signer_info(), Err(ProvError::Io(_))));
    }

    #[test]
    fn load_reports_path_on_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provkit.yaml");
        std::fs::write(&path, "algorithm: [not, a, name]").unwrap();
        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, ProvError::Config(ref m) if m.contains("provkit.yaml")));
    }
}

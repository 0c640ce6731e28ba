//! # Signer Material

use crate::algorithm::SigningAlgorithm;

/// Everything the engine needs to create a signer.
///
/// `Debug` never prints the private key.
#[derive(Clone, PartialEq, Eq)]
pub struct SignerInfo {
    pub algorithm: SigningAlgorithm,
    /// PEM certificate chain.
    pub certificate_pem: String,
    /// PEM private key.
    pub private_key_pem: String,
    /// Timestamp authority URL, if the signature should be timestamped.
    pub ta_url: Option<String>,
}

impl SignerInfo {
    pub fn new(
        algorithm: SigningAlgorithm,
        certificate_pem: impl Into<String>,
        private_key_pem: impl Into<String>,
    ) -> Self {
        Self {
            algorithm,
            certificate_pem: certificate_pem.into(),
            private_key_pem: private_key_pem.into(),
            ta_url: None,
        }
    }

    pub fn with_ta_url(mut self, ta_url: impl Into<String>) -> Self {
        self.ta_url = Some(ta_url.into());
        self
    }
}

impl std::fmt::Debug for SignerInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerInfo")
            .field("algorithm", &self.algorithm)
            .field("certificate_pem_len", &self.certificate_pem.len())
            .field("private_key_pem", &"[REDACTED]")
            .field("ta_url", &self.ta_url)
            .finish()
    }
}

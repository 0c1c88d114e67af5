//! Provider fingerprint value object
//!
//! A stable hash identifying *where* a provider configuration points to.
//! Two configurations sharing a fingerprint manage the same resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fingerprint of a provider configuration
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Prefix for SHA-256 fingerprints
    pub const PREFIX: &'static str = "sha256:";

    /// Compute the fingerprint of a provider kind and its identity part
    pub fn compute(kind: &str, identity: &str) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(kind.as_bytes());
        hasher.update(b"\0");
        hasher.update(identity.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

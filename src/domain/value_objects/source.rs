//! Deployment source payload
//!
//! What gets deployed. The core never interprets it; promotions copy it as is.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SourceData {
    /// Raw service definition, e.g. a compose file
    Raw(String),
    /// A commit of the app repository
    Git { branch: String, hash: String },
    /// An uploaded archive stored by the execution layer
    Archive { path: String },
}

impl SourceData {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceData::Raw(_) => "raw",
            SourceData::Git { .. } => "git",
            SourceData::Archive { .. } => "archive",
        }
    }
}

impl fmt::Display for SourceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceData::Raw(content) => write!(f, "raw ({} bytes)", content.len()),
            SourceData::Git { branch, hash } => write!(f, "git {}@{}", branch, hash),
            SourceData::Archive { path } => write!(f, "archive {}", path),
        }
    }
}

//! Target url value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Public url at which a target exposes the apps deployed on it
///
/// Only `http` and `https` urls with a host are accepted. The trailing slash
/// added by the parser on an empty path is dropped so `http://my-url.com`
/// keeps its written form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Url(String);

impl Url {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidUrl {
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = ::url::Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("unsupported scheme"));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }

        let mut normalized = parsed.to_string();
        if parsed.path() == "/" && parsed.query().is_none() && parsed.fragment().is_none() {
            normalized.pop();
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_secure(&self) -> bool {
        self.0.starts_with("https://")
    }
}

impl TryFrom<String> for Url {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Url::parse(&value)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.0
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_written_form() {
        let url = Url::parse("http://my-url.com").unwrap();
        assert_eq!(url.as_str(), "http://my-url.com");
        assert!(!url.is_secure());
    }

    #[test]
    fn parse_keeps_paths() {
        let url = Url::parse("https://docker.localhost/apps").unwrap();
        assert_eq!(url.to_string(), "https://docker.localhost/apps");
        assert!(url.is_secure());
    }

    #[test]
    fn parse_rejects_other_schemes() {
        let err = Url::parse("ftp://my-url.com").unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl { .. }));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Url::parse("not a url").is_err());
        assert!(Url::parse("").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Url = serde_json::from_str("\"http://my-url.com\"").unwrap();
        assert_eq!(ok.as_str(), "http://my-url.com");
        assert!(serde_json::from_str::<Url>("\"mailto:me@example.com\"").is_err());
    }
}

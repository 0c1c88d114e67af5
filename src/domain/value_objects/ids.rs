//! Identifiers
//!
//! Aggregates reference each other only through these ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random id
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Identity of a target
    TargetId
);

opaque_id!(
    /// Identity of an app
    AppId
);

opaque_id!(
    /// Authenticated user, owned by the auth context
    UserId
);

/// Per-app deployment number, starting at 1
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DeploymentNumber(u32);

impl DeploymentNumber {
    /// The number before any deployment exists
    pub const NONE: DeploymentNumber = DeploymentNumber(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Number allocated to the deployment following this one, `None` once
    /// the numbering is exhausted
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u32> for DeploymentNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DeploymentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite identity of a deployment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeploymentId {
    app_id: AppId,
    number: DeploymentNumber,
}

impl DeploymentId {
    pub fn new(app_id: AppId, number: DeploymentNumber) -> Self {
        Self { app_id, number }
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }

    pub fn deployment_number(&self) -> DeploymentNumber {
        self.number
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.app_id, self.number)
    }
}

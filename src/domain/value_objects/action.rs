//! Who did something, and when

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// A user action recorded on an aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    by: UserId,
    at: DateTime<Utc>,
}

impl Action {
    /// Action performed now by the given user
    pub fn new(by: UserId) -> Self {
        Self { by, at: Utc::now() }
    }

    pub fn at(by: UserId, at: DateTime<Utc>) -> Self {
        Self { by, at }
    }

    pub fn by(&self) -> &UserId {
        &self.by
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.at
    }
}

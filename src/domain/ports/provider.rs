//! Provider port
//!
//! The execution layer that actually removes resources from targets.

use crate::domain::entities::{App, CleanupStrategy, Target};
use crate::domain::value_objects::Environment;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("target unreachable: {message}")]
    Unreachable { message: String },

    #[error("cleanup failed: {message}")]
    CleanupFailed { message: String },
}

pub trait Provider: Send + Sync {
    /// Remove everything the platform created on `target`
    fn cleanup_target(&self, target: &Target, strategy: CleanupStrategy)
        -> Result<(), ProviderError>;

    /// Remove the resources of one app environment from `target`
    fn cleanup_app(
        &self,
        app: &App,
        environment: Environment,
        target: &Target,
        strategy: CleanupStrategy,
    ) -> Result<(), ProviderError>;
}

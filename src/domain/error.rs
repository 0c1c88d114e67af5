//! Domain errors
//!
//! Every rejected aggregate operation returns one of these. Callers map them to
//! status codes through [`DomainError::kind`], never through the message text.

use thiserror::Error;

use crate::error::ErrorKind;

/// Result type alias for aggregate operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Business rule violations raised by the aggregates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Another target already uses this url
    #[error("url already taken by another target")]
    UrlAlreadyTaken,

    /// Another target already uses this provider configuration
    #[error("provider configuration already taken by another target")]
    ConfigAlreadyTaken,

    /// Another app already uses this name
    #[error("app name already taken")]
    AppNameAlreadyTaken,

    /// The target referenced by an environment binding does not exist
    #[error("target not found")]
    TargetNotFound,

    #[error("target configuration is in progress")]
    TargetConfigurationInProgress,

    #[error("target configuration has failed")]
    TargetConfigurationFailed,

    #[error("target cleanup has been requested")]
    TargetCleanupRequested,

    /// The fingerprint of a provider configuration cannot change
    #[error("provider update not permitted: fingerprint differs")]
    ProviderUpdateNotPermitted,

    #[error("app cleanup has been requested")]
    AppCleanupRequested,

    #[error("a production deployment cannot be promoted")]
    CouldNotPromoteProductionDeployment,

    #[error("deployment has already started")]
    DeploymentAlreadyStarted,

    #[error("deployment is not running")]
    DeploymentNotRunning,

    /// The target is still referenced by at least one app
    #[error("target is still in use by an app")]
    TargetInUse,

    #[error("running or pending deployments on target")]
    RunningOrPendingDeployments,

    /// Cleanup must be requested and confirmed before deletion
    #[error("target resources must be cleaned up first")]
    TargetCleanupNeeded,

    #[error("app resources must be cleaned up first")]
    AppCleanupNeeded,

    /// The app allocated the last representable deployment number
    #[error("no deployment number left for this app")]
    DeploymentNumbersExhausted,

    #[error("invalid url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid app name '{value}'")]
    InvalidAppName { value: String },
}

impl DomainError {
    /// Stable category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::TargetNotFound => ErrorKind::NotFound,
            DomainError::UrlAlreadyTaken
            | DomainError::ConfigAlreadyTaken
            | DomainError::AppNameAlreadyTaken => ErrorKind::Conflict,
            DomainError::TargetConfigurationInProgress
            | DomainError::TargetConfigurationFailed
            | DomainError::TargetCleanupRequested
            | DomainError::ProviderUpdateNotPermitted
            | DomainError::AppCleanupRequested
            | DomainError::CouldNotPromoteProductionDeployment
            | DomainError::DeploymentAlreadyStarted
            | DomainError::DeploymentNotRunning => ErrorKind::InvalidTransition,
            DomainError::TargetInUse
            | DomainError::RunningOrPendingDeployments
            | DomainError::TargetCleanupNeeded
            | DomainError::AppCleanupNeeded
            | DomainError::DeploymentNumbersExhausted => ErrorKind::Precondition,
            DomainError::InvalidUrl { .. } | DomainError::InvalidAppName { .. } => {
                ErrorKind::Validation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(DomainError::UrlAlreadyTaken.kind(), ErrorKind::Conflict);
        assert_eq!(DomainError::ConfigAlreadyTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            DomainError::ProviderUpdateNotPermitted.kind(),
            ErrorKind::InvalidTransition
        );
        assert_eq!(DomainError::TargetInUse.kind(), ErrorKind::Precondition);
        assert_eq!(DomainError::TargetCleanupNeeded.kind(), ErrorKind::Precondition);
        assert_eq!(DomainError::TargetNotFound.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn invalid_url_display() {
        let err = DomainError::InvalidUrl {
            value: "ftp://x".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert_eq!(err.to_string(), "invalid url 'ftp://x': unsupported scheme");
    }
}

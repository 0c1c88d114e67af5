//! Error types for Shipyard
//!
//! Uses `thiserror` for library errors. Every error exposes an [`ErrorKind`]
//! so the API layer can pick a status code without parsing messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::ports::{ProviderError, StoreError};

/// Result type alias for Shipyard operations
pub type ShipyardResult<T> = Result<T, ShipyardError>;

/// Stable error categories surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing app, target or deployment
    NotFound,
    /// Uniqueness violation or concurrent modification
    Conflict,
    /// Operation not allowed in the aggregate's current state
    InvalidTransition,
    /// A required fact about the outside world does not hold
    Precondition,
    /// Malformed input
    Validation,
    /// Storage, provider or wiring failure
    Infrastructure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::InvalidTransition => "invalid_transition",
            ErrorKind::Precondition => "precondition",
            ErrorKind::Validation => "validation",
            ErrorKind::Infrastructure => "infrastructure",
        };
        write!(f, "{}", s)
    }
}

/// Main error type for Shipyard operations
#[derive(Error, Debug)]
pub enum ShipyardError {
    /// Aggregate looked up by a command does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Business rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Repository failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Provider failure while cleaning up resources
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// No handler registered on the bus for this command
    #[error("no handler registered for command '{command}'")]
    HandlerNotRegistered { command: &'static str },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShipyardError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        ShipyardError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Stable category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShipyardError::NotFound { .. } => ErrorKind::NotFound,
            ShipyardError::Domain(err) => err.kind(),
            ShipyardError::Store(StoreError::Conflict { .. }) => ErrorKind::Conflict,
            ShipyardError::Store(_)
            | ShipyardError::Provider(_)
            | ShipyardError::HandlerNotRegistered { .. }
            | ShipyardError::Io(_) => ErrorKind::Infrastructure,
            ShipyardError::InvalidConfig { .. } => ErrorKind::Validation,
        }
    }

    /// The domain error, if this failure came from an aggregate
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            ShipyardError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

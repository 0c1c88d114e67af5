//! Errors shared by the repository ports

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The aggregate changed since it was loaded, or its identity is taken
    #[error("{entity} {id} was modified concurrently")]
    Conflict { entity: &'static str, id: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

//! Error types for the repository layer

use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The record violates a store invariant (e.g. empty YAML)
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The backing storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}

//! Failure vocabulary shared by all repository implementations.
use thiserror::Error;

/// A failure reported by an external collaborator. The core never retries
/// or reinterprets these; services wrap them with operation context and
/// propagate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    /// Transport-level failure talking to the remote system.
    #[error("remote call failed: {0}")]
    Remote(String),

    /// The remote system accepted the call but rejected the payload.
    #[error("remote system rejected the request: {0}")]
    Rejected(String),

    #[error("unexpected repository error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

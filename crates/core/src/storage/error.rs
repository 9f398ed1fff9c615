use thiserror::Error;

/// Errors a storage backend can report when creating a table.
///
/// A name collision is reported as
/// [`CreateOutcome::AlreadyExists`](super::CreateOutcome::AlreadyExists)
/// instead. Every variant displays the backend's message verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("{0}")]
    PermissionDenied(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Throttled(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Service(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

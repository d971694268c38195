//! Domain error types.

use thiserror::Error;

/// Validation failure while constructing a value object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Failure reported by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user '{0}' already exists")]
    DuplicateUser(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Failure while pushing a message to a connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' not found")]
    ConnectionNotFound(String),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Failure reported by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username '{0}' already exists")]
    UsernameTaken(String),
    #[error("user '{0}' not found")]
    UserNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

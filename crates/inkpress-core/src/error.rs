//! Domain-level error types.

use thiserror::Error;

use crate::ports::{AuthError, ImageHostError};

/// Coarse classification of a [`DomainError`], for callers that need to
/// branch on the failure class rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Upstream,
    NotFound,
    Unauthorized,
    Internal,
}

/// Domain errors - business logic failures.
///
/// The `Display` output is the human-readable message returned to clients.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    /// The image host or the document store failed.
    #[error("{0}")]
    Upstream(String),

    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str },

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Upstream(_) => ErrorKind::Upstream,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized(_) => ErrorKind::Unauthorized,
            DomainError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(entity_type: &'static str) -> Self {
        DomainError::NotFound { entity_type }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::not_found("Record"),
            other => DomainError::Upstream(other.to_string()),
        }
    }
}

impl From<ImageHostError> for DomainError {
    fn from(err: ImageHostError) -> Self {
        DomainError::Upstream(err.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => DomainError::Internal(msg),
            other => DomainError::Unauthorized(other.to_string()),
        }
    }
}

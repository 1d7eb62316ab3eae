// Account Errors - classified failures for the store, validator and flows
//
// Failures are classified values, never status codes. The HTTP layer alone
// decides which status a classification maps to.

use thiserror::Error;

pub type AccountResult<T> = Result<T, AccountError>;

/// Failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Input failed a field rule
    #[error("{0}")]
    BadRequest(String),

    /// No record matches
    #[error("{0}")]
    NotFound(String),

    /// Unexpected fault (e.g. a poisoned store lock)
    #[error("{0}")]
    Internal(String),
}

impl AccountError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AccountError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AccountError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AccountError::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::BadRequest(_) => ErrorKind::BadRequest,
            AccountError::NotFound(_) => ErrorKind::NotFound,
            AccountError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Human-readable message sent back to the caller
    pub fn message(&self) -> &str {
        match self {
            AccountError::BadRequest(m)
            | AccountError::NotFound(m)
            | AccountError::Internal(m) => m,
        }
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the driving collaborator reports it and
/// asks again. Raw requested values are carried as `i64` because they may be
/// outside the valid id range (that is usually why the request failed).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested car unit is not a positive id currently in the pool.
    #[error("car unit {0} is not available")]
    InvalidUnitSelection(i64),

    /// No open transaction carries the requested id.
    #[error("no transaction found for ID {0}")]
    TransactionNotFound(i64),

    /// A purchase batch must contain at least one unit.
    #[error("batch size must be a positive integer (got {0})")]
    InvalidBatchSize(i64),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

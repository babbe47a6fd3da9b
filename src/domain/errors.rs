// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by entities, value objects, and repository contracts.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or entity invariant was violated.
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness or referential rule blocks the write.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The backing store failed; details stay out of client responses.
    #[error("persistence error: {0}")]
    Persistence(String),
}

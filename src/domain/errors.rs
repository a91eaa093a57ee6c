// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("slug conflict: {0}")]
    SlugConflict(String),
    #[error("unique constraint violated: {0}")]
    TransientUniqueViolation(String),
    #[error("resource has dependents: {0}")]
    HasDependents(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// A unique race lost to a concurrent writer; the caller may re-run its lookup.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::TransientUniqueViolation(_))
    }
}

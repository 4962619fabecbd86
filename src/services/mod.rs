//! Business logic invoked by the HTTP routes.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod seed;

/// Errors surfaced by service functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The operation is not allowed in the current environment.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

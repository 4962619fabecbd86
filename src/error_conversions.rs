//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! conversions from [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
#[cfg(feature = "data")]
use crate::repository::errors::RepositoryError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

#[cfg(feature = "data")]
impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn constraint_errors_keep_their_message() {
        let repo: RepositoryError = TypeConstraintError::InvalidPhone.into();
        assert_eq!(repo.to_string(), "Invalid advocate record: invalid phone number");

        let service: ServiceError = TypeConstraintError::NegativeValue.into();
        assert!(matches!(service, ServiceError::TypeConstraint(msg) if msg == "value cannot be negative"));
    }
}

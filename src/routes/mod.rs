use actix_web::HttpResponse;

use crate::dto::api::ErrorResponse;
use crate::services::ServiceError;

pub mod api;
pub mod seed;

/// Maps a service failure to an HTTP response without leaking store details.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Forbidden(message) => {
            HttpResponse::Forbidden().json(ErrorResponse::new(message.as_str()))
        }
        ServiceError::TypeConstraint(_) | ServiceError::Repository(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

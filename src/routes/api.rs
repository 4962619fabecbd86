use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::api::{AdvocatesQuery, list_advocates};

/// Query pairs are extracted as a list so repeated keys never fail the
/// request.
#[get("/advocates")]
pub async fn api_advocates(
    params: web::Query<Vec<(String, String)>>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = AdvocatesQuery::from_pairs(params.into_inner());

    match list_advocates(repo.get_ref(), params) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list advocates: {err}");
            service_error_response(&err)
        }
    }
}

use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::api::SeedResponse;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::seed::seed_advocates;

#[post("/seed")]
pub async fn api_seed(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut rng = rand::rng();

    match seed_advocates(repo.get_ref(), server_config.get_ref(), &mut rng) {
        Ok(advocates) => HttpResponse::Ok().json(SeedResponse { advocates }),
        Err(err) => {
            log::error!("Failed to seed advocates: {err}");
            service_error_response(&err)
        }
    }
}

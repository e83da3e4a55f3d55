use verifier_env::{instrument, tracing};

use crate::logger;

/// .
#[instrument(skip_all)]
pub async fn health() -> impl actix_web::Responder {
    logger::info!("Health was called");
    actix_web::HttpResponse::Ok().body("health is good")
}

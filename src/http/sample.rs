//! The two toy endpoints. Each one records itself before answering.

use crate::metrics::Metrics;
use actix_web::{http::header::ContentType, route, web, HttpResponse, Responder};

/// HEAD is answered too and counted under `GET`, like any GET route.
#[route("/", method = "GET", method = "HEAD")]
pub async fn index(metrics: web::Data<Metrics>) -> impl Responder {
    metrics.increment("GET", "/", 200);
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Hello from sample app")
}

/// Always answers 500; nothing actually failed.
#[route("/error", method = "GET", method = "HEAD")]
pub async fn error(metrics: web::Data<Metrics>) -> impl Responder {
    metrics.increment("GET", "/error", 500);
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body("Error!")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(error);
}

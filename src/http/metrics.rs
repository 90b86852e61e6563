//! Prometheus scrape endpoint.

use crate::metrics::Metrics;
use actix_web::{error, route, web, HttpResponse};

#[route("/metrics", method = "GET", method = "HEAD")]
pub async fn scrape(metrics: web::Data<Metrics>) -> actix_web::Result<HttpResponse> {
    let body = metrics.render().map_err(|e| {
        log::error!("metrics render failed: {e}");
        error::ErrorInternalServerError(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(metrics.content_type())
        .body(body))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape);
}

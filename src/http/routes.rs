use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module at the root. Unknown paths get actix's 404.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::sample::init_routes)
        .configure(http::metrics::init_routes);
}

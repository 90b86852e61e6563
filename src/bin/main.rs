use actix_web::{middleware::Logger, web, App, HttpServer};
use sample_app::{config, http, metrics::Metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::settings();

    // One registry for the whole process; workers share it through `Data`.
    let metrics = web::Data::new(Metrics::new()?);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(metrics.clone())
            .configure(http::routes::init_routes)
    })
    .bind(settings.bind_addr())?;

    log::info!(
        "Sample app listening on http://{}:{}",
        settings.host,
        settings.port
    );

    server.run().await?;
    Ok(())
}

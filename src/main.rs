use std::io;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use storefront::config::Settings;
use storefront::state::AppState;
use storefront::web::{configure_app_routes, cors};

fn startup_error(err: impl std::fmt::Display) -> io::Error {
    tracing::error!(error = %err, "Startup failed");
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load().map_err(startup_error)?;
    let state = web::Data::new(AppState::from_settings(&settings).map_err(startup_error)?);

    let address = (settings.server.host.clone(), settings.server.port);
    tracing::info!("Starting HTTP server on http://{}:{}", address.0, address.1);

    let cors_settings = settings.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_settings))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_app_routes)
    })
    .bind(address)?
    .run()
    .await
}

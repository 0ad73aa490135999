use actix_web::{middleware, web, App, HttpServer};
use sommelier_web::config::Settings;
use sommelier_web::core::Resolver;
use sommelier_web::routes;
use sommelier_web::routes::pairing::AppState;
use sommelier_web::services::{GenerationClient, GeoIpClient};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting sommelier pairing service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the geolocation client
    let geoip = Arc::new(GeoIpClient::new(
        settings.geolocation.endpoint.clone(),
        settings.geolocation.timeout_secs,
    ));

    if settings.geolocation.enabled {
        info!("Geolocation enabled via {}", settings.geolocation.endpoint);
    } else {
        info!(
            "Geolocation disabled, defaulting to {} ({} hemisphere)",
            settings.geolocation.default_region, settings.geolocation.default_hemisphere
        );
    }

    // Initialize the generation client
    let generation = Arc::new(GenerationClient::new(
        settings.generation.host.clone(),
        settings.generation.model.clone(),
        settings.generation.timeout_secs,
    ));

    info!(
        "Generation client targeting {} (model: {})",
        settings.generation.host, settings.generation.model
    );

    // Initialize the resolver with the configured fallbacks
    let resolver = Resolver::new(
        settings.geolocation.default_region.clone(),
        settings.geolocation.default_hemisphere,
    );

    // Build application state
    let app_state = AppState {
        geoip,
        generation,
        resolver,
        geolocation_enabled: settings.geolocation.enabled,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

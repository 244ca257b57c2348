use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use vibe_search::config::Settings;
use vibe_search::routes::{self, search::AppState};
use vibe_search::{GeminiClient, Matcher, PropertyCatalog};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting vibe search service...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let catalog = Arc::new(PropertyCatalog::load(&settings.dataset.path).map_err(|e| {
        error!("Failed to load property dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?);

    info!("Loaded {} properties from {}", catalog.len(), settings.dataset.path);

    let gemini = GeminiClient::new(
        settings.gemini.endpoint,
        settings.gemini.api_key,
        settings.gemini.model,
        Duration::from_secs(settings.gemini.timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to create Gemini client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Gemini client initialized (model: {})", gemini.model());

    let app_state = AppState {
        catalog,
        matcher: Matcher::new(Arc::new(gemini)),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

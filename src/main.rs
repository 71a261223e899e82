use actix_web::{web, App, HttpServer, middleware};
use resume_renderer::api::{ApiState, configure_routes, json_config};
use resume_renderer::api::middleware::create_compression_middleware;
use resume_renderer::core::AppConfig;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use anyhow::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (.env + RESUME_* variables)
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level))
        )
        .init();

    tracing::info!("Starting Resume Renderer API");

    // Initialize Prometheus metrics
    prometheus::default_registry()
        .register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

    let host = config.host.clone();
    let port = config.port;
    let payload_limit = config.max_payload_bytes;
    let enable_compression = config.enable_compression;

    tracing::info!(
        default_template = %config.default_template,
        compression = enable_compression,
        "Starting server on {}:{}", host, port
    );

    // Initialize application state
    let state = web::Data::new(ApiState::new(&config)?);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(json_config(payload_limit))
            .wrap(create_compression_middleware(enable_compression))
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}

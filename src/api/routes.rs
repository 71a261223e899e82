use actix_web::{error, web, HttpResponse};

use super::error::{ApiError, ApiResult};
use super::handlers;
use super::middleware::create_cors_middleware;
use super::state::ApiState;
use super::template_handler;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::get().to(metrics_endpoint))

        // API v1
        .service(
            web::scope("/api/v1")
                .wrap(create_cors_middleware())

                // Template catalog
                .service(
                    web::scope("/templates")
                        .route("", web::get().to(template_handler::list_templates))
                        .route("/sample", web::get().to(template_handler::sample_resume))
                        .route("/{id}/preview", web::get().to(template_handler::preview_template))
                )

                // Resume rendering
                .service(
                    web::scope("/resumes")
                        .route("/render", web::post().to(handlers::render_resume))
                )
        );
}

/// Límite de tamaño del cuerpo JSON; los errores de parseo salen como 400
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let message = match &err {
                error::JsonPayloadError::OverflowKnownLength { .. }
                | error::JsonPayloadError::Overflow { .. } => "Payload too large".to_string(),
                other => format!("Invalid request body: {}", other),
            };
            ApiError::bad_request(message).into()
        })
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

async fn metrics_endpoint(state: web::Data<ApiState>) -> ApiResult<HttpResponse> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let mut metric_families = state.metrics.registry().gather();
    metric_families.extend(prometheus::gather());
    let mut buffer = vec![];

    encoder.encode(&metric_families, &mut buffer)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

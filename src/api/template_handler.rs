use actix_web::{web, HttpResponse};
use serde_json::json;

use super::error::{ApiError, ApiResult};
use super::state::ApiState;
use crate::templates::{self, TemplateId};

pub async fn list_templates(state: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "templates": state.engine.list_templates(),
        "default": state.engine.default_template(),
    }))
}

/// Currículum de ejemplo usado en las vistas previas
pub async fn sample_resume() -> HttpResponse {
    HttpResponse::Ok().json(templates::sample_resume())
}

pub async fn preview_template(
    path: web::Path<String>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let template_id = path.into_inner();

    let template_id: TemplateId = template_id
        .parse()
        .map_err(|_| ApiError::not_found(format!("Template not found: {}", template_id)))?;

    let engine = state.engine.clone();
    let html = tokio::task::spawn_blocking(move || engine.full_preview(template_id)).await??;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::error::ApiResult;
use super::state::ApiState;
use crate::models::ResumeRecord;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub template_id: Option<String>,
    pub resume: ResumeRecord,
}

pub async fn render_resume(
    req: web::Json<RenderRequest>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let req = req.into_inner();

    let (req, result) = tokio::task::spawn_blocking({
        let engine = state.engine.clone();
        move || {
            let result = engine.render_by_id(req.template_id.as_deref(), &req.resume);
            (req, result)
        }
    }).await?;

    let html = result.map_err(|e| {
        tracing::warn!(template = ?req.template_id, "Render rejected: {}", e);
        e
    })?;

    tracing::info!(
        template = req.template_id.as_deref().unwrap_or(state.engine.default_template().as_str()),
        bytes = html.len(),
        "Resume rendered"
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(req.resume.download_filename())],
        })
        .body(html))
}

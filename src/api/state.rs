use std::sync::Arc;

use crate::core::{AppConfig, RenderMetrics};
use crate::templates::TemplateEngine;

#[derive(Clone)]
pub struct ApiState {
    pub engine: Arc<TemplateEngine>,
    pub metrics: Arc<RenderMetrics>,
}

impl ApiState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let default_template = config.default_template()?;

        // Initialize render metrics
        let metrics = Arc::new(RenderMetrics::new()?);

        // Initialize template engine
        let engine = Arc::new(TemplateEngine::new(default_template).with_metrics(metrics.clone()));

        Ok(ApiState { engine, metrics })
    }
}

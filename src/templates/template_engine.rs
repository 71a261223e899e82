use std::sync::Arc;
use std::time::Instant;

use crate::core::{RenderMetrics, RenderResult};
use crate::models::ResumeRecord;
use crate::templates::sample::sample_resume;
use crate::templates::template_models::{TemplateDescriptor, TemplateId};
use crate::templates::template_trait::TemplateRegistry;

/// Renderiza un currículum con la plantilla indicada.
///
/// Función pura: misma entrada, mismo documento byte a byte.
pub fn render(template_id: TemplateId, resume: &ResumeRecord) -> RenderResult<String> {
    TemplateRegistry::new().get(template_id).generate(resume)
}

/// Plantillas disponibles en orden de presentación
pub fn list_templates() -> Vec<TemplateDescriptor> {
    TemplateRegistry::new().list()
}

pub struct TemplateEngine {
    registry: TemplateRegistry,
    default_template: TemplateId,
    metrics: Option<Arc<RenderMetrics>>,
}

impl TemplateEngine {
    pub fn new(default_template: TemplateId) -> Self {
        Self {
            registry: TemplateRegistry::new(),
            default_template,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<RenderMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn default_template(&self) -> TemplateId {
        self.default_template
    }

    pub fn render(&self, template_id: TemplateId, resume: &ResumeRecord) -> RenderResult<String> {
        let start = Instant::now();
        let html = self.registry.get(template_id).generate(resume)?;
        let elapsed = start.elapsed();

        if let Some(metrics) = &self.metrics {
            metrics.observe(template_id, elapsed);
        }

        tracing::debug!(
            template = %template_id,
            bytes = html.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "Rendered resume"
        );

        Ok(html)
    }

    /// Sin ID se usa la plantilla por defecto; un ID desconocido se rechaza
    pub fn render_by_id(&self, template_id: Option<&str>, resume: &ResumeRecord) -> RenderResult<String> {
        let template_id = match template_id {
            Some(id) => id.parse()?,
            None => self.default_template,
        };
        self.render(template_id, resume)
    }

    /// Vista previa completa con el currículum de ejemplo
    pub fn full_preview(&self, template_id: TemplateId) -> RenderResult<String> {
        self.render(template_id, &sample_resume())
    }

    /// Lista todas las plantillas disponibles
    pub fn list_templates(&self) -> Vec<TemplateDescriptor> {
        self.registry.list()
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(TemplateId::default())
    }
}

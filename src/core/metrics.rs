use std::time::Duration;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

use crate::templates::TemplateId;

/// Métricas de renderizado, registradas en un `Registry` propio
pub struct RenderMetrics {
    registry: Registry,
    renders_total: IntCounterVec,
    render_duration: HistogramVec,
}

impl RenderMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let renders_total = IntCounterVec::new(
            Opts::new("resume_renders_total", "Resumes rendered per template"),
            &["template"],
        )?;
        let render_duration = HistogramVec::new(
            HistogramOpts::new(
                "resume_render_duration_seconds",
                "Time spent rendering a resume",
            )
            .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1]),
            &["template"],
        )?;

        registry.register(Box::new(renders_total.clone()))?;
        registry.register(Box::new(render_duration.clone()))?;

        Ok(RenderMetrics {
            registry,
            renders_total,
            render_duration,
        })
    }

    pub fn observe(&self, template: TemplateId, elapsed: Duration) {
        let label = [template.as_str()];
        self.renders_total.with_label_values(&label).inc();
        self.render_duration
            .with_label_values(&label)
            .observe(elapsed.as_secs_f64());
    }

    pub fn renders(&self, template: TemplateId) -> u64 {
        self.renders_total
            .with_label_values(&[template.as_str()])
            .get()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

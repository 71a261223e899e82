pub mod helpers;
pub mod sample;
pub mod template_engine;
pub mod template_models;
pub mod template_trait;
pub mod templates;

pub use sample::sample_resume;
pub use template_engine::{list_templates, render, TemplateEngine};
pub use template_models::{TemplateDescriptor, TemplateId};
pub use template_trait::{ResumeTemplate, TemplateRegistry};

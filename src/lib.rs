pub mod api;
pub mod core;
pub mod models;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{AppConfig, RenderError, RenderResult};
pub use models::{
    AnalysisResult, CertificationEntry, EducationEntry, ExperienceEntry, MatchScore,
    ProjectEntry, ResumeHeader, ResumeRecord, SectionState, SkillSet,
};
pub use templates::{
    list_templates, render, sample_resume, TemplateDescriptor, TemplateEngine, TemplateId,
};

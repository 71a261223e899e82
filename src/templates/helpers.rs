use minijinja::Environment;
use serde::Serialize;

use crate::core::RenderResult;
use crate::models::{
    populated, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, ResumeRecord,
    SkillSet,
};

/// Contexto común que reciben las plantillas.
///
/// Las secciones opcionales solo llegan como `Some` si tienen al menos una
/// entrada, así ninguna plantilla tiene que repetir esa regla.
#[derive(Debug, Serialize)]
pub struct ResumeView<'a> {
    pub page_rules: &'static str,
    pub styles: &'static str,
    pub name: &'a str,
    pub contact: Vec<String>,
    pub summary: &'a str,
    pub experience: &'a [ExperienceEntry],
    pub skills: String,
    pub education: Option<&'a [EducationEntry]>,
    pub projects: Option<&'a [ProjectEntry]>,
    pub certifications: Option<&'a [CertificationEntry]>,
}

impl<'a> ResumeView<'a> {
    pub fn new(resume: &'a ResumeRecord, styles: &'static str, contact: Vec<String>) -> Self {
        ResumeView {
            page_rules: PAGE_RULES,
            styles,
            name: &resume.header.name,
            contact,
            summary: &resume.summary,
            experience: &resume.experience,
            skills: flatten_skills(&resume.skills),
            education: populated(&resume.education),
            projects: populated(&resume.projects),
            certifications: populated(&resume.certifications),
        }
    }
}

/// Renderiza una plantilla HTML con auto-escape activado.
///
/// El nombre debe terminar en `.html`: minijinja decide el escape por la
/// extensión.
pub fn render_html(name: &'static str, source: &'static str, view: &ResumeView<'_>) -> RenderResult<String> {
    let mut env = Environment::new();
    env.add_template(name, source)?;

    let template = env.get_template(name)?;
    Ok(template.render(view)?)
}

/// Aplana técnicas y blandas en una sola lista separada por comas
pub fn flatten_skills(skills: &SkillSet) -> String {
    skills.flattened().collect::<Vec<_>>().join(", ")
}

/// Descarta las partes vacías o ausentes de una línea de contacto
pub fn contact_parts<I>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect()
}

/// `Some("Label: value")` solo si el valor no está vacío
pub fn labeled(label: &str, value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| format!("{}: {}", label, v))
}

/// Reglas comunes a todas las plantillas: tamaño A4 y colores exactos al imprimir
pub const PAGE_RULES: &str = r#"
  @page {
    size: A4;
    margin: 16mm;
  }

  * {
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
  }
"#;

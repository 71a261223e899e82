use crate::core::RenderResult;
use crate::models::{ResumeHeader, ResumeRecord};
use crate::templates::helpers::{self, ResumeView};
use crate::templates::template_models::TemplateId;
use crate::templates::template_trait::ResumeTemplate;

const TEMPLATE_NAME: &str = "corporate.html";

const STYLES: &str = r#"
  body { font-family: Arial, sans-serif; color: #000; margin: 0; padding: 0; }
  .resume { width: 800px; margin: 20px auto; border: 2px solid #000; padding: 30px; }
  .header { text-align: center; border-bottom: 2px solid #000; padding-bottom: 10px; }
  .name { font-size: 28px; font-weight: bold; }
  .contact { font-size: 14px; margin-top: 5px; }
  .section { margin-top: 20px; }
  .section-title { font-weight: bold; font-size: 18px; border-bottom: 1px solid #000; margin-bottom: 10px; padding-bottom: 3px; }
  .job, .edu, .cert { margin-bottom: 15px; }
  ul { margin: 5px 0 0 20px; }
"#;

const SOURCE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Corporate Resume</title>
<style>{{ page_rules|safe }}{{ styles|safe }}</style>
</head>
<body>
<div class="resume">
  <div class="header">
    <div class="name">{{ name }}</div>
    <div class="contact">{% for part in contact %}{{ part }}{% if not loop.last %} | {% endif %}{% endfor %}</div>
  </div>

  <div class="section" data-section="summary">
    <div class="section-title">Professional Summary</div>
    <p>{{ summary }}</p>
  </div>

  <div class="section" data-section="experience">
    <div class="section-title">Experience</div>
    {%- for exp in experience %}
    <div class="job">
      <strong>{{ exp.company }}</strong> | {{ exp.position }} | {{ exp.duration }}
      <ul>
        {% for bullet in exp.bullets %}<li>{{ bullet }}</li>{% endfor %}
      </ul>
    </div>
    {%- endfor %}
  </div>

  <div class="section" data-section="skills">
    <div class="section-title">Skills</div>
    <p>{{ skills }}</p>
  </div>
{% if education %}
  <div class="section" data-section="education">
    <div class="section-title">Education</div>
    {%- for edu in education %}
    <div class="edu">
      <strong>{{ edu.institution }}</strong> | {{ edu.degree }} | {{ edu.dates }}{% if edu.location %} | {{ edu.location }}{% endif %}
    </div>
    {%- endfor %}
  </div>
{% endif %}
{%- if projects %}
  <div class="section" data-section="projects">
    <div class="section-title">Projects</div>
    {%- for project in projects %}
    <div class="job">
      <strong>{{ project.title }}</strong>
      <p>{{ project.description }}</p>
    </div>
    {%- endfor %}
  </div>
{% endif %}
{%- if certifications %}
  <div class="section" data-section="certifications">
    <div class="section-title">Certifications</div>
    {%- for cert in certifications %}
    <div class="cert">
      {{ cert.title }} | {{ cert.issuer }} | {{ cert.dates }}
    </div>
    {%- endfor %}
  </div>
{% endif %}
</div>
</body>
</html>
"#;

/// Estrategia "formal": borde completo, cabecera centrada y separadores
/// horizontales entre secciones
pub struct CorporateTemplate;

impl CorporateTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Email, teléfono, LinkedIn y ubicación; los campos vacíos se omiten
    fn contact_line(header: &ResumeHeader) -> Vec<String> {
        helpers::contact_parts([
            helpers::labeled("Email", Some(header.email.as_str())),
            helpers::labeled("Phone", Some(header.phone.as_str())),
            helpers::labeled("LinkedIn", header.linkedin.as_deref()),
            Some(header.location.clone()),
        ])
    }
}

impl Default for CorporateTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeTemplate for CorporateTemplate {
    fn generate(&self, resume: &ResumeRecord) -> RenderResult<String> {
        let view = ResumeView::new(resume, STYLES, Self::contact_line(&resume.header));
        helpers::render_html(TEMPLATE_NAME, SOURCE, &view)
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Corporate
    }

    fn name(&self) -> &'static str {
        "Corporate"
    }

    fn description(&self) -> &'static str {
        "Professional layout with clear sections"
    }
}

use crate::core::RenderResult;
use crate::models::{ResumeHeader, ResumeRecord};
use crate::templates::helpers::{self, ResumeView};
use crate::templates::template_models::TemplateId;
use crate::templates::template_trait::ResumeTemplate;

const TEMPLATE_NAME: &str = "compact.html";

const STYLES: &str = r#"
  body {
    font-family: Arial, Helvetica, sans-serif;
    background: #ffffff;
    color: #111827;
    margin: 0;
    padding: 16px;
  }
  .resume {
    max-width: 780px;
    margin: auto;
    border: 1px solid #9ca3af;
    padding: 16px;
  }
  .header {
    display: flex;
    justify-content: space-between;
    border-bottom: 1px solid #10b981;
    padding-bottom: 8px;
  }
  .name {
    font-size: 22px;
    font-weight: bold;
  }
  .contact {
    font-size: 11px;
    text-align: right;
    color: #374151;
  }
  .section {
    margin-top: 12px;
  }
  .section-title {
    font-size: 12px;
    font-weight: bold;
    color: #10b981;
    text-transform: uppercase;
    margin-bottom: 4px;
  }
  .summary {
    font-size: 12px;
    line-height: 1.4;
  }
  .item {
    margin-bottom: 8px;
  }
  .item-title {
    font-size: 12px;
    font-weight: bold;
  }
  .item-meta {
    font-size: 11px;
    color: #6b7280;
  }
  ul {
    margin: 4px 0 0 14px;
    padding: 0;
  }
  li {
    font-size: 11.5px;
    margin-bottom: 2px;
  }
  .skills {
    font-size: 11.5px;
  }
"#;

const SOURCE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8" />
<title>Compact Resume</title>
<style>{{ page_rules|safe }}{{ styles|safe }}</style>
</head>
<body>
<div class="resume">
  <div class="header">
    <div class="name">{{ name }}</div>
    <div class="contact">
      {% for line in contact %}{{ line }}{% if not loop.last %}<br/>{% endif %}{% endfor %}
    </div>
  </div>

  <div class="section" data-section="summary">
    <div class="section-title">Summary</div>
    <div class="summary">{{ summary }}</div>
  </div>

  <div class="section" data-section="experience">
    <div class="section-title">Experience</div>
    {%- for exp in experience %}
    <div class="item">
      <div class="item-title">{{ exp.position }} — {{ exp.company }}</div>
      <div class="item-meta">{{ exp.duration }}</div>
      <ul>
        {% for bullet in exp.bullets %}<li>{{ bullet }}</li>{% endfor %}
      </ul>
    </div>
    {%- endfor %}
  </div>

  <div class="section" data-section="skills">
    <div class="section-title">Skills</div>
    <div class="skills">{{ skills }}</div>
  </div>
{% if education %}
  <div class="section" data-section="education">
    <div class="section-title">Education</div>
    {%- for edu in education %}
    <div class="item">
      <div class="item-title">{{ edu.degree }}</div>
      <div class="item-meta">{{ edu.institution }}{% if edu.location %}, {{ edu.location }}{% endif %} | {{ edu.dates }}</div>
    </div>
    {%- endfor %}
  </div>
{% endif %}
{%- if projects %}
  <div class="section" data-section="projects">
    <div class="section-title">Projects</div>
    {%- for project in projects %}
    <div class="item">
      <div class="item-title">{{ project.title }}</div>
      <div class="item-meta">{{ project.description }}</div>
    </div>
    {%- endfor %}
  </div>
{% endif %}
{%- if certifications %}
  <div class="section" data-section="certifications">
    <div class="section-title">Certifications</div>
    {%- for cert in certifications %}
    <div class="item">
      <div class="item-title">{{ cert.title }}</div>
      <div class="item-meta">{{ cert.issuer }} | {{ cert.dates }}</div>
    </div>
    {%- endfor %}
  </div>
{% endif %}
</div>
</body>
</html>
"#;

/// Estrategia "compacta": cabecera a dos columnas y la escala tipográfica
/// más pequeña
pub struct CompactTemplate;

impl CompactTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Una línea por dato, apiladas a la derecha
    fn contact_block(header: &ResumeHeader) -> Vec<String> {
        helpers::contact_parts([
            Some(header.email.clone()),
            Some(header.phone.clone()),
            header.linkedin.clone(),
        ])
    }
}

impl Default for CompactTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeTemplate for CompactTemplate {
    fn generate(&self, resume: &ResumeRecord) -> RenderResult<String> {
        let view = ResumeView::new(resume, STYLES, Self::contact_block(&resume.header));
        helpers::render_html(TEMPLATE_NAME, SOURCE, &view)
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Compact
    }

    fn name(&self) -> &'static str {
        "Compact"
    }

    fn description(&self) -> &'static str {
        "Minimalist space-efficient format"
    }
}

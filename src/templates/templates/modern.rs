use crate::core::RenderResult;
use crate::models::{ResumeHeader, ResumeRecord};
use crate::templates::helpers::{self, ResumeView};
use crate::templates::template_models::TemplateId;
use crate::templates::template_trait::ResumeTemplate;

const TEMPLATE_NAME: &str = "modern.html";

// Color de acento: #3b82f6
const STYLES: &str = r#"
  body {
    font-family: Arial, Helvetica, sans-serif;
    background: #ffffff;
    color: #1f2933;
    margin: 0;
    padding: 24px;
  }
  .resume {
    max-width: 800px;
    margin: auto;
    border: 1px solid #d1d5db;
    padding: 24px;
  }
  .header {
    border-bottom: 2px solid #3b82f6;
    padding-bottom: 12px;
    margin-bottom: 16px;
  }
  .name {
    font-size: 26px;
    font-weight: bold;
  }
  .contact {
    font-size: 12px;
    margin-top: 6px;
    color: #374151;
  }
  .section {
    margin-top: 18px;
  }
  .section-title {
    font-size: 14px;
    font-weight: bold;
    text-transform: uppercase;
    color: #3b82f6;
    margin-bottom: 6px;
  }
  .summary {
    font-size: 13px;
    line-height: 1.5;
  }
  .item {
    margin-bottom: 12px;
  }
  .item-title {
    font-weight: bold;
    font-size: 13px;
  }
  .item-meta {
    font-size: 12px;
    color: #6b7280;
  }
  ul {
    margin: 6px 0 0 16px;
    padding: 0;
  }
  li {
    font-size: 12.5px;
    margin-bottom: 4px;
  }
  .skills {
    font-size: 12.5px;
  }
"#;

const SOURCE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8" />
<title>Modern Resume</title>
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
    <div class="summary">{{ summary }}</div>
  </div>

  <div class="section" data-section="experience">
    <div class="section-title">Professional Experience</div>
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

/// Estrategia "moderna": cabecera alineada a la izquierda con subrayado de
/// acento y títulos de sección en color
pub struct ModernTemplate;

impl ModernTemplate {
    pub fn new() -> Self {
        Self
    }

    fn contact_line(header: &ResumeHeader) -> Vec<String> {
        helpers::contact_parts([
            Some(header.email.clone()),
            Some(header.phone.clone()),
            helpers::labeled("LinkedIn", header.linkedin.as_deref()),
        ])
    }
}

impl Default for ModernTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeTemplate for ModernTemplate {
    fn generate(&self, resume: &ResumeRecord) -> RenderResult<String> {
        let view = ResumeView::new(resume, STYLES, Self::contact_line(&resume.header));
        helpers::render_html(TEMPLATE_NAME, SOURCE, &view)
    }

    fn template_id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn name(&self) -> &'static str {
        "Modern"
    }

    fn description(&self) -> &'static str {
        "Clean, contemporary design"
    }
}

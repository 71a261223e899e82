use resume_renderer::{
    render, sample_resume, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    RenderError, ResumeHeader, ResumeRecord, SkillSet, TemplateEngine, TemplateId,
};

fn minimal_resume() -> ResumeRecord {
    ResumeRecord {
        header: ResumeHeader {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-1111".to_string(),
            location: "Austin".to_string(),
            linkedin: None,
        },
        summary: "Engineer.".to_string(),
        experience: vec![ExperienceEntry {
            company: "Acme".to_string(),
            position: "Dev".to_string(),
            duration: "2020-2023".to_string(),
            bullets: vec!["Built Y".to_string()],
        }],
        skills: SkillSet {
            technical: vec!["Go".to_string()],
            soft: vec!["Teamwork".to_string()],
        },
        education: None,
        projects: None,
        certifications: None,
    }
}

fn section_position(html: &str, section: &str) -> Option<usize> {
    html.find(&format!(r#"data-section="{}""#, section))
}

#[test]
fn test_jane_doe_corporate() {
    let html = render(TemplateId::Corporate, &minimal_resume()).unwrap();

    for expected in ["Jane Doe", "Engineer.", "Acme", "Dev", "2020-2023", "Built Y", "Go, Teamwork"] {
        assert!(html.contains(expected), "missing {:?}", expected);
    }
    assert!(!html.contains(">Education<"));
}

#[test]
fn test_rendering_is_deterministic() {
    let resume = sample_resume();
    for id in TemplateId::ALL {
        assert_eq!(render(id, &resume).unwrap(), render(id, &resume).unwrap());
    }
}

#[test]
fn test_section_order_is_fixed() {
    let resume = sample_resume();
    let order = ["summary", "experience", "skills", "education", "projects", "certifications"];

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        let positions: Vec<usize> = order
            .iter()
            .map(|section| section_position(&html, section).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{} out of order", id);
    }
}

#[test]
fn test_optional_sections_hidden_when_absent_or_empty() {
    let mut resume = minimal_resume();

    for id in TemplateId::ALL {
        resume.education = None;
        resume.projects = None;
        resume.certifications = None;
        let absent = render(id, &resume).unwrap();

        resume.education = Some(vec![]);
        resume.projects = Some(vec![]);
        resume.certifications = Some(vec![]);
        let empty = render(id, &resume).unwrap();

        assert_eq!(absent, empty);
        for section in ["education", "projects", "certifications"] {
            assert!(section_position(&absent, section).is_none());
        }
    }
}

#[test]
fn test_single_entry_renders_section_once() {
    let mut resume = minimal_resume();
    resume.education = Some(vec![EducationEntry {
        degree: "BSc Physics".to_string(),
        institution: "State University".to_string(),
        location: String::new(),
        dates: "2014 – 2018".to_string(),
    }]);
    resume.projects = Some(vec![ProjectEntry {
        title: "Telemetry Rewrite".to_string(),
        description: "Replaced polling with streams".to_string(),
    }]);
    resume.certifications = Some(vec![CertificationEntry {
        title: "Cloud Practitioner".to_string(),
        issuer: "Amazon".to_string(),
        dates: "2022".to_string(),
    }]);

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        for needle in ["BSc Physics", "Telemetry Rewrite", "Cloud Practitioner"] {
            assert_eq!(html.matches(needle).count(), 1, "{} in {}", needle, id);
        }
        for section in ["education", "projects", "certifications"] {
            assert_eq!(html.matches(&format!(r#"data-section="{}""#, section)).count(), 1);
        }
    }
}

#[test]
fn test_skills_flattened_technical_first() {
    let mut resume = minimal_resume();
    resume.skills = SkillSet {
        technical: vec!["Python".to_string(), "SQL".to_string()],
        soft: vec!["Communication".to_string()],
    };

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        assert!(html.contains("Python, SQL, Communication"));
    }
}

#[test]
fn test_blank_bullet_renders_empty_item() {
    let mut resume = minimal_resume();
    resume.experience[0].bullets = vec![String::new(), "Shipped v2".to_string()];

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li></li>"));
        assert!(html.contains("<li>Shipped v2</li>"));
    }
}

#[test]
fn test_templates_show_same_content() {
    let resume = sample_resume();

    let mut facts: Vec<&str> = vec![resume.header.name.as_str(), resume.header.email.as_str()];
    facts.extend(
        resume
            .experience
            .iter()
            .flat_map(|exp| exp.bullets.iter().map(String::as_str)),
    );
    facts.extend(resume.skills.flattened());
    assert!(facts.len() > 2);

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        for fact in &facts {
            assert!(html.contains(fact), "{} missing {:?}", id, fact);
        }
    }
}

#[test]
fn test_contact_link_slashes_are_entity_encoded() {
    let mut resume = minimal_resume();
    resume.header.linkedin = Some("linkedin.com/in/janedoe".to_string());

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        assert!(html.contains("linkedin.com&#x2f;in&#x2f;janedoe"), "{}", id);
        assert!(!html.contains("linkedin.com/in/janedoe"));
    }
}

#[test]
fn test_user_text_is_escaped() {
    let mut resume = minimal_resume();
    resume.header.name = "<script>alert(1)</script>".to_string();
    resume.summary = "R&D lead".to_string();

    for id in TemplateId::ALL {
        let html = render(id, &resume).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;D lead"));
    }
}

#[test]
fn test_body_starts_with_resume_container() {
    for id in TemplateId::ALL {
        let html = render(id, &sample_resume()).unwrap();
        let body = html.split("<body>").nth(1).unwrap();
        assert!(body.trim_start().starts_with(r#"<div class="resume">"#));
    }
}

#[test]
fn test_unknown_template_is_rejected() {
    let engine = TemplateEngine::default();
    let err = engine.render_by_id(Some("fancy"), &sample_resume()).unwrap_err();
    assert!(matches!(err, RenderError::UnknownTemplate(_)));

    let err = "Corporate".parse::<TemplateId>().unwrap_err();
    assert!(matches!(err, RenderError::UnknownTemplate(_)));
}

#[test]
fn test_missing_template_id_uses_default() {
    let engine = TemplateEngine::default();
    let resume = minimal_resume();

    assert_eq!(
        engine.render_by_id(None, &resume).unwrap(),
        render(TemplateId::Corporate, &resume).unwrap()
    );
}

#[test]
fn test_record_deserializes_with_missing_optional_sections() {
    let json = r#"{
        "header": {"name": "Jane Doe", "email": "jane@x.com"},
        "summary": "Engineer.",
        "experience": [],
        "skills": {"technical": ["Go"]}
    }"#;

    let resume: ResumeRecord = serde_json::from_str(json).unwrap();
    assert!(resume.education.is_none());
    assert_eq!(resume.header.phone, "");

    let html = render(TemplateId::Modern, &resume).unwrap();
    assert!(html.contains("Go"));
}

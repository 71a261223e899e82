use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, ResumeHeader,
    ResumeRecord, SkillSet,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Currículum de ejemplo para las vistas previas.
///
/// Rellena todas las secciones opcionales para que la vista previa sea
/// representativa de cada plantilla.
pub fn sample_resume() -> ResumeRecord {
    ResumeRecord {
        header: ResumeHeader {
            name: "Senthil Kumar".to_string(),
            email: "senthil@email.com".to_string(),
            phone: "+49 XXXXXXXX".to_string(),
            location: "Berlin, Germany".to_string(),
            linkedin: Some("linkedin.com/in/senthilkumar".to_string()),
        },
        summary: "Experienced project coordinator with exposure to HVDC offshore wind projects, \
                  reporting, and stakeholder coordination. Detail-oriented professional with strong \
                  analytical and communication skills."
            .to_string(),
        experience: vec![ExperienceEntry {
            company: "GE Vernova".to_string(),
            position: "Project Reporting Coordinator".to_string(),
            duration: "Apr 2025 – Present".to_string(),
            bullets: strings(&[
                "Coordinated reporting activities for HVDC projects.",
                "Prepared management dashboards and progress reports.",
                "Supported coordination across consortium partners.",
            ]),
        }],
        skills: SkillSet {
            technical: strings(&["HVDC", "Project Reporting", "Power BI", "Excel", "MS Project"]),
            soft: strings(&["Stakeholder Coordination", "Communication", "Problem Solving"]),
        },
        education: Some(vec![EducationEntry {
            degree: "B.Tech – Electrical Engineering".to_string(),
            institution: "Anna University".to_string(),
            location: "Chennai, India".to_string(),
            dates: "2018 – 2022".to_string(),
        }]),
        projects: Some(vec![
            ProjectEntry {
                title: "HVDC Offshore Wind Study".to_string(),
                description: "Analysis of offshore transmission systems and cost optimization \
                              strategies for renewable energy integration."
                    .to_string(),
            },
            ProjectEntry {
                title: "AI Resume Optimization Tool (hird.cc)".to_string(),
                description: "Built an AI-powered resume tailoring and job matching platform to \
                              help job seekers optimize their applications."
                    .to_string(),
            },
        ]),
        certifications: Some(vec![CertificationEntry {
            title: "PMP (In Progress)".to_string(),
            issuer: "PMI".to_string(),
            dates: "Expected 2025".to_string(),
        }]),
    }
}

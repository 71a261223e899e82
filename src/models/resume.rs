use serde::{Deserialize, Serialize};

/// Datos de contacto del titular del currículum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeHeader {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    /// Texto libre, no se interpreta como fecha
    pub duration: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

impl SkillSet {
    /// Técnicas primero, luego blandas, sin eliminar duplicados
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub dates: String,
}

/// Estado de una sección opcional.
///
/// `Absent` y `Empty` ocultan la sección al renderizar, pero solo una
/// sección presente permite seguir añadiendo entradas desde el formulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Absent,
    Empty,
    Populated,
}

impl SectionState {
    pub fn of<T>(section: &Option<Vec<T>>) -> Self {
        match section {
            None => SectionState::Absent,
            Some(entries) if entries.is_empty() => SectionState::Empty,
            Some(_) => SectionState::Populated,
        }
    }

    pub fn is_rendered(self) -> bool {
        matches!(self, SectionState::Populated)
    }
}

/// Devuelve las entradas solo si la sección está definida y no vacía
pub fn populated<T>(section: &Option<Vec<T>>) -> Option<&[T]> {
    section.as_deref().filter(|entries| !entries.is_empty())
}

/// Currículum adaptado: única entrada del renderizador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub header: ResumeHeader,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<CertificationEntry>>,
}

impl ResumeRecord {
    pub fn education_state(&self) -> SectionState {
        SectionState::of(&self.education)
    }

    pub fn projects_state(&self) -> SectionState {
        SectionState::of(&self.projects)
    }

    pub fn certifications_state(&self) -> SectionState {
        SectionState::of(&self.certifications)
    }

    /// Nombre sugerido para el PDF descargado, p.ej. `Jane_SeniorDeveloper.pdf`
    pub fn download_filename(&self) -> String {
        // Va en la cabecera Content-Disposition: sin caracteres de control
        let first_name: String = self
            .header
            .name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_control())
            .collect();
        let first_name = if first_name.is_empty() { "Resume" } else { first_name.as_str() };

        let position = self
            .experience
            .first()
            .map(|exp| exp.position.as_str())
            .filter(|p| !p.is_empty())
            .unwrap_or("Professional");

        let sanitized: String = position
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        format!("{}_{}.pdf", first_name, sanitized)
    }

    // Edición campo a campo (el renderizador nunca muta su entrada)

    /// Añade una viñeta vacía para completarla más tarde
    pub fn add_bullet(&mut self, experience_index: usize) -> bool {
        match self.experience.get_mut(experience_index) {
            Some(exp) => {
                exp.bullets.push(String::new());
                true
            }
            None => false,
        }
    }

    pub fn remove_bullet(&mut self, experience_index: usize, bullet_index: usize) -> bool {
        match self.experience.get_mut(experience_index) {
            Some(exp) if bullet_index < exp.bullets.len() => {
                exp.bullets.remove(bullet_index);
                true
            }
            _ => false,
        }
    }

    pub fn set_technical_skills(&mut self, text: &str) {
        self.skills.technical = parse_skill_list(text);
    }

    pub fn set_soft_skills(&mut self, text: &str) {
        self.skills.soft = parse_skill_list(text);
    }

    pub fn add_education(&mut self) {
        self.education.get_or_insert_with(Vec::new).push(EducationEntry::default());
    }

    pub fn remove_education(&mut self, index: usize) -> bool {
        remove_entry(&mut self.education, index)
    }

    pub fn add_project(&mut self) {
        self.projects.get_or_insert_with(Vec::new).push(ProjectEntry::default());
    }

    pub fn remove_project(&mut self, index: usize) -> bool {
        remove_entry(&mut self.projects, index)
    }

    pub fn add_certification(&mut self) {
        self.certifications
            .get_or_insert_with(Vec::new)
            .push(CertificationEntry::default());
    }

    pub fn remove_certification(&mut self, index: usize) -> bool {
        remove_entry(&mut self.certifications, index)
    }
}

/// Quitar la última entrada deja la sección vacía, no ausente
fn remove_entry<T>(section: &mut Option<Vec<T>>, index: usize) -> bool {
    match section {
        Some(entries) if index < entries.len() => {
            entries.remove(index);
            true
        }
        _ => false,
    }
}

/// Convierte "Rust, SQL , ,Go" en ["Rust", "SQL", "Go"]
pub fn parse_skill_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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
                position: "Senior Dev (Backend)".to_string(),
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

    #[test]
    fn test_section_state_three_way() {
        let absent: Option<Vec<ProjectEntry>> = None;
        let empty: Option<Vec<ProjectEntry>> = Some(vec![]);
        let populated_section = Some(vec![ProjectEntry::default()]);

        assert_eq!(SectionState::of(&absent), SectionState::Absent);
        assert_eq!(SectionState::of(&empty), SectionState::Empty);
        assert_eq!(SectionState::of(&populated_section), SectionState::Populated);
        assert!(!SectionState::Empty.is_rendered());
        assert!(populated(&empty).is_none());
        assert_eq!(populated(&populated_section).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_add_education_unlocks_absent_section() {
        let mut resume = minimal_resume();
        assert_eq!(resume.education_state(), SectionState::Absent);

        resume.add_education();
        assert_eq!(resume.education_state(), SectionState::Populated);

        assert!(resume.remove_education(0));
        assert_eq!(resume.education_state(), SectionState::Empty);
        assert!(!resume.remove_education(0));
    }

    #[test]
    fn test_bullet_editing() {
        let mut resume = minimal_resume();
        assert!(resume.add_bullet(0));
        assert_eq!(resume.experience[0].bullets, vec!["Built Y", ""]);

        assert!(resume.remove_bullet(0, 0));
        assert_eq!(resume.experience[0].bullets, vec![""]);

        assert!(!resume.add_bullet(5));
        assert!(!resume.remove_bullet(0, 3));
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(parse_skill_list("Rust, SQL , ,Go"), vec!["Rust", "SQL", "Go"]);
        assert!(parse_skill_list("  ,  ").is_empty());

        let mut resume = minimal_resume();
        resume.set_soft_skills("Communication, Leadership");
        assert_eq!(resume.skills.soft, vec!["Communication", "Leadership"]);
    }

    #[test]
    fn test_flattened_keeps_order_and_duplicates() {
        let skills = SkillSet {
            technical: vec!["Python".to_string(), "SQL".to_string()],
            soft: vec!["SQL".to_string()],
        };
        let flat: Vec<&str> = skills.flattened().collect();
        assert_eq!(flat, vec!["Python", "SQL", "SQL"]);
    }

    #[test]
    fn test_download_filename() {
        let mut resume = minimal_resume();
        assert_eq!(resume.download_filename(), "Jane_SeniorDevBackend.pdf");

        resume.experience.clear();
        resume.header.name = String::new();
        assert_eq!(resume.download_filename(), "Resume_Professional.pdf");
    }

    #[test]
    fn test_download_filename_strips_control_characters() {
        let mut resume = minimal_resume();
        resume.header.name = "Jane\nDoe".to_string();
        assert_eq!(resume.download_filename(), "Jane_SeniorDevBackend.pdf");

        resume.header.name = "\u{7f}Ja\u{1b}ne Doe".to_string();
        assert_eq!(resume.download_filename(), "Jane_SeniorDevBackend.pdf");

        resume.header.name = "\u{7} Doe".to_string();
        assert_eq!(resume.download_filename(), "Resume_SeniorDevBackend.pdf");
    }

    #[test]
    fn test_optional_sections_deserialize_three_ways() {
        let json = serde_json::json!({
            "header": { "name": "Jane Doe", "email": "jane@x.com", "phone": "1", "location": "Austin" },
            "summary": "Engineer.",
            "experience": [],
            "skills": { "technical": [], "soft": [] },
            "projects": [],
            "certifications": null
        });

        let resume: ResumeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(resume.education_state(), SectionState::Absent);
        assert_eq!(resume.projects_state(), SectionState::Empty);
        assert_eq!(resume.certifications_state(), SectionState::Absent);
    }

    #[test]
    fn test_missing_summary_is_rejected() {
        let json = serde_json::json!({
            "header": { "name": "Jane Doe" },
            "experience": [],
            "skills": {}
        });

        assert!(serde_json::from_value::<ResumeRecord>(json).is_err());
    }
}

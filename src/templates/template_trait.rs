use crate::core::RenderResult;
use crate::models::ResumeRecord;
use crate::templates::template_models::{TemplateDescriptor, TemplateId};
use crate::templates::templates::{CompactTemplate, CorporateTemplate, ModernTemplate};

/// Trait base para todas las plantillas de currículum.
///
/// Cada implementación emite el documento HTML completo; ninguna hereda
/// de otra.
pub trait ResumeTemplate: Send + Sync {
    /// Genera el documento HTML a partir del currículum
    fn generate(&self, resume: &ResumeRecord) -> RenderResult<String>;

    /// Retorna el ID de la plantilla
    fn template_id(&self) -> TemplateId;

    /// Nombre visible en el selector
    fn name(&self) -> &'static str;

    /// Retorna una descripción de la plantilla
    fn description(&self) -> &'static str {
        "Plantilla de currículum"
    }

    fn descriptor(&self) -> TemplateDescriptor {
        TemplateDescriptor {
            id: self.template_id(),
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Registry central de las plantillas disponibles (conjunto cerrado, sin
/// registro dinámico)
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn new() -> Self {
        TemplateRegistry
    }

    /// Obtiene la estrategia asociada al ID
    pub fn get(&self, template_id: TemplateId) -> &'static dyn ResumeTemplate {
        match template_id {
            TemplateId::Corporate => &CorporateTemplate,
            TemplateId::Modern => &ModernTemplate,
            TemplateId::Compact => &CompactTemplate,
        }
    }

    /// Lista todas las plantillas en orden estable
    pub fn list(&self) -> Vec<TemplateDescriptor> {
        TemplateId::ALL
            .into_iter()
            .map(|id| self.get(id).descriptor())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_maps_each_id_to_its_strategy() {
        let registry = TemplateRegistry::new();
        for id in TemplateId::ALL {
            assert_eq!(registry.get(id).template_id(), id);
        }
    }

    #[test]
    fn test_list_is_ordered_and_closed() {
        let names: Vec<&str> = TemplateRegistry::new()
            .list()
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Corporate", "Modern", "Compact"]);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::RenderError;

/// Conjunto cerrado de plantillas. Añadir una variante obliga a
/// completar cada `match` que despacha sobre ella.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Corporate,
    Modern,
    Compact,
}

impl TemplateId {
    /// Orden de presentación en el selector
    pub const ALL: [TemplateId; 3] = [TemplateId::Corporate, TemplateId::Modern, TemplateId::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Corporate => "corporate",
            TemplateId::Modern => "modern",
            TemplateId::Compact => "compact",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| RenderError::UnknownTemplate(s.to_string()))
    }
}

/// Información de presentación; no interviene en el renderizado
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert!(matches!(
            "Corporate".parse::<TemplateId>(),
            Err(RenderError::UnknownTemplate(id)) if id == "Corporate"
        ));
        assert!("".parse::<TemplateId>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        assert_eq!(serde_json::to_string(&TemplateId::Modern).unwrap(), "\"modern\"");
        let id: TemplateId = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(id, TemplateId::Compact);
    }
}

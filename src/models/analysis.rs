use serde::{Deserialize, Serialize};

use crate::core::{RenderError, RenderResult};
use super::resume::ResumeRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0 - 100
    pub percentage: f32,
    #[serde(default)]
    pub summary: String,
}

/// Respuesta del servicio de análisis: currículum adaptado + puntuación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_score: MatchScore,
    pub tailored_resume: ResumeRecord,
    #[serde(default)]
    pub explanation: Vec<String>,
}

impl AnalysisResult {
    pub fn from_json(body: &str) -> RenderResult<Self> {
        let result: AnalysisResult = serde_json::from_str(body)
            .map_err(|e| RenderError::Validation(format!("Respuesta de análisis inválida: {}", e)))?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> RenderResult<()> {
        let pct = self.match_score.percentage;
        if !(0.0..=100.0).contains(&pct) {
            return Err(RenderError::Validation(format!(
                "Porcentaje de coincidencia fuera de rango: {}",
                pct
            )));
        }
        Ok(())
    }
}

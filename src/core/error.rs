use thiserror::Error;

/// Errores del núcleo de renderizado.
///
/// Un identificador desconocido es una violación de contrato: nunca se
/// sustituye por la plantilla por defecto.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template desconocido: {0}")]
    UnknownTemplate(String),

    #[error("Error de plantilla: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Error de validación: {0}")]
    Validation(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

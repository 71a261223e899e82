use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::RenderResult;
use crate::templates::TemplateId;

/// Prefijo de las variables de entorno, p.ej. `RESUME_PORT=9000`
pub const ENV_PREFIX: &str = "RESUME";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_template: String,
    pub max_payload_bytes: usize,
    pub enable_compression: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_template: TemplateId::default().as_str().to_string(),
            max_payload_bytes: 1_048_576, // 1MB
            enable_compression: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga `.env` si existe y luego las variables `RESUME_*`
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let defaults = AppConfig::default();
        let settings = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("default_template", defaults.default_template)?
            .set_default("max_payload_bytes", defaults.max_payload_bytes as i64)?
            .set_default("enable_compression", defaults.enable_compression)?
            .set_default("log_level", defaults.log_level)?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        config
            .default_template()
            .context("Invalid RESUME_DEFAULT_TEMPLATE")?;

        Ok(config)
    }

    /// Plantilla aplicada cuando la petición no indica ninguna
    pub fn default_template(&self) -> RenderResult<TemplateId> {
        self.default_template.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_corporate() {
        let config = AppConfig::default();
        assert_eq!(config.default_template().unwrap(), TemplateId::Corporate);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unknown_default_template_is_rejected() {
        let config = AppConfig {
            default_template: "fancy".to_string(),
            ..AppConfig::default()
        };
        assert!(config.default_template().is_err());
    }
}

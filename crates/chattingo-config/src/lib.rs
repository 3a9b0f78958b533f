use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

pub mod endpoint;
pub mod env;

pub use endpoint::{
    base_api_url, resolve_base_api_url, API_URL_ENV, BASE_API_URL, DEFAULT_BASE_API_URL,
};
pub use env::{EnvSource, MapEnv, SystemEnv};

/// Prefix for environment overrides, e.g. `CHATTINGO_JWT_SECRET`.
pub const ENV_PREFIX: &str = "CHATTINGO";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Backend service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub service_name: String,
    #[validate(length(min = 1))]
    pub log_level: String,
    #[validate(length(min = 1))]
    pub listen_addr: String,
    /// HMAC signing secret; HS256 needs at least 256 bits of key material.
    #[validate(length(min = 32))]
    pub jwt_secret: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "chattingo".to_string(),
            log_level: "info".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            jwt_secret: String::new(),
        }
    }
}

/// Load configuration from an optional file plus `CHATTINGO_*` variables
pub fn load_config<T>(path: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?;

    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}

/// Load configuration from YAML string (for testing)
pub fn load_from_yaml<T>(yaml: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::LoadError(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}

pub mod app;
pub mod database;
pub mod security;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata, ServerConfig};
pub use database::DatabaseConfig;
pub use security::{CorsConfig, SecurityConfig};

/// Configuration loading or validation failure. Fatal: startup aborts on it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("{0}")]
    ValidationError(String),
}

/// Validation hook every configuration section implements.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}

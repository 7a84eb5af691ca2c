use serde::{Deserialize, Serialize};

use super::{ConfigError, DatabaseConfig, SecurityConfig, Validate};

/// Top-level application configuration that aggregates all config sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// HTTP server configuration (bind address, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Document-store configuration (connection string, pool, timeouts)
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Security configuration (CORS allow-list)
    #[serde(default)]
    pub security: SecurityConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
    /// Application environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Worker count; the actix default (one per core) when unset
    #[serde(default)]
    pub workers: Option<usize>,
}

// Default functions for AppMetadata
fn default_app_name() -> String {
    "voting-api".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30
}

// Default functions for ServerConfig
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            environment: default_environment(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: None,
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.version.is_empty() {
            return Err(ConfigError::ValidationError("app.version cannot be empty".to_string()));
        }
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError("app.environment cannot be empty".to_string()));
        }
        if self.shutdown_timeout == 0 {
            return Err(ConfigError::ValidationError("app.shutdown_timeout must be > 0".to_string()));
        }
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::ValidationError("server.host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError("server.port must be > 0".to_string()));
        }
        if self.workers == Some(0) {
            return Err(ConfigError::ValidationError("server.workers must be > 0 when set".to_string()));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        // Validate all nested configurations
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.security.validate()?;
        Ok(())
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. MONGODB_URL (deployment shortcut for the store endpoint)
/// 2. Environment variables: VOTING_API__SERVER__PORT=8080
/// 3. config/local.toml (git-ignored, developer overrides)
/// 4. config/{APP_ENV}.toml (development/staging/production)
/// 5. config/default.toml (base defaults)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    use config::{Config, Environment, File};

    // Determine the environment
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    // Build configuration with layered sources
    let mut builder = Config::builder()
        // Layer 1: Base defaults
        .add_source(File::with_name("config/default").required(false))
        // Layer 2: Environment-specific overrides
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        // Layer 3: Local developer overrides (git-ignored)
        .add_source(File::with_name("config/local").required(false))
        // Layer 4: Environment variables
        .add_source(Environment::with_prefix("VOTING_API").separator("__"));

    // Layer 5: the single deployment-facing variable for the store endpoint
    if let Ok(url) = std::env::var("MONGODB_URL") {
        builder = builder.set_override("database.url", url)?;
    }

    let config = builder.build()?;

    // Deserialize into AppConfig
    let app_config: AppConfig = config.try_deserialize()?;

    // Validate the configuration
    app_config.validate()?;

    Ok(app_config)
}

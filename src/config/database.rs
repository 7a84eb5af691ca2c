use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Document-store configuration: connection string plus the pool options
/// applied to the one client the process keeps for its whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string. Usually injected through MONGODB_URL; startup
    /// fails fast when it resolves to empty.
    #[serde(default)]
    pub url: String,
    /// Database namespace holding the questions and responses collections
    #[serde(default = "default_database_name")]
    pub database: String,
    /// Upper bound on pooled connections
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    /// Connections kept open even when idle
    #[serde(default = "default_min_pool_size")]
    pub min_pool_size: u32,
    /// Idle time after which a pooled connection is closed, in milliseconds
    #[serde(default = "default_max_idle_time_ms")]
    pub max_idle_time_ms: u64,
    /// TCP connect timeout in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// How long an operation waits for a usable server, in milliseconds.
    /// Bounds the health probe as well.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,
    /// Let the driver retry a write once on transient errors
    #[serde(default = "default_retry_writes")]
    pub retry_writes: bool,
}

fn default_database_name() -> String {
    "voting_app".to_string()
}

fn default_max_pool_size() -> u32 {
    10
}

fn default_min_pool_size() -> u32 {
    0
}

fn default_max_idle_time_ms() -> u64 {
    50_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_server_selection_timeout_ms() -> u64 {
    5_000
}

fn default_retry_writes() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            database: default_database_name(),
            max_pool_size: default_max_pool_size(),
            min_pool_size: default_min_pool_size(),
            max_idle_time_ms: default_max_idle_time_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            retry_writes: default_retry_writes(),
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "database.url must be set (or provided via MONGODB_URL)".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(ConfigError::ValidationError("database.database cannot be empty".to_string()));
        }
        if self.max_pool_size == 0 {
            return Err(ConfigError::ValidationError("database.max_pool_size must be > 0".to_string()));
        }
        if self.min_pool_size > self.max_pool_size {
            return Err(ConfigError::ValidationError(
                "database.min_pool_size cannot exceed database.max_pool_size".to_string(),
            ));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::ValidationError("database.connect_timeout_ms must be > 0".to_string()));
        }
        if self.server_selection_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "database.server_selection_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

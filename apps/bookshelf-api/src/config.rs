//! API server configuration.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `bookshelf.toml` in the working directory, then environment variables
//! (`PORT`, `HOST`, `DATABASE_PATH`, `DB_MAX_CONNECTIONS`,
//! `DB_CONNECT_TIMEOUT_SECS`, `MAX_BODY_BYTES`).

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

/// Optional config file name (extension resolved by `config`).
const CONFIG_FILE: &str = "bookshelf";

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port (default: 9000)
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection (default: 30)
    pub db_connect_timeout_secs: u64,

    /// Request body limit in bytes
    pub max_body_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from defaults, `bookshelf.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Self::defaults()?
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::default().try_parsing(true)),
        )
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// How long a request waits for a database connection.
    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout_secs)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 9000)?
            .set_default("database_path", "bookshelf.db")?
            .set_default("db_max_connections", 5)?
            .set_default("db_connect_timeout_secs", 30)?
            .set_default("max_body_bytes", 64 * 1024)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ApiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }
        if self.db_connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue("DB_CONNECT_TIMEOUT_SECS".to_string()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()));
        }
        self.bind_addr()?;
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}

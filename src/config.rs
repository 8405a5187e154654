//! Hub configuration
//!
//! Loaded from a TOML file (default `~/.config/ocpi-hub/config.toml`).
//! Every section and key is optional; missing values fall back to defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./ocpi-hub.db?mode=rwc"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//!
//! [hub]
//! public_url = "https://hub.example.com"
//! page_limit = 50
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::DatabaseConfig;
use crate::shared::InfraError;

const APP_DIR: &str = "ocpi-hub";

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DbSection,
    pub logging: LoggingConfig,
    pub hub: HubConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DbSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

impl From<&DbSection> for DatabaseConfig {
    fn from(section: &DbSection) -> Self {
        DatabaseConfig {
            url: section.url.clone(),
            max_connections: section.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or any EnvFilter directive)
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Externally reachable base URL, advertised in issued credentials.
    pub public_url: String,
    /// Upper bound for the `limit` query parameter.
    pub page_limit: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            public_url: "http://localhost:8080".to_string(),
            page_limit: 50,
        }
    }
}

impl AppConfig {
    /// Read the config at `path`. A missing file yields the defaults.
    /// `DATABASE_URL`, when set, replaces `database.url`.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            Self::from_toml(&raw)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        toml::from_str(raw).map_err(|e| InfraError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), InfraError> {
        if self.hub.page_limit == 0 {
            return Err(InfraError::Config("hub.page_limit must be at least 1".into()));
        }
        if self.database.max_connections == 0 {
            return Err(InfraError::Config(
                "database.max_connections must be at least 1".into(),
            ));
        }
        url::Url::parse(&self.hub.public_url)
            .map_err(|e| InfraError::Config(format!("hub.public_url: {}", e)))?;
        Ok(())
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::from(&self.database)
    }
}

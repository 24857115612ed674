use std::env;

use thiserror::Error;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_ACCESS_KEY_VAR: &str = "DATABASE_ACCESS_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration value {0}")]
    Missing(&'static str),
}

/// Connection settings for the catalog database.
///
/// Both values are optional at parse time so callers can ask whether the
/// backend is configured; `require` is the fail-fast path.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub database_url: Option<String>,
    pub access_key: Option<String>,
    pub max_connections: u32,
}

impl BackendConfig {
    pub fn new(database_url: Option<String>, access_key: Option<String>) -> Self {
        Self {
            database_url: database_url.filter(|v| !v.trim().is_empty()),
            access_key: access_key.filter(|v| !v.trim().is_empty()),
            max_connections: 10,
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::new(
            env::var(DATABASE_URL_VAR).ok(),
            env::var(DATABASE_ACCESS_KEY_VAR).ok(),
        );
        config.max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10);
        config
    }

    pub fn is_configured(&self) -> bool {
        self.database_url.is_some() && self.access_key.is_some()
    }

    /// Returns `(endpoint, access_key)`.
    pub fn require(&self) -> Result<(&str, &str), ConfigError> {
        let url = self
            .database_url
            .as_deref()
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;
        let key = self
            .access_key
            .as_deref()
            .ok_or(ConfigError::Missing(DATABASE_ACCESS_KEY_VAR))?;
        Ok((url, key))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub host: String,
    pub port: u16,
    pub store_name: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend = BackendConfig::from_env();
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let store_name = env::var("STORE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| crate::presentation::DEFAULT_STORE_NAME.to_string());
        Ok(Self {
            backend,
            host,
            port,
            store_name,
        })
    }
}

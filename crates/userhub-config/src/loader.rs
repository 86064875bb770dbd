//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use userhub_core::UserHubError;

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `USERHUB_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, UserHubError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, UserHubError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), UserHubError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, UserHubError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("USERHUB_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // Environment variables win: USERHUB_REDIS__HOST=... etc.
        builder = builder.add_source(
            Environment::with_prefix("USERHUB")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| UserHubError::Configuration(format!("Failed to build config: {}", e)))?;

        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| UserHubError::Configuration(format!("Failed to parse config: {}", e)))
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_defaults_from_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.redis.port, 6379);
    }

    #[tokio::test]
    async fn test_loads_toml_overrides() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nhost = \"127.0.0.1\"\nport = 9999\n\n[redis]\nhost = \"cache\"\nport = 6380\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.addr(), "127.0.0.1:9999");
        assert_eq!(config.redis.url(), "redis://cache:6380");
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(loader.get().await.server.port, 8080);

        std::fs::write(dir.path().join("default.toml"), "[server]\nport = 8181\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.server.port, 8181);
    }
}

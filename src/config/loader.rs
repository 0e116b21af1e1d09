//! Configuration Loader
//!
//! Builds a [`ClientConfig`] from JSON files and environment variables.

use crate::config::options::ClientConfig;
use crate::error::{Result, WoongkirError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "WOONGKIR_CONFIG_PATH";
pub const API_KEY_ENV: &str = "RAJAONGKIR_API_KEY";
pub const ACCOUNT_TYPE_ENV: &str = "RAJAONGKIR_ACCOUNT_TYPE";
pub const API_BASE_ENV: &str = "RAJAONGKIR_API_BASE";

/// Configuration loader with support for multiple sources
pub struct ConfigLoader {
    config: ClientConfig,
}

impl ConfigLoader {
    /// Load defaults, then config files from the default paths, then the
    /// environment. Later sources override earlier ones.
    pub fn new() -> Result<Self> {
        let mut loader = Self {
            config: ClientConfig::default(),
        };

        loader.load_from_default_paths()?;
        loader.load_from_env()?;

        Ok(loader)
    }

    /// Create a loader with a specific config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut loader = Self {
            config: ClientConfig::default(),
        };

        loader.load_from_file(path)?;

        Ok(loader)
    }

    /// Load configuration from default paths
    fn load_from_default_paths(&mut self) -> Result<()> {
        for path in Self::get_config_paths() {
            if path.exists() {
                self.load_from_file(&path)?;
            }
        }

        Ok(())
    }

    /// Get list of config paths to check
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(custom_path) = std::env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(custom_path));
        }

        paths.push(PathBuf::from("woongkir.json"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("woongkir").join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".woongkir").join("config.json"));
        }

        paths
    }

    /// Load options from a JSON object file
    fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WoongkirError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let options: Map<String, Value> = serde_json::from_str(&content).map_err(|e| {
            WoongkirError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), options = options.len(), "Loaded config file");
        self.config.set_options(options)?;
        Ok(())
    }

    /// Apply the RajaOngkir environment variables that are set
    fn load_from_env(&mut self) -> Result<()> {
        let vars = [
            (API_KEY_ENV, "api_key"),
            (ACCOUNT_TYPE_ENV, "account_type"),
            (API_BASE_ENV, "base_url"),
        ];

        for (env, option) in vars {
            if let Ok(value) = std::env::var(env) {
                self.config.set_option(option, value)?;
            }
        }

        Ok(())
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Take ownership of the configuration
    pub fn into_config(self) -> ClientConfig {
        self.config
    }
}

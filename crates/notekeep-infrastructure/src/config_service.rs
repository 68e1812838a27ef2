//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the client configuration
//! from the configuration file (~/.config/notekeep/config.toml).

use crate::paths::{NotekeepPaths, PathError, ServiceType};
use notekeep_core::config::ClientConfig;
use notekeep_core::{NotekeepError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Environment variable overriding `api_base_url`.
pub const API_URL_ENV: &str = "NOTEKEEP_API_URL";

/// Configuration service that loads and caches the client configuration.
///
/// A missing file yields the defaults; a malformed file is an error so that a
/// typo never silently points the client at the wrong server.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `config.toml` under `paths`.
    pub fn new(paths: &NotekeepPaths) -> std::result::Result<Self, PathError> {
        Ok(Self::with_path(paths.get_path(ServiceType::Config)?))
    }

    /// Creates a service reading a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// The `NOTEKEEP_API_URL` environment variable takes precedence over the
    /// file.
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = apply_env_override(self.load_file()?, std::env::var(API_URL_ENV).ok());

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Writes `config` to the file and refreshes the cache.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(config)?)?;

        self.invalidate_cache();
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Reads the file as written, ignoring the environment override.
    ///
    /// Use this as the base for edits so an override is never persisted.
    pub fn get_file_config(&self) -> Result<ClientConfig> {
        self.load_file()
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            NotekeepError::config(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Applies the `NOTEKEEP_API_URL` override when it is set and non-empty.
pub fn apply_env_override(mut config: ClientConfig, api_url: Option<String>) -> ClientConfig {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api_base_url = url;
    }
    config
}

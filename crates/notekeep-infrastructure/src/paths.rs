//! Unified path management for notekeep files.
//!
//! Every file the client writes lives under one configuration directory so
//! that a `--config-dir` override relocates all of them together.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "notekeep";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Files and directories managed by notekeep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// `config.toml`
    Config,
    /// `secure_store.json`, the persisted credentials.
    SecureStore,
    /// `logs/`
    Logs,
}

/// Unified path management for notekeep.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/notekeep/          # Config directory (or the override)
/// ├── config.toml              # Client configuration
/// ├── secure_store.json        # Session credentials (mode 600)
/// └── logs/                    # Application logs
///     └── notekeep.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotekeepPaths {
    base: Option<PathBuf>,
}

impl NotekeepPaths {
    /// Creates a path resolver. `base` replaces the platform config directory.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the notekeep configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: the override, or the platform config dir joined with `notekeep`
    /// - `Err(PathError::HomeDirNotFound)`: no override and no platform config dir
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the path of a managed file or directory.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        let dir = self.config_dir()?;
        Ok(match service {
            ServiceType::Config => dir.join("config.toml"),
            ServiceType::SecureStore => dir.join("secure_store.json"),
            ServiceType::Logs => dir.join("logs"),
        })
    }
}

//! File-backed secure storage.
//!
//! Persists the session credentials in `~/.config/notekeep/secure_store.json`.

use crate::paths::{NotekeepPaths, PathError, ServiceType};
use crate::storage::{AtomicJsonError, AtomicJsonFile};
use async_trait::async_trait;
use notekeep_core::session::SecureStore;
use notekeep_core::{NotekeepError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// Secure store keeping every entry in a single owner-only JSON file.
///
/// Responsibilities:
/// - Read, write and remove string entries by key
/// - Keep the file readable by the current user only (mode 600 on Unix)
/// - Replace the file atomically so a crash never leaves a half-written entry
///
/// Does NOT:
/// - Encrypt values (confidentiality relies on file permissions)
/// - Cache entries between calls
pub struct FileSecureStore {
    file: AtomicJsonFile<Entries>,
    /// Serializes access from tasks of this process; the file lock covers
    /// other processes.
    guard: Mutex<()>,
}

impl FileSecureStore {
    /// Creates a store at the default location under `paths`.
    pub fn new(paths: &NotekeepPaths) -> std::result::Result<Self, PathError> {
        Ok(Self::with_path(paths.get_path(ServiceType::SecureStore)?))
    }

    /// Creates a store backed by a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

fn storage_error(action: &str, key: &str, err: AtomicJsonError) -> NotekeepError {
    NotekeepError::storage(format!("failed to {} '{}': {}", action, key, err))
}

#[async_trait]
impl SecureStore for FileSecureStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.guard.lock().await;

        let entries = self
            .file
            .load()
            .map_err(|e| storage_error("read", key, e))?;

        Ok(entries.and_then(|mut entries| entries.remove(key)))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.guard.lock().await;

        self.file
            .update(Entries::new(), |entries| {
                entries.insert(key.to_string(), value.to_string());
                Ok(())
            })
            .map_err(|e| storage_error("write", key, e))?;

        tracing::debug!(key, path = %self.path().display(), "secure store entry written");
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<()> {
        let _guard = self.guard.lock().await;

        if !self.path().exists() {
            return Ok(());
        }

        self.file
            .update(Entries::new(), |entries| {
                entries.remove(key);
                Ok(())
            })
            .map_err(|e| storage_error("delete", key, e))?;

        tracing::debug!(key, "secure store entry removed");
        Ok(())
    }
}

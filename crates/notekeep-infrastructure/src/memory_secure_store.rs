//! In-memory secure storage.

use async_trait::async_trait;
use notekeep_core::Result;
use notekeep_core::session::SecureStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Secure store that lives only as long as the process.
///
/// Clones share the same entries, which lets a test keep a handle on the
/// storage a session store writes to.
#[derive(Debug, Clone, Default)]
pub struct MemorySecureStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Returns the current value of `key` without going through the async port.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SecureStore for MemorySecureStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

//! Secure storage port.
//!
//! Defines the interface for the on-device key-value store that keeps the
//! session credentials between process runs.

use crate::error::Result;
use async_trait::async_trait;

/// Key under which the bearer token is persisted.
pub const SECURE_TOKEN_KEY: &str = "secure_user_token";

/// Key under which the JSON-serialized user profile is persisted.
pub const SECURE_USER_DATA_KEY: &str = "secure_user_data";

/// String key-value storage for secrets.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Stored values are readable by the current user only
/// - Values are never logged or exposed in error messages
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Reads a value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: the key is present
    /// - `Ok(None)`: the key is absent
    /// - `Err(_)`: the store could not be read
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a value.
    ///
    /// Removing a key that is not present succeeds.
    async fn delete_item(&self, key: &str) -> Result<()>;
}

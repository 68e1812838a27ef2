//! Error types for the notekeep client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire notekeep workspace.
///
/// The client only distinguishes a handful of failure families: storage
/// failures, malformed persisted session data, and network/API failures.
/// The remaining variants cover configuration and local plumbing.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum NotekeepError {
    /// Secure storage could not be read, written or cleared
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted session data exists but is not a valid user record
    #[error("Malformed session data: {0}")]
    MalformedSession(String),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl NotekeepError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a MalformedSession error
    pub fn malformed_session(message: impl Into<String>) -> Self {
        Self::MalformedSession(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an Api error from an HTTP status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io { .. })
    }

    /// Check if this is a malformed-session error
    pub fn is_malformed_session(&self) -> bool {
        matches!(self, Self::MalformedSession(_))
    }

    /// Check if this error came from talking to the remote service.
    ///
    /// Covers both transport failures and non-success HTTP statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Api { .. })
    }

    /// Check if the remote service rejected the session token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NotekeepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NotekeepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NotekeepError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for NotekeepError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, NotekeepError>`.
pub type Result<T> = std::result::Result<T, NotekeepError>;

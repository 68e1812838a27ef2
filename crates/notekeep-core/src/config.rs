//! Client configuration model.

use crate::id::ResourceId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base URL of the hosted Keep service.
pub const DEFAULT_API_BASE_URL: &str = "https://keep.kevindupas.com/api";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request deadline. Requests run to completion when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: None,
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(&self.api_base_url)
    }
}

/// URLs of the REST resources, derived from the configured base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn login(&self) -> String {
        format!("{}/login", self.base)
    }

    pub fn notes(&self) -> String {
        format!("{}/notes", self.base)
    }

    pub fn note(&self, id: &ResourceId) -> String {
        format!("{}/notes/{}", self.base, id)
    }

    pub fn categories(&self) -> String {
        format!("{}/categories", self.base)
    }

    pub fn tasks(&self) -> String {
        format!("{}/tasks", self.base)
    }

    pub fn task(&self, id: &ResourceId) -> String {
        format!("{}/tasks/{}", self.base, id)
    }
}

//! User and login models.

use crate::error::{NotekeepError, Result};
use crate::id::ResourceId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reads a `null` string field as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile of the signed-in user as returned by `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: ResourceId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl User {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// A user record is usable only when it carries both an id and an email.
    pub fn is_valid(&self) -> bool {
        !self.id.is_blank() && !self.email.trim().is_empty()
    }

    /// Parses the user record persisted in secure storage.
    ///
    /// # Errors
    ///
    /// Returns `NotekeepError::MalformedSession` when the string is not JSON,
    /// is not a user object, or lacks a usable id or email.
    pub fn from_persisted(raw: &str) -> Result<Self> {
        let user: User = serde_json::from_str(raw).map_err(|e| {
            NotekeepError::malformed_session(format!("user record is not valid JSON: {}", e))
        })?;

        if !user.is_valid() {
            return Err(NotekeepError::malformed_session(
                "user record lacks an id or an email",
            ));
        }

        Ok(user)
    }

    /// Serializes the record for secure storage.
    pub fn to_persisted(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Email/password pair submitted by the login screen.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Builds credentials, trimming surrounding whitespace from the password.
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password: password.trim().to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful `POST /login` response.
#[derive(Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

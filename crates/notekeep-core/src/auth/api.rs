//! Login port.

use super::model::{Credentials, LoginResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Exchanges credentials for a bearer token.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Calls `POST /login`.
    ///
    /// # Returns
    ///
    /// - `Ok(LoginResponse)`: token and user profile
    /// - `Err(NotekeepError::Api)`: the service rejected the credentials
    /// - `Err(NotekeepError::Network)`: the service could not be reached
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;
}

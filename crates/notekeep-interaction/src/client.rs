//! HTTP plumbing shared by every endpoint.

use crate::envelope::DataEnvelope;
use notekeep_core::config::{ApiEndpoints, ClientConfig};
use notekeep_core::{NotekeepError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the Keep REST service.
///
/// Requests carry no deadline unless one is configured.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    endpoints: ApiEndpoints,
    timeout: Option<Duration>,
}

impl HttpApiClient {
    /// Creates a client for the given endpoints with a default `reqwest::Client`.
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(client: Client, endpoints: ApiEndpoints) -> Self {
        Self {
            client,
            endpoints,
            timeout: None,
        }
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut api = Self::new(config.endpoints());
        api.timeout = config.request_timeout();
        api
    }

    /// Sets a per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Builds a JSON request, attaching the bearer token when given.
    pub(crate) fn request(&self, method: Method, url: &str, token: Option<&str>) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
    }

    /// Sends a request and turns transport failures and non-success statuses
    /// into errors.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| NotekeepError::network(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "Keep API returned an error");
            return Err(NotekeepError::api(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Sends a request and decodes the JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NotekeepError::network(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            NotekeepError::api(status, format!("unexpected response body: {}", e))
        })
    }

    /// Fetches a single resource wrapped in `{ "data": ... }`.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        entity_type: &'static str,
    ) -> Result<T> {
        let envelope: DataEnvelope<T> = self
            .send_json(self.request(Method::GET, url, Some(token)))
            .await?;
        envelope
            .data
            .ok_or_else(|| NotekeepError::not_found(entity_type, url))
    }

    /// Fetches a list wrapped in `{ "data": [...] }`.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<Vec<T>> {
        let envelope: DataEnvelope<Vec<T>> = self
            .send_json(self.request(Method::GET, url, Some(token)))
            .await?;
        Ok(envelope.into_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpApiClient {
        HttpApiClient::new(ApiEndpoints::new("http://localhost:8000/api"))
    }

    #[test]
    fn test_authorized_request_headers() {
        let request = client()
            .request(Method::GET, "http://localhost:8000/api/notes", Some("t1"))
            .build()
            .unwrap();

        assert_eq!(request.headers()[AUTHORIZATION], "Bearer t1");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert!(request.timeout().is_none());
    }

    #[test]
    fn test_anonymous_request_has_no_authorization() {
        let request = client()
            .request(Method::POST, "http://localhost:8000/api/login", None)
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_timeout_from_config() {
        let config = ClientConfig {
            request_timeout_secs: Some(3),
            ..ClientConfig::default()
        };
        let request = HttpApiClient::from_config(&config)
            .request(Method::GET, "http://localhost/api/tasks", Some("t"))
            .build()
            .unwrap();

        assert_eq!(request.timeout(), Some(&Duration::from_secs(3)));
    }
}

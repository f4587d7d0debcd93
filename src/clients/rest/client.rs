//! REST client implementation for the Mailbox API.
//!
//! This module provides the [`RestClient`] type, the production
//! [`Connection`] used by every resource.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::{exchange_client_credentials, AccessToken, OAuthError};
use crate::clients::rest::RestError;
use crate::clients::{Connection, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::HelpScoutConfig;

/// REST API client for the Mailbox API.
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks
/// or to install as the process-wide connection.
///
/// # Example
///
/// ```rust,ignore
/// use helpscout_api::{Connection, HelpScoutConfig, RestClient};
///
/// let client = RestClient::connect(&config).await?;
///
/// let response = client.get("mailboxes", None).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using an already obtained access token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &HelpScoutConfig, token: &AccessToken) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config, token)?;
        Ok(Self { http_client })
    }

    /// Exchanges the configured client credentials for a token and creates
    /// a REST client authenticated with it.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError`] if the token exchange fails.
    pub async fn connect(config: &HelpScoutConfig) -> Result<Self, OAuthError> {
        let token = exchange_client_credentials(config).await?;
        let http_client = HttpClient::new(config, &token)?;
        Ok(Self { http_client })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

impl Connection for RestClient {
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None)
            .await
    }
}

/// Strips leading `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, ClientId, ClientSecret};

    #[test]
    fn test_normalize_path_strips_leading_slashes() {
        assert_eq!(normalize_path("/conversations").unwrap(), "conversations");
        assert_eq!(normalize_path("//conversations/1").unwrap(), "conversations/1");
        assert_eq!(normalize_path("users/me").unwrap(), "users/me");
    }

    #[test]
    fn test_normalize_path_rejects_empty_paths() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path == "/"
        ));
    }

    #[test]
    fn test_rest_client_reports_base_url() {
        let config = HelpScoutConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .base_url(BaseUrl::new("http://localhost:4000/v2").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config, &AccessToken::new("token")).unwrap();

        assert_eq!(client.base_url(), "http://localhost:4000/v2");
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_any_request() {
        let config = HelpScoutConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config, &AccessToken::new("token")).unwrap();

        let result = client.get("/", None).await;
        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    }
}

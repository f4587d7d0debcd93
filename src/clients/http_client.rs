//! HTTP client for Help Scout API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Mailbox API. Each request is sent exactly once.

use std::collections::HashMap;

use crate::auth::AccessToken;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::HelpScoutConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Mailbox API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the bearer token
/// - JSON body encoding and decoding
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use helpscout_api::{AccessToken, HelpScoutConfig};
/// use helpscout_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config, &AccessToken::new("token"))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "mailboxes")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.helpscout.net/v2`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticated with the given token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &HelpScoutConfig, token: &AccessToken) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Help Scout API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !token.access_token.is_empty() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.access_token),
            );
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Sending fails or the body is cut off (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::decode_body(code, body_text);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            path = %request.path,
            correlation_id = response.request_id().unwrap_or_default(),
            "request to Help Scout API failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Decodes a response body.
    ///
    /// An empty body is `{}`. Text that is not JSON comes back as a JSON
    /// string on success and under `raw_body` on failure.
    fn decode_body(code: u16, body_text: String) -> serde_json::Value {
        if body_text.trim().is_empty() {
            return serde_json::json!({});
        }

        match serde_json::from_str(&body_text) {
            Ok(value) => value,
            Err(_) if (200..300).contains(&code) => serde_json::Value::String(body_text),
            Err(_) => serde_json::json!({ "raw_body": body_text }),
        }
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(message) = response.body.get("message") {
            error_body.insert("message".to_string(), message.clone());
        }
        if let Some(errors) = response
            .body
            .get("_embedded")
            .and_then(|embedded| embedded.get("errors"))
        {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

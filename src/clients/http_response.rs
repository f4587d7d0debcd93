//! HTTP response types for the Help Scout API client.

use std::collections::HashMap;

/// An HTTP response from the API.
///
/// Headers are stored with lower-cased names. An empty response body (as
/// returned by most create and update endpoints) is represented as `{}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Correlation-Id` header value, if present.
    ///
    /// Include this ID when reporting API errors.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("correlation-id")
    }

    /// Returns the `Resource-ID` header of a create response, if present.
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        self.header("resource-id")
    }

    /// Returns the `Location` header of a create response, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

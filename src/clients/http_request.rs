//! Requests sent by [`HttpClient`](crate::clients::HttpClient).
//!
//! Resource operations only ever issue four verbs against paths relative
//! to the Mailbox API base URL, so a request is just a method, a path, an
//! optional JSON body and optional query parameters.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Verbs the resource layer uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads a member, a collection or an embedded list.
    Get,
    /// Creates a resource or runs an action such as adding a note.
    Post,
    /// Sends the full attribute set of an existing resource.
    Put,
    /// Removes a resource.
    Delete,
}

impl HttpMethod {
    /// Whether the Mailbox API expects a JSON body with this verb.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// One call against the Mailbox API.
///
/// `path` is relative to the configured base URL, e.g.
/// `conversations/123/threads`. A body is serialized as JSON.
///
/// # Example
///
/// ```rust
/// use helpscout_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "conversations")
///     .query_param("status", "active")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "conversations/1/notes")
///     .body(json!({"text": "Hello"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Verb to send.
    pub http_method: HttpMethod,
    /// Resource path without the base URL.
    pub path: String,
    /// Attributes or action payload.
    pub body: Option<serde_json::Value>,
    /// Filters and paging, e.g. `status=active`, `page=2`.
    pub query: Option<HashMap<String, String>>,
    /// Headers sent on top of the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Starts a request for `method` on `path`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Checks that a POST or PUT carries a body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] otherwise.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Assembles an [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets the JSON payload.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces the query string parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds one query string parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a header for this request only.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Finishes the request after [`HttpRequest::verify`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

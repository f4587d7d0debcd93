//! HTTP client types for Help Scout API communication.
//!
//! # Overview
//!
//! - [`Connection`]: The narrow interface resources are dispatched through
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level REST client implementing [`Connection`]
//! - [`rest::RestError`]: REST-specific error types
//!
//! Requests are sent once. Non-2xx responses surface as
//! [`HttpError::Response`] and are never retried at this layer.

mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use connection::{configure, connection, Connection};
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};

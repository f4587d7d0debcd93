//! REST API client for the Help Scout Mailbox API.
//!
//! - [`RestClient`]: The production [`Connection`](crate::clients::Connection)
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/conversations` -> `conversations`) and
//! the result is appended to the configured base URL. Empty paths are
//! rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;

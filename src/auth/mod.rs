//! Authentication for the Help Scout Mailbox API.
//!
//! # Overview
//!
//! - [`AccessToken`]: The bearer token attached to every request
//! - [`exchange_client_credentials`]: OAuth 2.0 client credentials grant
//! - [`OAuthError`]: Failures while obtaining a token
//!
//! Most callers never touch this module directly and use
//! [`RestClient::connect`](crate::RestClient::connect), which performs the
//! exchange and builds an authenticated client in one step.
//!
//! # Example
//!
//! ```rust
//! use helpscout_api::AccessToken;
//!
//! // A token obtained elsewhere, e.g. from a cache
//! let token = AccessToken::new("access-token");
//! assert!(token.is_active());
//! ```

mod client_credentials;
mod error;
mod token;

pub use client_credentials::exchange_client_credentials;
pub use error::OAuthError;
pub use token::{AccessToken, AccessTokenResponse};

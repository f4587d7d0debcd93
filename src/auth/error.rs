//! OAuth error types for the Help Scout API client.
//!
//! - [`OAuthError::ClientCredentialsFailed`]: The token endpoint rejected the
//!   request or could not be reached
//! - [`OAuthError::Http`]: The authenticated HTTP client could not be built
//!
//! # Example
//!
//! ```rust
//! use helpscout_api::OAuthError;
//!
//! let error = OAuthError::ClientCredentialsFailed {
//!     status: 401,
//!     message: "invalid_client".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The client credentials exchange failed.
    ///
    /// `status` is `0` for network errors.
    #[error("Client credentials exchange failed with status {status}: {message}")]
    ClientCredentialsFailed {
        /// HTTP status code, or `0` when no response was received.
        status: u16,
        /// Response body or a description of the failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

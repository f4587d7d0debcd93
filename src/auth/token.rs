//! Access token representation for authenticated API calls.
//!
//! An [`AccessToken`] holds the bearer token sent with every request and
//! its optional expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A bearer token for the Mailbox API.
///
/// # Example
///
/// ```rust
/// use helpscout_api::AccessToken;
///
/// let token = AccessToken::new("abc");
/// assert!(token.is_active());
/// assert!(!token.expired());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The bearer token value.
    pub access_token: String,
    /// The token type reported by the server (normally `"bearer"`).
    pub token_type: String,
    /// When the token expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token with no known expiry.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
            expires_at: None,
        }
    }

    /// Creates a token from a token endpoint response.
    ///
    /// `expires_in` is counted from now. Lifetimes that do not fit in a
    /// `u32` are treated as unknown.
    #[must_use]
    pub fn from_response(response: &AccessTokenResponse) -> Self {
        let expires_at = response
            .expires_in
            .and_then(|secs| u32::try_from(secs).ok())
            .map(|secs| Utc::now() + Duration::seconds(i64::from(secs)));

        Self {
            access_token: response.access_token.clone(),
            token_type: response
                .token_type
                .clone()
                .unwrap_or_else(|| "bearer".to_string()),
            expires_at,
        }
    }

    /// Returns `true` if the token has an expiry in the past.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Utc::now() > expires_at)
    }

    /// Returns `true` if the token is non-empty and not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.access_token.is_empty() && !self.expired()
    }
}

/// Body of a successful response from the token endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct AccessTokenResponse {
    /// The issued token.
    pub access_token: String,
    /// Token type, usually `"bearer"`.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};

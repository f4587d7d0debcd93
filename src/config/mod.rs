//! Configuration types for the Help Scout API client.
//!
//! # Overview
//!
//! - [`HelpScoutConfig`]: The configuration struct holding all client settings
//! - [`HelpScoutConfigBuilder`]: A builder for constructing [`HelpScoutConfig`] instances
//! - [`ClientId`]: A validated application ID newtype
//! - [`ClientSecret`]: A validated application secret with masked debug output
//! - [`BaseUrl`]: A validated absolute http(s) URL
//!
//! # Example
//!
//! ```rust
//! use helpscout_api::{HelpScoutConfig, ClientId, ClientSecret};
//!
//! let config = HelpScoutConfig::builder()
//!     .client_id(ClientId::new("my-app-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.helpscout.net/v2");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Default root of the Mailbox API.
pub const DEFAULT_BASE_URL: &str = "https://api.helpscout.net/v2";

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.helpscout.net/v2/oauth2/token";

/// Configuration for the Help Scout API client.
///
/// `HelpScoutConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HelpScoutConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    base_url: BaseUrl,
    token_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl HelpScoutConfig {
    /// Creates a new builder for constructing a `HelpScoutConfig`.
    #[must_use]
    pub fn builder() -> HelpScoutConfigBuilder {
        HelpScoutConfigBuilder::new()
    }

    /// Returns the application ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the application secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the API base URL every resource path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the OAuth2 token URL.
    #[must_use]
    pub const fn token_url(&self) -> &BaseUrl {
        &self.token_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify HelpScoutConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HelpScoutConfig>();
};

/// Builder for constructing [`HelpScoutConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `token_url`: [`DEFAULT_TOKEN_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct HelpScoutConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    base_url: Option<BaseUrl>,
    token_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl HelpScoutConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the OAuth2 token URL.
    #[must_use]
    pub fn token_url(mut self, url: BaseUrl) -> Self {
        self.token_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HelpScoutConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<HelpScoutConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let token_url = match self.token_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_TOKEN_URL)?,
        };

        Ok(HelpScoutConfig {
            client_id,
            client_secret,
            base_url,
            token_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

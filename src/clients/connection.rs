//! The narrow interface resources use to reach the API.
//!
//! Every resource operation is generic over [`Connection`], so the same code
//! runs against the production [`RestClient`] or an in-memory test double.
//!
//! A process-wide [`RestClient`] can be installed once at startup with
//! [`configure`] and read anywhere with [`connection`].
//!
//! # Example
//!
//! ```rust,ignore
//! use helpscout_api::{configure, connection, HelpScoutConfig, RestClient};
//! use helpscout_api::rest::resources::Conversation;
//! use helpscout_api::rest::RestResource;
//!
//! configure(RestClient::connect(&config).await?)?;
//!
//! let conversation = Conversation::find(connection()?, "123").await?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;

use crate::clients::{HttpResponse, RestClient, RestError};
use crate::error::ConfigError;

/// Authenticated HTTP access to the API, relative to its base URL.
///
/// Implementations must return `Err` for any non-2xx status rather than
/// handing the response back.
#[allow(async_fn_in_trait)]
pub trait Connection: Send + Sync {
    /// Sends a GET request.
    async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError>;

    /// Sends a POST request with a JSON body.
    async fn post(&self, path: &str, body: Value) -> Result<HttpResponse, RestError>;

    /// Sends a PUT request with a JSON body.
    async fn put(&self, path: &str, body: Value) -> Result<HttpResponse, RestError>;

    /// Sends a DELETE request.
    async fn delete(&self, path: &str) -> Result<HttpResponse, RestError>;
}

static CONNECTION: OnceLock<RestClient> = OnceLock::new();

/// Installs the process-wide connection.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyConfigured`] if a connection was installed before.
pub fn configure(client: RestClient) -> Result<&'static RestClient, ConfigError> {
    CONNECTION
        .set(client)
        .map_err(|_| ConfigError::AlreadyConfigured)?;
    connection()
}

/// Returns the process-wide connection.
///
/// # Errors
///
/// Returns [`ConfigError::NotConfigured`] if [`configure`] has not been called.
pub fn connection() -> Result<&'static RestClient, ConfigError> {
    CONNECTION.get().ok_or(ConfigError::NotConfigured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AccessToken;
    use crate::config::{ClientId, ClientSecret, HelpScoutConfig};

    fn client() -> RestClient {
        let config = HelpScoutConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config, &AccessToken::new("token")).unwrap()
    }

    // The singleton is process-wide, so its whole lifecycle lives in one test.
    #[test]
    fn test_connection_is_configured_exactly_once() {
        assert_eq!(connection().unwrap_err(), ConfigError::NotConfigured);

        let installed = configure(client()).unwrap();
        assert!(std::ptr::eq(installed, connection().unwrap()));

        assert_eq!(
            configure(client()).unwrap_err(),
            ConfigError::AlreadyConfigured
        );
    }
}

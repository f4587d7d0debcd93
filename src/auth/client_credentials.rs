//! OAuth 2.0 Client Credentials Grant for Help Scout apps.
//!
//! The Mailbox API issues application tokens in exchange for an app's ID and
//! secret. No user interaction is involved, which makes this the flow for
//! background services and scripts.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpscout_api::{exchange_client_credentials, ClientId, ClientSecret, HelpScoutConfig};
//!
//! let config = HelpScoutConfig::builder()
//!     .client_id(ClientId::new("app-id").unwrap())
//!     .client_secret(ClientSecret::new("app-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let token = exchange_client_credentials(&config).await?;
//! println!("expires at {:?}", token.expires_at);
//! ```

use crate::auth::{AccessToken, AccessTokenResponse, OAuthError};
use crate::config::HelpScoutConfig;
use serde::Serialize;

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Request body for client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Exchanges the configured client credentials for an access token.
///
/// Sends a single POST to [`HelpScoutConfig::token_url`].
///
/// # Errors
///
/// Returns [`OAuthError::ClientCredentialsFailed`] if the request cannot be
/// sent, the server answers with a non-2xx status, or the response body is
/// not a token.
pub async fn exchange_client_credentials(
    config: &HelpScoutConfig,
) -> Result<AccessToken, OAuthError> {
    let token_url = config.token_url().as_ref();

    let request_body = ClientCredentialsRequest {
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
    };

    tracing::debug!(url = %token_url, "exchanging client credentials");

    let client = reqwest::Client::new();
    let response = client
        .post(token_url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| OAuthError::ClientCredentialsFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        tracing::warn!(status, "client credentials exchange rejected");
        return Err(OAuthError::ClientCredentialsFailed {
            status,
            message: error_body,
        });
    }

    let token_response: AccessTokenResponse =
        response
            .json()
            .await
            .map_err(|e| OAuthError::ClientCredentialsFailed {
                status,
                message: format!("Failed to parse token response: {e}"),
            })?;

    Ok(AccessToken::from_response(&token_response))
}

//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Help Scout application ID.
///
/// # Example
///
/// ```rust
/// use helpscout_api::ClientId;
///
/// let id = ClientId::new("my-app-id").unwrap();
/// assert_eq!(id.as_ref(), "my-app-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Help Scout application secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ClientSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use helpscout_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated absolute http(s) URL with no trailing slash.
///
/// Used for both the API base URL and the OAuth token URL.
///
/// # Example
///
/// ```rust
/// use helpscout_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.helpscout.net/v2/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.helpscout.net/v2");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated URL, trimming whitespace and trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the scheme is not `http` or
    /// `https`, or if the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidUrl { url: raw.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidUrl { url: raw });
        }

        let host = url[scheme_end + 3..]
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::InvalidUrl { url: raw });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
        assert!(matches!(ClientId::new("   "), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.helpscout.net/v2/").unwrap();
        assert_eq!(url.as_ref(), "https://api.helpscout.net/v2");

        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.to_string(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.helpscout.net").is_err());
        assert!(BaseUrl::new("ftp://api.helpscout.net").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https:///v2").is_err());
    }

    #[test]
    fn test_base_url_deserializes_with_validation() {
        let url: BaseUrl = serde_json::from_str(r#""https://api.helpscout.net/v2/""#).unwrap();
        assert_eq!(url.as_ref(), "https://api.helpscout.net/v2");

        let result: Result<BaseUrl, _> = serde_json::from_str(r#""not a url""#);
        assert!(result.is_err());
    }
}

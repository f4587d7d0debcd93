//! Error types for the Help Scout API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use helpscout_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types, and when installing or reading the
/// process-wide connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the application ID of your Help Scout app.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the application secret of your Help Scout app.")]
    EmptyClientSecret,

    /// A base or token URL is invalid.
    #[error("Invalid URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.helpscout.net/v2').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The process-wide connection was read before [`configure`](crate::configure) was called.
    #[error("No connection configured. Call helpscout_api::configure() once at startup.")]
    NotConfigured,

    /// [`configure`](crate::configure) was called more than once.
    #[error("The connection is already configured and cannot be replaced.")]
    AlreadyConfigured,
}

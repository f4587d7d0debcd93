//! Resource-specific error types for REST API operations.
//!
//! Transport failures are carried through unmodified in
//! [`ResourceError::Rest`]; callers inspect the HTTP status with
//! [`ResourceError::status`].
//!
//! # Example
//!
//! ```rust,ignore
//! use helpscout_api::rest::{RestResource, ResourceError};
//!
//! match Conversation::find(&client, "123").await {
//!     Ok(conversation) => println!("Found: {:?}", conversation.subject()),
//!     Err(e) if e.status() == Some(404) => println!("No such conversation"),
//!     Err(ResourceError::MissingId { resource, operation }) => {
//!         println!("{resource}::{operation} needs an id");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use helpscout_api::rest::ResourceError;
///
/// let error = ResourceError::MissingId {
///     resource: "Conversation",
///     operation: "threads",
/// };
/// assert!(error.to_string().contains("Conversation"));
/// assert!(error.to_string().contains("threads"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An instance operation needs an id and the instance has none.
    ///
    /// Returned before any request is sent.
    #[error("{resource}::{operation} requires an id but the instance has none")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A related object is present but carries no usable id.
    #[error("{resource} relation '{relation}' has no usable id")]
    InvalidRelation {
        /// The type name of the resource holding the relation.
        resource: &'static str,
        /// The attribute name of the relation.
        relation: &'static str,
    },

    /// A REST-level error occurred. HTTP failures are passed through as-is.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// Attributes could not be converted to or from JSON.
    #[error("Failed to convert resource attributes: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the `Correlation-Id` of the failed request, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

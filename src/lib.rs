//! # Help Scout API Rust Client
//!
//! A Rust client for the Help Scout Mailbox API, mapping its JSON resources
//! onto typed in-process objects.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HelpScoutConfig`] and [`HelpScoutConfigBuilder`]
//! - Validated newtypes for API credentials and URLs
//! - OAuth 2.0 client credentials via [`exchange_client_credentials`]
//! - An async HTTP client with bearer authentication
//! - A [`Connection`] interface with a process-wide singleton
//! - Resources with loosely-typed attributes, embedded collections, actions
//!   and lazily resolved relations via [`rest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use helpscout_api::{HelpScoutConfig, ClientId, ClientSecret};
//!
//! // Create configuration using the builder pattern
//! let config = HelpScoutConfig::builder()
//!     .client_id(ClientId::new("your-app-id").unwrap())
//!     .client_secret(ClientSecret::new("your-app-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Connecting
//!
//! [`RestClient::connect`] exchanges the client credentials for a token and
//! returns an authenticated client. Install it once as the process-wide
//! connection, or pass it around explicitly:
//!
//! ```rust,ignore
//! use helpscout_api::{configure, connection, RestClient};
//!
//! configure(RestClient::connect(&config).await?)?;
//!
//! // Anywhere later
//! let conn = connection()?;
//! ```
//!
//! ## Conversations
//!
//! ```rust,ignore
//! use helpscout_api::rest::{Attributes, RestResource};
//! use helpscout_api::Conversation;
//!
//! let conversation = Conversation::find(conn, "123").await?;
//!
//! // Threads come from the conversation's embedded collection
//! let threads = Conversation::threads(conn, "123").await?;
//!
//! // Notes are posted with optional extra attributes
//! let mut extras = Attributes::new();
//! extras.insert("user", 42);
//! Conversation::create_note(conn, "123", "Refund issued", extras).await?;
//!
//! // The assignee is looked up on demand
//! if let Some(user) = conversation.assignee(conn).await? {
//!     println!("Assigned to {:?}", user.email());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global mutable state**: the singleton connection is set once and
//!   read-only afterwards
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Requests are sent once**: failures surface to the caller unmodified

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{exchange_client_credentials, AccessToken, OAuthError};
pub use config::{BaseUrl, ClientId, ClientSecret, HelpScoutConfig, HelpScoutConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    configure, connection, Connection, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, RestClient,
    RestError,
};

// Re-export resource types
pub use rest::resources::{Conversation, Mailbox, User};
pub use rest::{
    Attributes, Created, Endpoint, PageInfo, Record, ResourceError, ResourceList, RestResource,
};

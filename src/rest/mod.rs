//! REST Resource infrastructure for the Mailbox API.
//!
//! This module maps the API's JSON objects onto in-process resources:
//!
//! - **[`Attributes`]**: The loosely-typed attribute bag behind every resource
//! - **[`Record`]**: A generic resource instance wrapping one JSON object
//! - **[`Endpoint`]**: The per-type remote path and its resolution rules
//! - **[`RestResource`] trait**: CRUD operations plus embedded, action and
//!   relation helpers
//! - **[`ResourceList<T>`]**: A Deref-based wrapper for list responses
//! - **[`ResourceError`]**: Error types for resource operations
//!
//! Concrete resources live in the [`resources`] submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use helpscout_api::{HelpScoutConfig, RestClient};
//! use helpscout_api::rest::{Attributes, RestResource};
//! use helpscout_api::rest::resources::Conversation;
//!
//! let client = RestClient::connect(&config).await?;
//!
//! // Find a single conversation
//! let conversation = Conversation::find(&client, "123").await?;
//! println!("Subject: {:?}", conversation.subject());
//!
//! // List conversations
//! let conversations = Conversation::all(&client, None).await?;
//! for conversation in conversations.iter() {
//!     println!("- {:?}", conversation.id());
//! }
//!
//! // Nested threads and notes
//! let threads = conversation.load_threads(&client).await?;
//! conversation.add_note(&client, "Following up", Attributes::new()).await?;
//!
//! // Related user, fetched on demand
//! if let Some(user) = conversation.assignee(&client).await? {
//!     println!("Assigned to {:?}", user.email());
//! }
//! ```

mod attributes;
mod errors;
#[cfg(test)]
mod mock;
mod path;
mod record;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use attributes::{id_from_value, Attributes};
pub use errors::ResourceError;
pub use path::Endpoint;
pub use record::Record;
pub use resource::RestResource;
pub use response::{embedded_records, Created, PageInfo, ResourceList};

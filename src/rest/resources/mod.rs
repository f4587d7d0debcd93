//! Mailbox API resource implementations.
//!
//! # Available Resources
//!
//! ## Conversation
//!
//! Conversations carry threads and notes and link to their assignee.
//!
//! ```rust,ignore
//! use helpscout_api::rest::resources::Conversation;
//! use helpscout_api::rest::{Attributes, RestResource};
//!
//! let threads = Conversation::threads(&client, "123").await?;
//!
//! let mut extras = Attributes::new();
//! extras.insert("user", 42);
//! Conversation::create_note(&client, "123", "Called the customer back", extras).await?;
//! ```
//!
//! ## User
//!
//! ```rust,ignore
//! use helpscout_api::rest::resources::User;
//!
//! let me = User::me(&client).await?;
//! println!("{:?} {:?}", me.first_name(), me.last_name());
//! ```
//!
//! ## Mailbox
//!
//! ```rust,ignore
//! use helpscout_api::rest::resources::Mailbox;
//! use helpscout_api::rest::RestResource;
//!
//! for mailbox in Mailbox::all(&client, None).await?.iter() {
//!     let folders = Mailbox::folders(&client, &mailbox.id().unwrap_or_default()).await?;
//! }
//! ```

mod conversation;
mod mailbox;
mod user;

pub use conversation::Conversation;
pub use mailbox::Mailbox;
pub use user::User;

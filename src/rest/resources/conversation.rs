//! The conversation resource.
//!
//! Conversations live under `conversations`. Beyond the generic CRUD
//! operations they expose their threads, accept notes, and link to the
//! assigned user.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpscout_api::rest::resources::Conversation;
//! use helpscout_api::rest::{Attributes, RestResource};
//!
//! let conversation = Conversation::find(&client, "123").await?;
//!
//! for thread in conversation.load_threads(&client).await? {
//!     println!("{:?}", thread.get("type"));
//! }
//!
//! conversation.add_note(&client, "Escalated to tier 2", Attributes::new()).await?;
//!
//! if let Some(user) = conversation.assignee(&client).await? {
//!     println!("assigned to {:?}", user.email());
//! }
//! ```

use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::clients::Connection;
use crate::rest::resources::User;
use crate::rest::{Attributes, Endpoint, Record, ResourceError, RestResource};

const THREADS: &str = "threads";
const NOTES: &str = "notes";
const ASSIGNEE: &str = "assignee";

/// A customer conversation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation(Record);

impl RestResource for Conversation {
    const ENDPOINT: Endpoint = Endpoint::new("Conversation", "conversations");

    fn from_record(record: Record) -> Self {
        Self(record)
    }

    fn record(&self) -> &Record {
        &self.0
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }
}

impl Deref for Conversation {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Conversation {
    /// Fetches the threads of conversation `id`, in server order.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    pub async fn threads<C: Connection>(conn: &C, id: &str) -> Result<Vec<Record>, ResourceError> {
        Self::fetch_embedded(conn, id, THREADS, THREADS).await
    }

    /// Adds a note to conversation `id` and returns the raw response body.
    ///
    /// `extras` are sent alongside the note; `text` always wins over an
    /// extra of the same name.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    pub async fn create_note<C: Connection>(
        conn: &C,
        id: &str,
        text: &str,
        extras: Attributes,
    ) -> Result<Value, ResourceError> {
        let mut body = extras;
        body.insert("text", text);
        Self::post_action(conn, id, NOTES, body.into()).await
    }

    /// Fetches this conversation's threads.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the conversation has no id.
    pub async fn load_threads<C: Connection>(&self, conn: &C) -> Result<Vec<Record>, ResourceError> {
        let id = self.require_id("threads")?;
        Self::threads(conn, &id).await
    }

    /// Adds a note to this conversation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the conversation has no id.
    pub async fn add_note<C: Connection>(
        &self,
        conn: &C,
        text: &str,
        extras: Attributes,
    ) -> Result<Value, ResourceError> {
        let id = self.require_id("create_note")?;
        Self::create_note(conn, &id, text, extras).await
    }

    /// Looks up the assigned user.
    ///
    /// Returns `Ok(None)` without a request when the conversation is
    /// unassigned. An `assignee` key holding `null` counts as unassigned.
    /// Otherwise the user is fetched on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRelation`] if the assignee has no id.
    /// Lookup failures propagate.
    pub async fn assignee<C: Connection>(&self, conn: &C) -> Result<Option<User>, ResourceError> {
        self.related::<User, C>(conn, ASSIGNEE).await
    }

    /// The conversation subject.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.attributes().get_str("subject")
    }

    /// The status: `active`, `pending`, `closed` or `spam`.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.attributes().get_str("status")
    }

    /// The mailbox-visible conversation number.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.attributes().get_u64("number")
    }

    /// The id of the mailbox holding the conversation.
    #[must_use]
    pub fn mailbox_id(&self) -> Option<u64> {
        self.attributes().get_u64("mailboxId")
    }

    /// When the conversation was opened.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.attributes().get_datetime("createdAt")
    }
}

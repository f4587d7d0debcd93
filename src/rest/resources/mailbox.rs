//! The mailbox resource.

use std::ops::Deref;

use crate::clients::Connection;
use crate::rest::{Endpoint, Record, ResourceError, RestResource};

/// A shared inbox that conversations belong to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mailbox(Record);

impl RestResource for Mailbox {
    const ENDPOINT: Endpoint = Endpoint::new("Mailbox", "mailboxes");

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

impl Deref for Mailbox {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Mailbox {
    /// Fetches the folders of mailbox `id`.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    pub async fn folders<C: Connection>(conn: &C, id: &str) -> Result<Vec<Record>, ResourceError> {
        Self::fetch_embedded(conn, id, "folders", "folders").await
    }

    /// The mailbox name shown to agents.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes().get_str("name")
    }

    /// The address customers write to.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.attributes().get_str("email")
    }
}

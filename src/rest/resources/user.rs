//! The user resource.

use std::ops::Deref;

use crate::clients::Connection;
use crate::rest::{Endpoint, Record, ResourceError, RestResource};

/// A Help Scout user (agent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User(Record);

impl RestResource for User {
    const ENDPOINT: Endpoint = Endpoint::new("User", "users");

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

impl Deref for User {
    type Target = Record;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl User {
    /// Fetches the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    pub async fn me<C: Connection>(conn: &C) -> Result<Self, ResourceError> {
        let response = conn.get(&Self::resource_path(None, Some("me")), None).await?;
        Ok(Self::from_record(Record::from_value(response.body)))
    }

    /// The user's first name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.attributes().get_str("firstName")
    }

    /// The user's last name.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.attributes().get_str("lastName")
    }

    /// The user's login email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.attributes().get_str("email")
    }
}

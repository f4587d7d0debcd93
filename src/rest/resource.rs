//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for resources backed by a [`Record`]. Types that implement this
//! trait gain `find()`, `all()`, `create()`, `save()`, and `delete()`, plus
//! helpers for embedded collections, action endpoints and related objects.
//!
//! # Implementing a Resource
//!
//! 1. Define a newtype around [`Record`]
//! 2. Declare its [`Endpoint`] as an associated constant
//! 3. Provide the three record accessors
//!
//! ```rust,ignore
//! use helpscout_api::rest::{Endpoint, Record, RestResource};
//!
//! #[derive(Debug, Clone)]
//! pub struct Customer(Record);
//!
//! impl RestResource for Customer {
//!     const ENDPOINT: Endpoint = Endpoint::new("Customer", "customers");
//!
//!     fn from_record(record: Record) -> Self {
//!         Self(record)
//!     }
//!
//!     fn record(&self) -> &Record {
//!         &self.0
//!     }
//!
//!     fn record_mut(&mut self) -> &mut Record {
//!         &mut self.0
//!     }
//! }
//! ```
//!
//! Every operation is generic over [`Connection`], so the same resource code
//! runs against [`RestClient`](crate::RestClient) or a test double.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::Connection;
use crate::rest::{
    embedded_records, id_from_value, Attributes, Created, Endpoint, PageInfo, Record,
    ResourceError, ResourceList,
};

/// A typed API resource backed by a [`Record`].
#[allow(async_fn_in_trait)]
pub trait RestResource: Sized + Send + Sync {
    /// The endpoint this resource type lives under.
    const ENDPOINT: Endpoint;

    /// Wraps a record as this resource type.
    fn from_record(record: Record) -> Self;

    /// Returns the backing record.
    fn record(&self) -> &Record;

    /// Returns the backing record mutably.
    fn record_mut(&mut self) -> &mut Record;

    /// Resolves a path under this resource's endpoint.
    #[must_use]
    fn resource_path(id: Option<&str>, sub_path: Option<&str>) -> String {
        Self::ENDPOINT.resource_path(id, sub_path)
    }

    /// Returns the instance id, or `None` for an unsaved resource.
    fn get_id(&self) -> Option<String> {
        self.record().id()
    }

    /// Finds a single resource by id.
    ///
    /// # Errors
    ///
    /// HTTP failures (including 404) propagate as [`ResourceError::Rest`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let conversation = Conversation::find(&client, "123").await?;
    /// ```
    async fn find<C: Connection>(conn: &C, id: &str) -> Result<Self, ResourceError> {
        let path = Self::resource_path(Some(id), None);
        let response = conn.get(&path, None).await?;
        Ok(Self::from_record(Record::from_value(response.body)))
    }

    /// Lists resources, optionally filtered by query parameters.
    ///
    /// Items are read from `_embedded.{endpoint}`; a missing key yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = HashMap::new();
    /// query.insert("status".to_string(), "active".to_string());
    ///
    /// let conversations = Conversation::all(&client, Some(query)).await?;
    /// if conversations.has_next_page() {
    ///     // Fetch next page...
    /// }
    /// ```
    async fn all<C: Connection>(
        conn: &C,
        query: Option<HashMap<String, String>>,
    ) -> Result<ResourceList<Self>, ResourceError> {
        let path = Self::resource_path(None, None);
        let response = conn.get(&path, query).await?;

        let items = embedded_records(&response.body, Self::ENDPOINT.path)
            .into_iter()
            .map(Self::from_record)
            .collect();

        Ok(ResourceList::new(items, PageInfo::from_body(&response.body)))
    }

    /// Creates a resource from attributes.
    ///
    /// The API answers `201 Created` with an empty body; the new id is read
    /// from the `Resource-ID` header, falling back to an `id` in the body.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    async fn create<C: Connection>(
        conn: &C,
        attributes: Attributes,
    ) -> Result<Created, ResourceError> {
        let path = Self::resource_path(None, None);
        let response = conn.post(&path, attributes.into()).await?;

        let id = response
            .resource_id()
            .map(String::from)
            .or_else(|| response.body.get("id").and_then(id_from_value));

        Ok(Created {
            id,
            location: response.location().map(String::from),
        })
    }

    /// Persists the resource.
    ///
    /// Without an id this creates the resource and records the new id.
    /// With an id it sends a PUT to the member path. When the server
    /// answers with a non-empty object body, it replaces the local
    /// attributes.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    async fn save<C: Connection>(&mut self, conn: &C) -> Result<(), ResourceError> {
        let body: Value = self.record().attributes().clone().into();

        let response = match self.get_id() {
            Some(id) => {
                let path = Self::resource_path(Some(&id), None);
                conn.put(&path, body).await?
            }
            None => {
                let path = Self::resource_path(None, None);
                let response = conn.post(&path, body).await?;
                if let Some(id) = response.resource_id() {
                    self.record_mut().set("id", id_value(id));
                }
                response
            }
        };

        if let Value::Object(map) = response.body {
            if !map.is_empty() {
                self.record_mut().replace_attributes(Attributes::from(map));
            }
        }

        Ok(())
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the instance has no id.
    /// HTTP failures propagate as [`ResourceError::Rest`].
    async fn delete<C: Connection>(&self, conn: &C) -> Result<(), ResourceError> {
        let id = self.require_id("delete")?;
        let path = Self::resource_path(Some(&id), None);
        conn.delete(&path).await?;
        Ok(())
    }

    /// Returns the id or a [`ResourceError::MissingId`] for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the instance has no id.
    fn require_id(&self, operation: &'static str) -> Result<String, ResourceError> {
        self.get_id().ok_or(ResourceError::MissingId {
            resource: Self::ENDPOINT.name,
            operation,
        })
    }

    /// Fetches an embedded collection from `{endpoint}/{id}/{sub_path}`.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    async fn fetch_embedded<C: Connection>(
        conn: &C,
        id: &str,
        sub_path: &str,
        key: &str,
    ) -> Result<Vec<Record>, ResourceError> {
        let path = Self::resource_path(Some(id), Some(sub_path));
        let response = conn.get(&path, None).await?;
        Ok(embedded_records(&response.body, key))
    }

    /// POSTs `body` to `{endpoint}/{id}/{sub_path}` and returns the raw
    /// response body.
    ///
    /// # Errors
    ///
    /// HTTP failures propagate as [`ResourceError::Rest`].
    async fn post_action<C: Connection>(
        conn: &C,
        id: &str,
        sub_path: &str,
        body: Value,
    ) -> Result<Value, ResourceError> {
        let path = Self::resource_path(Some(id), Some(sub_path));
        let response = conn.post(&path, body).await?;
        Ok(response.body)
    }

    /// Resolves the related object stored under `relation`.
    ///
    /// An absent or `null` relation yields `Ok(None)` without a request.
    /// Otherwise the related resource is fetched by id on every call.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidRelation`] if the relation has no
    /// usable `id`. Lookup failures propagate.
    async fn related<R: RestResource, C: Connection>(
        &self,
        conn: &C,
        relation: &'static str,
    ) -> Result<Option<R>, ResourceError> {
        let attributes = self.record().attributes();

        match attributes.get(relation) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => {
                let id = attributes
                    .dig(&[relation, "id"])
                    .and_then(id_from_value)
                    .ok_or(ResourceError::InvalidRelation {
                        resource: Self::ENDPOINT.name,
                        relation,
                    })?;
                R::find(conn, &id).await.map(Some)
            }
        }
    }
}

/// Stores a header id as a JSON integer when it is numeric.
fn id_value(id: &str) -> Value {
    id.parse::<u64>().map_or_else(|_| Value::from(id), Value::from)
}

//! The generic resource instance.
//!
//! A [`Record`] wraps one JSON object from the API. Embedded sub-resources
//! with no endpoint of their own (threads, folders) are returned as plain
//! records; concrete resources such as
//! [`Conversation`](crate::rest::resources::Conversation) wrap a record and
//! add typed operations on top.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{Attributes, ResourceError};

/// A single API object and its attributes.
///
/// # Example
///
/// ```rust
/// use helpscout_api::rest::Record;
/// use serde_json::json;
///
/// let record = Record::from_value(json!({"id": 7, "type": "note", "body": "Hi"}));
/// assert_eq!(record.id(), Some("7".to_string()));
/// assert_eq!(record.get("type"), Some(&json!("note")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    attributes: Attributes,
}

impl Record {
    /// Creates a record with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a decoded JSON object. The attributes are exactly the input.
    #[must_use]
    pub fn wrap(raw: Map<String, Value>) -> Self {
        Self {
            attributes: Attributes::from(raw),
        }
    }

    /// Wraps any JSON value; non-objects produce an empty record.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self::from_attributes(Attributes::from_json(value))
    }

    /// Creates a record from an attribute bag.
    #[must_use]
    pub const fn from_attributes(attributes: Attributes) -> Self {
        Self { attributes }
    }

    /// Returns the attributes.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Consumes the record and returns its attributes.
    #[must_use]
    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Returns the id derived from the `id` attribute, if any.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.attributes.id()
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Looks up an attribute by snake_case or exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.attributes.field(name)
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(key, value)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// Deserializes the attributes into a typed view.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the attributes do not
    /// match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, ResourceError> {
        let value = Value::Object(self.attributes.as_map().clone());
        serde_json::from_value(value).map_err(ResourceError::from)
    }

    pub(crate) fn replace_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }
}

impl From<Attributes> for Record {
    fn from(attributes: Attributes) -> Self {
        Self::from_attributes(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_keeps_attributes_exactly() {
        let raw = json!({"id": 5, "subject": "Hi", "assignee": null});
        let Value::Object(map) = raw.clone() else {
            unreachable!()
        };

        let record = Record::wrap(map.clone());
        assert_eq!(record.attributes().as_map(), &map);
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_from_value_non_object_is_empty() {
        let record = Record::from_value(json!(42));
        assert!(record.attributes().is_empty());
        assert_eq!(record.id(), None);
    }

    #[test]
    fn test_id_string_and_integer() {
        assert_eq!(
            Record::from_value(json!({"id": "abc"})).id(),
            Some("abc".to_string())
        );
        assert_eq!(
            Record::from_value(json!({"id": 123})).id(),
            Some("123".to_string())
        );
        assert_eq!(Record::from_value(json!({"id": null})).id(), None);
        assert_eq!(Record::from_value(json!({"subject": "x"})).id(), None);
    }

    #[test]
    fn test_set_and_remove() {
        let mut record = Record::new();
        record.set("status", "pending");
        assert_eq!(record.field("status"), Some(&json!("pending")));
        assert_eq!(record.remove("status"), Some(json!("pending")));
        assert_eq!(record.get("status"), None);
    }

    #[test]
    fn test_deserialize_into_typed_view() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Thread {
            id: u64,
            created_by: Option<Value>,
        }

        let record = Record::from_value(json!({"id": 9, "createdBy": {"id": 1}}));
        let thread: Thread = record.deserialize_into().unwrap();
        assert_eq!(thread.id, 9);
        assert!(thread.created_by.is_some());

        let bad = Record::from_value(json!({"id": "nine"}));
        assert!(matches!(
            bad.deserialize_into::<Thread>(),
            Err(ResourceError::Serialization(_))
        ));
    }
}

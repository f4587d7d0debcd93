//! Loosely-typed attribute storage for API resources.
//!
//! [`Attributes`] is the decoded JSON object behind every resource. Keys are
//! kept exactly as the API sends them (camelCase). Every accessor returns an
//! `Option`, so a missing key never panics.
//!
//! Present-but-null is distinct from absent:
//!
//! ```rust
//! use helpscout_api::rest::Attributes;
//! use serde_json::{json, Value};
//!
//! let attributes = Attributes::from_json(json!({"assignee": null}));
//! assert_eq!(attributes.get("assignee"), Some(&Value::Null));
//! assert_eq!(attributes.get("mailbox"), None);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object mapping attribute names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// Creates an empty attribute bag.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds an attribute bag from any JSON value.
    ///
    /// Objects are taken as-is; every other value yields an empty bag.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::new(),
        }
    }

    /// Consumes the bag and returns the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present, even when its value is `null`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns `true` if `key` is present and `null`.
    #[must_use]
    pub fn is_null(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(Value::is_null)
    }

    /// Follows a chain of object keys.
    ///
    /// ```rust
    /// use helpscout_api::rest::Attributes;
    /// use serde_json::json;
    ///
    /// let attributes = Attributes::from_json(json!({"assignee": {"id": 42}}));
    /// assert_eq!(attributes.dig(&["assignee", "id"]), Some(&json!(42)));
    /// assert_eq!(attributes.dig(&["assignee", "email"]), None);
    /// ```
    #[must_use]
    pub fn dig(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    /// Returns the value for `key` as a string slice.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the value for `key` as a signed integer.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Returns the value for `key` as an unsigned integer.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// Returns the value for `key` as a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Returns the value for `key` as a JSON object.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    /// Returns the value for `key` as a JSON array.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.0.get(key).and_then(Value::as_array)
    }

    /// Parses the value for `key` as an RFC 3339 timestamp.
    #[must_use]
    pub fn get_datetime(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get_str(key)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Looks up an attribute by its Rust-style name.
    ///
    /// The exact key is tried first, then the camelCase spelling of a
    /// snake_case name, so `field("created_at")` finds `createdAt`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0
            .get(name)
            .or_else(|| self.0.get(&snake_to_camel(name)))
    }

    /// Returns the resource id carried in the `id` attribute.
    ///
    /// See [`id_from_value`] for the accepted shapes.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.0.get("id").and_then(id_from_value)
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Copies every entry of `other` into this bag, overwriting existing keys.
    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }
}

/// Extracts an id from a JSON value.
///
/// Strings are returned as-is and integers are rendered in decimal. Every
/// other value, including floats and `null`, is not an id.
#[must_use]
pub fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl From<Map<String, Value>> for Attributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Attributes> for Value {
    fn from(attributes: Attributes) -> Self {
        Self::Object(attributes.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! List responses and embedded collections.
//!
//! The Mailbox API returns collections wrapped in HAL-style envelopes:
//!
//! ```json
//! {
//!   "_embedded": { "conversations": [ { "id": 1 }, { "id": 2 } ] },
//!   "page": { "size": 25, "totalElements": 2, "totalPages": 1, "number": 1 }
//! }
//! ```
//!
//! [`embedded_records`] unwraps the array; [`ResourceList<T>`] carries the
//! typed items together with the [`PageInfo`] block.
//!
//! # Deref Pattern
//!
//! `ResourceList<T>` implements `Deref<Target = Vec<T>>`:
//!
//! ```rust,ignore
//! let conversations = Conversation::all(&client, None).await?;
//!
//! for conversation in conversations.iter() {
//!     println!("{:?}", conversation.subject());
//! }
//!
//! if let Some(next) = conversations.next_page() {
//!     // request page `next`
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::Record;

/// Pagination metadata from the `page` block of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Items per page.
    #[serde(default)]
    pub size: u64,
    /// Items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// The current page, starting at 1.
    #[serde(default)]
    pub number: u64,
}

impl PageInfo {
    /// Reads the `page` block of a response body.
    ///
    /// Returns `None` when the block is missing or malformed.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("page")
            .and_then(|page| serde_json::from_value(page.clone()).ok())
    }

    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.number < self.total_pages
    }
}

/// A page of resources from a list operation.
///
/// # Example
///
/// ```rust
/// use helpscout_api::rest::{PageInfo, ResourceList};
///
/// let list = ResourceList::new(
///     vec!["a", "b"],
///     Some(PageInfo { size: 2, total_elements: 5, total_pages: 3, number: 1 }),
/// );
///
/// assert_eq!(list.len(), 2);
/// assert!(list.has_next_page());
/// assert_eq!(list.next_page(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    items: Vec<T>,
    page: Option<PageInfo>,
}

impl<T> ResourceList<T> {
    /// Creates a list from items and optional page metadata.
    #[must_use]
    pub const fn new(items: Vec<T>, page: Option<PageInfo>) -> Self {
        Self { items, page }
    }

    /// Consumes the list and returns the items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Returns the page metadata, if the response carried any.
    #[must_use]
    pub const fn page(&self) -> Option<&PageInfo> {
        self.page.as_ref()
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page.is_some_and(|page| page.has_next_page())
    }

    /// Returns the number of the next page, if there is one.
    #[must_use]
    pub fn next_page(&self) -> Option<u64> {
        self.page
            .filter(PageInfo::has_next_page)
            .map(|page| page.number + 1)
    }
}

impl<T> Deref for ResourceList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for ResourceList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> IntoIterator for ResourceList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// The result of a create operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Created {
    /// The new resource's id, from the `Resource-ID` header or the body.
    pub id: Option<String>,
    /// The new resource's URL, from the `Location` header.
    pub location: Option<String>,
}

/// Extracts `body["_embedded"][key]` as records, in server order.
///
/// A missing envelope, a missing key or a non-array value yields an empty
/// vector. Array elements that are not objects are skipped.
#[must_use]
pub fn embedded_records(body: &Value, key: &str) -> Vec<Record> {
    body.get("_embedded")
        .and_then(|embedded| embedded.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_object().cloned().map(Record::wrap))
                .collect()
        })
        .unwrap_or_default()
}

//! Endpoint declarations and path resolution for REST resources.
//!
//! Each resource type declares one [`Endpoint`] as an associated constant.
//! Paths are resolved relative to the API base URL:
//!
//! | `id`     | `sub_path`  | Result                         |
//! |----------|-------------|--------------------------------|
//! | `None`   | `None`      | `conversations`                |
//! | `Some`   | `None`      | `conversations/123`            |
//! | `Some`   | `Some`      | `conversations/123/threads`    |
//! | `None`   | `Some`      | `users/me`                     |
//!
//! # Example
//!
//! ```rust
//! use helpscout_api::rest::Endpoint;
//!
//! const CONVERSATIONS: Endpoint = Endpoint::new("Conversation", "conversations");
//!
//! assert_eq!(CONVERSATIONS.resource_path(None, None), "conversations");
//! assert_eq!(
//!     CONVERSATIONS.resource_path(Some("123"), Some("threads")),
//!     "conversations/123/threads"
//! );
//! ```

use std::fmt;

/// The remote collection a resource type lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// The resource name used in error messages (e.g., `"Conversation"`).
    pub name: &'static str,
    /// The collection path segment (e.g., `"conversations"`).
    ///
    /// Also the key list responses embed their items under.
    pub path: &'static str,
}

impl Endpoint {
    /// Creates a new endpoint declaration.
    #[must_use]
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Builds the path for a collection, a member, or a member sub-path.
    ///
    /// The id is percent-encoded. `sub_path` is a fixed literal supplied by
    /// the resource type and is inserted verbatim.
    #[must_use]
    pub fn resource_path(&self, id: Option<&str>, sub_path: Option<&str>) -> String {
        let mut path = self.path.to_string();
        if let Some(id) = id {
            path.push('/');
            path.push_str(&urlencoding::encode(id));
        }
        if let Some(sub_path) = sub_path {
            path.push('/');
            path.push_str(sub_path);
        }
        path
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSATIONS: Endpoint = Endpoint::new("Conversation", "conversations");

    #[test]
    fn test_collection_path() {
        assert_eq!(CONVERSATIONS.resource_path(None, None), "conversations");
    }

    #[test]
    fn test_member_path() {
        assert_eq!(
            CONVERSATIONS.resource_path(Some("123"), None),
            "conversations/123"
        );
    }

    #[test]
    fn test_member_sub_path() {
        assert_eq!(
            CONVERSATIONS.resource_path(Some("123"), Some("threads")),
            "conversations/123/threads"
        );
        assert_eq!(
            CONVERSATIONS.resource_path(Some("123"), Some("notes")),
            "conversations/123/notes"
        );
    }

    #[test]
    fn test_collection_sub_path() {
        let users = Endpoint::new("User", "users");
        assert_eq!(users.resource_path(None, Some("me")), "users/me");
    }

    #[test]
    fn test_id_is_percent_encoded() {
        assert_eq!(
            CONVERSATIONS.resource_path(Some("a/b c"), None),
            "conversations/a%2Fb%20c"
        );
    }

    #[test]
    fn test_display_is_the_path() {
        assert_eq!(CONVERSATIONS.to_string(), "conversations");
    }
}

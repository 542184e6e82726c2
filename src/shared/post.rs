/**
 * Post Data Structure
 *
 * This module defines the `Post` struct, the single entity of the thread
 * board, and `NewPost`, the creation input accepted by `POST /threads`.
 *
 * Both types are shared between the server and the desktop client. Field
 * names are serialized in camelCase so the JSON body matches the public
 * HTTP surface (`imageUrl`, `userName`, `parentId`, `createdAt`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Maximum length of a post body in characters
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Maximum length of a root post title in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a display name in characters
pub const MAX_AUTHOR_LENGTH: usize = 100;

/// Maximum number of tags attached to one post
pub const MAX_TAGS: usize = 16;

/// Name shown for posts created without a display name
pub const ANONYMOUS: &str = "Anonymous";

/// An immutable message on the board
///
/// A post is either a root post (`parent_id == None`, usually with a title)
/// or a reply (`parent_id` names another post). Identity and creation time
/// are assigned by the post store; nothing mutates a post afterwards.
///
/// # Example
/// ```rust
/// use threadify::shared::Post;
///
/// let json = r#"{"id":"4b5f0a4e-9a8c-4d4e-8f0e-1b7a2c3d4e5f","text":"Hello",
///     "parentId":null,"createdAt":"2024-01-01T00:00:00Z"}"#;
/// let post: Post = serde_json::from_str(json).unwrap();
/// assert!(post.is_root());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Store-assigned identifier, never reused
    pub id: Uuid,
    /// Optional title, present on root posts by convention
    #[serde(default)]
    pub title: Option<String>,
    /// Post body
    pub text: String,
    /// Optional image reference (data URL or external URL)
    #[serde(default)]
    pub image_url: Option<String>,
    /// Display name of the poster
    #[serde(default, rename = "userName")]
    pub author_name: Option<String>,
    /// Parent post; `None` marks a root post
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time, monotonic per store
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Whether this post starts a thread
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this post replies directly to `parent`
    pub fn is_reply_to(&self, parent: &Uuid) -> bool {
        self.parent_id.as_ref() == Some(parent)
    }

    /// Display name, falling back to `Anonymous`
    pub fn author_display(&self) -> &str {
        self.author_name.as_deref().unwrap_or(ANONYMOUS)
    }
}

/// Input for creating a post
///
/// Every field except `text` is optional. A missing `text` deserializes to an
/// empty string so the request fails validation rather than JSON decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, rename = "userName", skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewPost {
    /// Create a root post input
    pub fn root(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a reply input for the post `parent_id`
    pub fn reply(parent_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parent_id: Some(parent_id),
            ..Self::default()
        }
    }

    /// Set the display name
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Set the image reference
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check required fields and length limits
    ///
    /// Only `text` is required. The title a client asks for on root posts is
    /// a composer convention and is not checked here.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.text.trim().is_empty() {
            return Err(SharedError::validation("text", "Post text cannot be empty"));
        }
        if self.text.chars().count() > MAX_TEXT_LENGTH {
            return Err(SharedError::validation(
                "text",
                format!("Post text exceeds {} characters", MAX_TEXT_LENGTH),
            ));
        }
        if let Some(title) = &self.title {
            if title.chars().count() > MAX_TITLE_LENGTH {
                return Err(SharedError::validation(
                    "title",
                    format!("Title exceeds {} characters", MAX_TITLE_LENGTH),
                ));
            }
        }
        if let Some(name) = &self.author_name {
            if name.trim().chars().count() > MAX_AUTHOR_LENGTH {
                return Err(SharedError::validation(
                    "userName",
                    format!("Display name exceeds {} characters", MAX_AUTHOR_LENGTH),
                ));
            }
        }
        if self.tags.len() > MAX_TAGS {
            return Err(SharedError::validation(
                "tags",
                format!("At most {} tags are allowed", MAX_TAGS),
            ));
        }
        Ok(())
    }

    /// Drop blank optional fields and trim the display name and tags
    ///
    /// `text` is kept exactly as submitted.
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            title: non_blank(self.title),
            text: self.text,
            parent_id: self.parent_id,
            image_url: non_blank(self.image_url),
            author_name: non_blank(self.author_name).map(|n| n.trim().to_string()),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Materialize a post with store-assigned identity and timestamp
    pub fn into_post(self, id: Uuid, created_at: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            text: self.text,
            image_url: self.image_url,
            author_name: self.author_name,
            parent_id: self.parent_id,
            tags: self.tags,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_text_is_rejected() {
        let err = NewPost::root("Hi", "   \n\t").validate().unwrap_err();
        match err {
            SharedError::ValidationError { field, .. } => assert_eq!(field, "text"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_reply_without_title_is_valid() {
        let input = NewPost::reply(Uuid::new_v4(), "Nice!");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_length_limits() {
        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        assert!(NewPost::root("t", long).validate().is_err());

        let title = "t".repeat(MAX_TITLE_LENGTH + 1);
        assert!(NewPost::root(title, "body").validate().is_err());

        let name = "n".repeat(MAX_AUTHOR_LENGTH + 1);
        assert!(NewPost::root("t", "body").with_author(name).validate().is_err());

        let mut input = NewPost::root("t", "body");
        input.tags = (0..=MAX_TAGS).map(|i| i.to_string()).collect();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_normalized_drops_blank_fields() {
        let input = NewPost {
            title: Some("  ".to_string()),
            text: "  keep my spaces ".to_string(),
            parent_id: None,
            image_url: Some(String::new()),
            author_name: Some("  Alice ".to_string()),
            tags: vec![" rust ".to_string(), " ".to_string()],
        }
        .normalized();

        assert_eq!(input.title, None);
        assert_eq!(input.text, "  keep my spaces ");
        assert_eq!(input.image_url, None);
        assert_eq!(input.author_name.as_deref(), Some("Alice"));
        assert_eq!(input.tags, vec!["rust".to_string()]);
    }

    #[test]
    fn test_wire_names() {
        let parent = Uuid::new_v4();
        let post = NewPost::reply(parent, "Nice!")
            .with_author("Bob")
            .into_post(Uuid::new_v4(), Utc::now());
        let value = serde_json::to_value(&post).unwrap();

        assert_eq!(value["parentId"], serde_json::json!(parent));
        assert_eq!(value["userName"], "Bob");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("imageUrl").is_some());
    }

    #[test]
    fn test_missing_text_deserializes_to_empty() {
        let input: NewPost = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(input.text, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_author_display_fallback() {
        let post = NewPost::root("Hi", "Hello").into_post(Uuid::new_v4(), Utc::now());
        assert_eq!(post.author_display(), ANONYMOUS);
        assert!(post.is_root());
    }
}

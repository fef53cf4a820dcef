use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned post identifier (`SERIAL`).
pub type PostId = i32;

/// Column width of `posts.title`.
pub const TITLE_MAX_LEN: usize = 200;

/// Column width of `posts.author`.
pub const AUTHOR_MAX_LEN: usize = 100;

/// Post entity - a persisted blog entry.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: NaiveDateTime,
}

/// The writable part of a post, validated on construction.
///
/// Holding a `NewPost` means all three fields are non-empty and fit their
/// columns, so repositories never re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author: String,
}

impl NewPost {
    /// Validate and build the writable fields of a post.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let (title, content, author) = (title.into(), content.into(), author.into());

        if title.is_empty() || content.is_empty() || author.is_empty() {
            return Err(DomainError::Validation("Missing required fields".to_string()));
        }
        check_len("title", &title, TITLE_MAX_LEN)?;
        check_len("author", &author, AUTHOR_MAX_LEN)?;

        Ok(Self {
            title,
            content,
            author,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Split into `(title, content, author)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.title, self.content, self.author)
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_accepts_filled_fields() {
        let post = NewPost::new("Hello", "World", "Ada").unwrap();
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.content(), "World");
        assert_eq!(post.author(), "Ada");
    }

    #[test]
    fn test_new_post_rejects_empty_field() {
        for (t, c, a) in [("", "x", "y"), ("x", "", "y"), ("x", "y", "")] {
            let err = NewPost::new(t, c, a).unwrap_err();
            assert_eq!(
                err,
                DomainError::Validation("Missing required fields".to_string())
            );
        }
    }

    #[test]
    fn test_new_post_enforces_column_widths() {
        let long_title = "t".repeat(TITLE_MAX_LEN + 1);
        assert!(NewPost::new(long_title, "c", "a").is_err());

        let long_author = "a".repeat(AUTHOR_MAX_LEN + 1);
        assert!(NewPost::new("t", "c", long_author).is_err());

        // Limits count characters, not bytes.
        let wide_title = "é".repeat(TITLE_MAX_LEN);
        assert!(NewPost::new(wide_title, "c", "a").is_ok());
    }

    #[test]
    fn test_post_serializes_wire_field_names() {
        let created_at = chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let post = Post {
            id: 7,
            title: "T".to_string(),
            content: "C".to_string(),
            author: "A".to_string(),
            created_at,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["author"], "A");
        assert_eq!(json["created_at"], "2024-05-01T12:30:00");
    }
}

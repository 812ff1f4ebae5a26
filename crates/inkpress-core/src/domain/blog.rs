use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog entity - a published or draft post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub sub_title: Option<String>,
    /// Rich text, stored and served verbatim.
    pub description: String,
    pub category: String,
    /// Delivery URL produced by the image host, never a raw upload.
    pub image: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog from validated fields and its delivery URL.
    pub fn new(draft: BlogDraft, image: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            sub_title: draft.sub_title,
            description: draft.description,
            category: draft.category,
            image,
            is_published: draft.is_published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip reader visibility.
    pub fn toggle_publish(&mut self) {
        self.is_published = !self.is_published;
        self.updated_at = Utc::now();
    }
}

/// Blog fields as submitted by an admin. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct NewBlog {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// Blog fields after validation.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub sub_title: Option<String>,
    pub description: String,
    pub category: String,
    pub is_published: bool,
}

impl NewBlog {
    /// Returns `None` when `title`, `description` or `category` is absent or blank.
    pub fn into_draft(self) -> Option<BlogDraft> {
        let title = non_blank(self.title)?;
        let description = non_blank(self.description)?;
        let category = non_blank(self.category)?;

        Some(BlogDraft {
            title,
            sub_title: non_blank(self.sub_title),
            description,
            category,
            is_published: self.is_published.unwrap_or(false),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Which blogs a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogFilter {
    All,
    Published,
    Drafts,
}

impl BlogFilter {
    pub fn matches(&self, blog: &Blog) -> bool {
        match self {
            BlogFilter::All => true,
            BlogFilter::Published => blog.is_published,
            BlogFilter::Drafts => !blog.is_published,
        }
    }
}

/// Admin dashboard figures.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub blogs: u64,
    pub comments: u64,
    pub drafts: u64,
    pub recent_blogs: Vec<Blog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewBlog {
        NewBlog {
            title: Some("Hello".to_string()),
            sub_title: None,
            description: Some("<p>World</p>".to_string()),
            category: Some("tech".to_string()),
            is_published: None,
        }
    }

    #[test]
    fn test_draft_defaults_to_unpublished() {
        let draft = complete().into_draft().unwrap();
        assert!(!draft.is_published);
        assert_eq!(draft.description, "<p>World</p>");
    }

    #[test]
    fn test_blank_required_field_is_missing() {
        let mut input = complete();
        input.category = Some("   ".to_string());
        assert!(input.into_draft().is_none());

        let mut input = complete();
        input.title = None;
        assert!(input.into_draft().is_none());
    }

    #[test]
    fn test_blank_sub_title_is_dropped() {
        let mut input = complete();
        input.sub_title = Some(String::new());
        assert_eq!(input.into_draft().unwrap().sub_title, None);
    }

    #[test]
    fn test_toggle_publish() {
        let mut blog = Blog::new(complete().into_draft().unwrap(), "https://img/x".to_string());
        let created = blog.created_at;
        blog.toggle_publish();
        assert!(blog.is_published);
        assert_eq!(blog.created_at, created);
        assert!(BlogFilter::Published.matches(&blog));
        assert!(!BlogFilter::Drafts.matches(&blog));
    }
}

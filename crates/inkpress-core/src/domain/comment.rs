use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Moderation state of a comment. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentStatus {
    Pending,
    Approved { at: DateTime<Utc> },
}

/// Comment entity - reader-submitted text attached to a blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub name: String,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a pending comment.
    pub fn new(blog_id: Uuid, name: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            blog_id,
            name,
            content,
            status: CommentStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self.status, CommentStatus::Approved { .. })
    }

    pub fn approved_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            CommentStatus::Approved { at } => Some(at),
            CommentStatus::Pending => None,
        }
    }

    /// Move the comment from pending to approved.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        match self.status {
            CommentStatus::Pending => {
                self.status = CommentStatus::Approved { at: Utc::now() };
                Ok(())
            }
            CommentStatus::Approved { .. } => {
                Err(DomainError::validation("Comment already approved"))
            }
        }
    }
}

/// Comment fields as submitted by a reader.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub blog: String,
    pub name: String,
    pub content: String,
}

/// A comment together with the title of the blog it belongs to.
#[derive(Debug, Clone)]
pub struct CommentEntry {
    pub comment: Comment,
    pub blog_title: Option<String>,
}

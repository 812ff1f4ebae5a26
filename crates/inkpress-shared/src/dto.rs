//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog fields sent as the JSON `blog` part of the create form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFields {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// Request naming a single record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Request to submit a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddCommentRequest {
    pub blog: String,
    pub name: String,
    pub content: String,
}

/// Request for the approved comments of a blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCommentsRequest {
    pub blog_id: String,
}

/// Request to login as admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub sub_title: Option<String>,
    pub description: String,
    pub category: String,
    pub image: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub blog: String,
    /// Title of the owning blog, only filled in moderation listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_title: Option<String>,
    pub name: String,
    pub content: String,
    pub is_approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub blogs: u64,
    pub comments: u64,
    pub drafts: u64,
    pub recent_blogs: Vec<BlogResponse>,
}

// Payloads flattened into `ApiResponse`.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPayload {
    pub blog: BlogResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogsPayload {
    pub blogs: Vec<BlogResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsPayload {
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub dashboard_data: DashboardResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub token: String,
    pub expires_in: u64,
}

//! Conversions between wire DTOs and domain types.

use inkpress_core::domain::{Blog, Comment, Dashboard, NewBlog, NewComment};
use inkpress_shared::dto::{
    AddCommentRequest, BlogFields, BlogResponse, CommentResponse, DashboardResponse,
};

pub fn new_blog(fields: BlogFields) -> NewBlog {
    NewBlog {
        title: fields.title,
        sub_title: fields.sub_title,
        description: fields.description,
        category: fields.category,
        is_published: fields.is_published,
    }
}

pub fn new_comment(req: AddCommentRequest) -> NewComment {
    NewComment {
        blog: req.blog,
        name: req.name,
        content: req.content,
    }
}

pub fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        title: blog.title,
        sub_title: blog.sub_title,
        description: blog.description,
        category: blog.category,
        image: blog.image,
        is_published: blog.is_published,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

pub fn blog_responses(blogs: Vec<Blog>) -> Vec<BlogResponse> {
    blogs.into_iter().map(blog_response).collect()
}

pub fn comment_response(comment: Comment, blog_title: Option<String>) -> CommentResponse {
    CommentResponse {
        id: comment.id.to_string(),
        blog: comment.blog_id.to_string(),
        blog_title,
        is_approved: comment.is_approved(),
        approved_at: comment.approved_at(),
        name: comment.name,
        content: comment.content,
        created_at: comment.created_at,
    }
}

pub fn dashboard_response(dashboard: Dashboard) -> DashboardResponse {
    DashboardResponse {
        blogs: dashboard.blogs,
        comments: dashboard.comments,
        drafts: dashboard.drafts,
        recent_blogs: blog_responses(dashboard.recent_blogs),
    }
}

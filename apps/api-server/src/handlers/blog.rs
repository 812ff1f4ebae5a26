//! Blog and comment handlers.

use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};

use inkpress_core::service::parse_id;
use inkpress_shared::ApiResponse;
use inkpress_shared::dto::{
    AddCommentRequest, BlogCommentsRequest, BlogPayload, BlogsPayload, CommentsPayload, IdRequest,
};

use super::form::BlogForm;
use super::mapping::{blog_response, blog_responses, comment_response, new_blog, new_comment};
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/blog/add - multipart `blog` (JSON) + `image` (file)
pub async fn add_blog(
    admin: AdminIdentity,
    request_id: RequestId,
    state: web::Data<AppState>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let form = BlogForm::read(payload, state.max_upload_bytes).await?;
    tracing::debug!(
        request_id = %request_id.as_str(),
        admin = %admin.subject,
        has_image = form.image.is_some(),
        "Creating blog"
    );

    let blog = state.blogs.create_blog(new_blog(form.fields), form.image).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        BlogPayload {
            blog: blog_response(blog),
        },
        "Blog added successfully",
    )))
}

/// GET /api/blog/all - published blogs only
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_published().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(BlogsPayload {
        blogs: blog_responses(blogs),
    })))
}

/// GET /api/blog/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path.into_inner(), "Blog")?;
    let blog = state.blogs.get_blog(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(BlogPayload {
        blog: blog_response(blog),
    })))
}

/// POST /api/blog/delete
pub async fn delete_blog(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<IdRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&body.id, "Blog")?;
    state.blogs.delete_blog(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Blog deleted successfully")))
}

/// POST /api/blog/toggle-publish
pub async fn toggle_publish(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<IdRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&body.id, "Blog")?;
    let blog = state.blogs.toggle_publish(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        BlogPayload {
            blog: blog_response(blog),
        },
        "Blog status updated",
    )))
}

/// POST /api/blog/add-comment
pub async fn add_comment(
    state: web::Data<AppState>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    state.blogs.add_comment(new_comment(body.into_inner())).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Comment added for review")))
}

/// POST /api/blog/comments - approved comments of one blog
pub async fn blog_comments(
    state: web::Data<AppState>,
    body: web::Json<BlogCommentsRequest>,
) -> AppResult<HttpResponse> {
    let blog_id = parse_id(&body.blog_id, "Blog")?;
    let comments = state.blogs.approved_comments(blog_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CommentsPayload {
        comments: comments
            .into_iter()
            .map(|comment| comment_response(comment, None))
            .collect(),
    })))
}

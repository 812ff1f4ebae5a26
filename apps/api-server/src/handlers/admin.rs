//! Admin handlers - login, listings, moderation and dashboard.

use actix_web::{HttpResponse, web};

use inkpress_core::service::parse_id;
use inkpress_shared::ApiResponse;
use inkpress_shared::dto::{
    BlogsPayload, CommentsPayload, DashboardPayload, IdRequest, LoginRequest, TokenPayload,
};

use super::mapping::{blog_responses, comment_response, dashboard_response};
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let token = state.admin.login(&req.email, &req.password)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(TokenPayload {
        token,
        expires_in: state.admin.token_lifetime_seconds().max(0) as u64,
    })))
}

/// GET /api/admin/blogs - every blog, drafts included
pub async fn list_blogs(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(BlogsPayload {
        blogs: blog_responses(blogs),
    })))
}

/// GET /api/admin/comments - every comment, approved or not
pub async fn list_comments(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let entries = state.blogs.all_comments().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CommentsPayload {
        comments: entries
            .into_iter()
            .map(|entry| comment_response(entry.comment, entry.blog_title))
            .collect(),
    })))
}

/// GET /api/admin/dashboard
pub async fn dashboard(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let dashboard = state.blogs.dashboard().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(DashboardPayload {
        dashboard_data: dashboard_response(dashboard),
    })))
}

/// POST /api/admin/approve-comment
pub async fn approve_comment(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<IdRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&body.id, "Comment")?;
    let comment = state.blogs.approve_comment(id).await?;
    tracing::info!(comment_id = %comment.id, approved_by = %admin.subject, "Moderation action");

    Ok(HttpResponse::Ok().json(ApiResponse::message("Comment approved successfully")))
}

/// POST /api/admin/delete-comment
pub async fn delete_comment(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    body: web::Json<IdRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&body.id, "Comment")?;
    state.blogs.delete_comment(id).await?;
    tracing::info!(comment_id = %id, deleted_by = %admin.subject, "Moderation action");

    Ok(HttpResponse::Ok().json(ApiResponse::message("Comment deleted successfully")))
}

//! HTTP handlers and route configuration.

mod admin;
mod blog;
mod form;
mod health;
mod mapping;

use actix_web::{HttpResponse, error, web};

use inkpress_shared::ApiResponse;

/// JSON extractor config: malformed bodies get the flat failure shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::debug!(error = %message, "Rejected JSON body");
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiResponse::failure(message)),
        )
        .into()
    })
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Blog routes
            .service(
                web::scope("/blog")
                    .route("/add", web::post().to(blog::add_blog))
                    .route("/all", web::get().to(blog::list_blogs))
                    .route("/delete", web::post().to(blog::delete_blog))
                    .route("/toggle-publish", web::post().to(blog::toggle_publish))
                    .route("/add-comment", web::post().to(blog::add_comment))
                    .route("/comments", web::post().to(blog::blog_comments))
                    .route("/{id}", web::get().to(blog::get_blog)),
            )
            // Admin routes
            .service(
                web::scope("/admin")
                    .route("/login", web::post().to(admin::login))
                    .route("/blogs", web::get().to(admin::list_blogs))
                    .route("/comments", web::get().to(admin::list_comments))
                    .route("/dashboard", web::get().to(admin::dashboard))
                    .route("/approve-comment", web::post().to(admin::approve_comment))
                    .route("/delete-comment", web::post().to(admin::delete_comment)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::header;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use inkpress_core::ports::PasswordService;
    use inkpress_core::service::AdminCredentials;
    use inkpress_core::{AdminAuthService, BlogService};
    use inkpress_infra::{
        Argon2PasswordService, InMemoryBlogRepository, InMemoryCommentRepository,
        InMemoryImageHost, JwtConfig, JwtTokenService,
    };

    use super::*;
    use crate::state::AppState;

    const ADMIN_EMAIL: &str = "admin@example.com";
    const ADMIN_PASSWORD: &str = "correct horse battery";
    const BOUNDARY: &str = "inkpress-test-boundary";

    fn test_state() -> AppState {
        test_state_with_limit(1024 * 1024)
    }

    fn test_state_with_limit(max_upload_bytes: usize) -> AppState {
        let passwords = Argon2PasswordService::new();
        let password_hash = passwords.hash(ADMIN_PASSWORD).unwrap();

        let admin = AdminAuthService::new(
            Some(AdminCredentials {
                email: ADMIN_EMAIL.to_string(),
                password_hash,
            }),
            Arc::new(passwords),
            Arc::new(JwtTokenService::new(JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 1,
                issuer: "inkpress-test".to_string(),
            })),
        );

        let blogs = BlogService::new(
            Arc::new(InMemoryBlogRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            Arc::new(InMemoryImageHost::with_endpoint("https://ik.imagekit.io/demo")),
        );

        AppState::from_services(blogs, admin, max_upload_bytes)
    }

    async fn test_app(
        state: AppState,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await
    }

    fn blog_form(blog_json: &str, image: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"blog\"\r\n\
                 Content-Type: application/json\r\n\r\n{blog_json}\r\n"
            )
            .as_bytes(),
        );
        if let Some((file_name, bytes)) = image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; \
                     filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn login<S>(app: &S) -> String
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}))
            .to_request();
        let body: Value = test::call_and_read_body_json(app, req).await;
        assert_eq!(body["success"], true, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    async fn create_blog<S>(app: &S, token: &str, blog_json: &str) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let png: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        let req = test::TestRequest::post()
            .uri("/api/blog/add")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_payload(blog_form(blog_json, Some(("image.png", png))))
            .to_request();
        test::call_and_read_body_json(app, req).await
    }

    async fn post_json<S>(app: &S, uri: &str, token: Option<&str>, body: Value) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let mut req = test::TestRequest::post().uri(uri).set_json(body);
        if let Some(token) = token {
            req = req.insert_header((header::AUTHORIZATION, token.to_string()));
        }
        test::call_and_read_body_json(app, req.to_request()).await
    }

    async fn get_json<S>(app: &S, uri: &str, token: Option<&str>) -> Value
    where
        S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    {
        let mut req = test::TestRequest::get().uri(uri);
        if let Some(token) = token {
            req = req.insert_header((header::AUTHORIZATION, format!("Bearer {token}")));
        }
        test::call_and_read_body_json(app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_create_then_fetch_keeps_html_verbatim() {
        let app = test_app(test_state()).await;
        let token = login(&app).await;

        let created = create_blog(
            &app,
            &token,
            r#"{"title":"Hello","description":"<p>World</p>","category":"tech"}"#,
        )
        .await;
        assert_eq!(created["success"], true, "create failed: {created}");
        assert_eq!(created["message"], "Blog added successfully");

        let id = created["blog"]["id"].as_str().unwrap();
        let fetched = get_json(&app, &format!("/api/blog/{id}"), None).await;

        assert_eq!(fetched["success"], true);
        assert_eq!(fetched["blog"]["description"], "<p>World</p>");
        assert_eq!(fetched["blog"]["isPublished"], false);
        let image = fetched["blog"]["image"].as_str().unwrap();
        assert!(image.starts_with("https://ik.imagekit.io/demo/tr:q-auto:f-webp:w-1280/blogs/"));
    }

    #[actix_web::test]
    async fn test_create_without_file_is_rejected() {
        let state = test_state();
        let app = test_app(state.clone()).await;
        let token = login(&app).await;

        let req = test::TestRequest::post()
            .uri("/api/blog/add")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_payload(blog_form(
                r#"{"title":"Hello","description":"<p>World</p>","category":"tech"}"#,
                None,
            ))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({"success": false, "message": "Missing required fields"})
        );
        assert!(state.blogs.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_image_is_rejected() {
        let limit = 1024;
        let state = test_state_with_limit(limit);
        let app = test_app(state.clone()).await;
        let token = login(&app).await;

        let image = vec![0x89; limit + 1];
        let req = test::TestRequest::post()
            .uri("/api/blog/add")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .set_payload(blog_form(
                r#"{"title":"Hello","description":"<p>World</p>","category":"tech"}"#,
                Some(("image.png", &image)),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "File too large (limit 1024 bytes)"})
        );
        assert!(state.blogs.list_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_admin_routes_require_token() {
        let app = test_app(test_state()).await;

        let body = get_json(&app, "/api/admin/dashboard", None).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing authorization header");

        let body = get_json(&app, "/api/admin/blogs", Some("forged.token.value")).await;
        assert_eq!(body["success"], false);

        let body = post_json(
            &app,
            "/api/admin/login",
            None,
            json!({"email": ADMIN_EMAIL, "password": "wrong"}),
        )
        .await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Invalid credentials"})
        );
    }

    #[actix_web::test]
    async fn test_unknown_blog_is_a_flat_failure() {
        let app = test_app(test_state()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/blog/{}", uuid::Uuid::new_v4()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": false, "message": "Blog not found"}));

        let body = get_json(&app, "/api/blog/not-a-uuid", None).await;
        assert_eq!(body["message"], "Blog not found");
    }

    #[actix_web::test]
    async fn test_comment_moderation_flow() {
        let app = test_app(test_state()).await;
        let token = login(&app).await;

        let created = create_blog(
            &app,
            &token,
            r#"{"title":"Hello","description":"<p>World</p>","category":"tech","isPublished":true}"#,
        )
        .await;
        let blog_id = created["blog"]["id"].as_str().unwrap().to_string();

        let body = post_json(
            &app,
            "/api/blog/add-comment",
            None,
            json!({"blog": blog_id, "name": "Ann", "content": ""}),
        )
        .await;
        assert_eq!(body["success"], false);

        let body = post_json(
            &app,
            "/api/blog/add-comment",
            None,
            json!({"blog": blog_id, "name": "Ann", "content": "Great read"}),
        )
        .await;
        assert_eq!(
            body,
            json!({"success": true, "message": "Comment added for review"})
        );

        let listing = post_json(&app, "/api/blog/comments", None, json!({"blogId": blog_id})).await;
        assert_eq!(listing, json!({"success": true, "comments": []}));

        let pending = get_json(&app, "/api/admin/comments", Some(&token)).await;
        let comment = &pending["comments"][0];
        assert_eq!(comment["isApproved"], false);
        assert_eq!(comment["blogTitle"], "Hello");
        let comment_id = comment["id"].as_str().unwrap().to_string();

        // The bare token form is accepted as well as `Bearer <token>`.
        let body = post_json(
            &app,
            "/api/admin/approve-comment",
            Some(&token),
            json!({"id": comment_id}),
        )
        .await;
        assert_eq!(body["success"], true);

        let listing = post_json(&app, "/api/blog/comments", None, json!({"blogId": blog_id})).await;
        assert_eq!(listing["comments"].as_array().unwrap().len(), 1);
        assert_eq!(listing["comments"][0]["isApproved"], true);
        assert_eq!(listing["comments"][0]["content"], "Great read");
    }

    #[actix_web::test]
    async fn test_drafts_listing_and_dashboard() {
        let app = test_app(test_state()).await;
        let token = login(&app).await;

        create_blog(
            &app,
            &token,
            r#"{"title":"Draft","description":"d","category":"tech","isPublished":false}"#,
        )
        .await;
        let live = create_blog(
            &app,
            &token,
            r#"{"title":"Live","description":"l","category":"tech","isPublished":true}"#,
        )
        .await;

        let public = get_json(&app, "/api/blog/all", None).await;
        let public_blogs = public["blogs"].as_array().unwrap();
        assert_eq!(public_blogs.len(), 1);
        assert_eq!(public_blogs[0]["id"], live["blog"]["id"]);

        let admin = get_json(&app, "/api/admin/blogs", Some(&token)).await;
        assert_eq!(admin["blogs"].as_array().unwrap().len(), 2);

        let dashboard = get_json(&app, "/api/admin/dashboard", Some(&token)).await;
        assert_eq!(dashboard["dashboardData"]["blogs"], 2);
        assert_eq!(dashboard["dashboardData"]["drafts"], 1);
        assert_eq!(dashboard["dashboardData"]["comments"], 0);

        let live_id = live["blog"]["id"].as_str().unwrap();
        let body = post_json(
            &app,
            "/api/blog/delete",
            Some(&format!("Bearer {token}")),
            json!({"id": live_id}),
        )
        .await;
        assert_eq!(body["success"], true);

        let public = get_json(&app, "/api/blog/all", None).await;
        assert!(public["blogs"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_gets_failure_body() {
        let app = test_app(test_state()).await;

        let req = test::TestRequest::post()
            .uri("/api/blog/add-comment")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
    }
}

//! Blog service behaviour against the in-memory adapters.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use inkpress_core::domain::{BlogFilter, NewBlog, NewComment};
use inkpress_core::ports::{
    BlogRepository, CommentRepository, ImageHost, ImageHostError, ImageUpload, Transformation,
    UploadedImage,
};
use inkpress_core::{BlogService, ErrorKind};
use inkpress_infra::{InMemoryBlogRepository, InMemoryCommentRepository, InMemoryImageHost};

struct Harness {
    service: BlogService,
    blogs: Arc<InMemoryBlogRepository>,
    comments: Arc<InMemoryCommentRepository>,
    images: Arc<InMemoryImageHost>,
}

fn harness() -> Harness {
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let images = Arc::new(InMemoryImageHost::with_endpoint("https://ik.imagekit.io/demo"));

    let service = BlogService::new(blogs.clone(), comments.clone(), images.clone());

    Harness {
        service,
        blogs,
        comments,
        images,
    }
}

fn hello_world() -> NewBlog {
    NewBlog {
        title: Some("Hello".to_string()),
        sub_title: Some("A first post".to_string()),
        description: Some("<p>World</p>".to_string()),
        category: Some("tech".to_string()),
        is_published: None,
    }
}

fn png() -> Option<ImageUpload> {
    Some(ImageUpload::new("image.png", vec![0x89, 0x50, 0x4E, 0x47]))
}

/// Image host whose uploads always fail.
struct UnreachableImageHost;

#[async_trait]
impl ImageHost for UnreachableImageHost {
    async fn upload(
        &self,
        _file: ImageUpload,
        _folder: &str,
    ) -> Result<UploadedImage, ImageHostError> {
        Err(ImageHostError::Transport("connection refused".to_string()))
    }

    fn url(&self, path: &str, _transformation: &[Transformation]) -> String {
        path.to_string()
    }
}

#[tokio::test]
async fn create_blog_rejects_missing_fields_without_writing() {
    let h = harness();

    let cases = [
        NewBlog {
            title: None,
            ..hello_world()
        },
        NewBlog {
            description: None,
            ..hello_world()
        },
        NewBlog {
            category: Some(String::new()),
            ..hello_world()
        },
    ];

    for input in cases {
        let err = h.service.create_blog(input, png()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Missing required fields");
    }

    let err = h.service.create_blog(hello_world(), None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let empty_file = Some(ImageUpload::new("image.png", Vec::new()));
    let err = h.service.create_blog(hello_world(), empty_file).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert_eq!(h.blogs.count(BlogFilter::All).await.unwrap(), 0);
    assert!(h.images.is_empty().await);
}

#[tokio::test]
async fn create_blog_stores_transformed_image_url() {
    let h = harness();

    let blog = h.service.create_blog(hello_world(), png()).await.unwrap();

    assert_eq!(h.blogs.count(BlogFilter::All).await.unwrap(), 1);
    assert!(!blog.is_published);
    assert!(
        blog.image
            .starts_with("https://ik.imagekit.io/demo/tr:q-auto:f-webp:w-1280/blogs/"),
        "unexpected image url: {}",
        blog.image
    );
    assert!(blog.image.ends_with("_image.png"));

    let stored_path = blog
        .image
        .strip_prefix("https://ik.imagekit.io/demo/tr:q-auto:f-webp:w-1280")
        .unwrap();
    assert_eq!(
        h.images.get(stored_path).await,
        Some(vec![0x89, 0x50, 0x4E, 0x47])
    );
}

#[tokio::test]
async fn create_then_get_keeps_description_verbatim() {
    let h = harness();

    let created = h.service.create_blog(hello_world(), png()).await.unwrap();
    let fetched = h.service.get_blog(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.description, "<p>World</p>");
    assert_eq!(fetched.sub_title.as_deref(), Some("A first post"));
}

#[tokio::test]
async fn upload_failure_is_upstream_and_writes_nothing() {
    let blogs = Arc::new(InMemoryBlogRepository::new());
    let service = BlogService::new(
        blogs.clone(),
        Arc::new(InMemoryCommentRepository::new()),
        Arc::new(UnreachableImageHost),
    );

    let err = service.create_blog(hello_world(), png()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(blogs.count(BlogFilter::All).await.unwrap(), 0);
}

#[tokio::test]
async fn get_unknown_blog_is_not_found() {
    let h = harness();

    let err = h.service.get_blog(Uuid::new_v4()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Blog not found");
}

#[tokio::test]
async fn drafts_are_hidden_from_readers_only() {
    let h = harness();

    let draft = h.service.create_blog(hello_world(), png()).await.unwrap();
    let published = h
        .service
        .create_blog(
            NewBlog {
                title: Some("Live".to_string()),
                is_published: Some(true),
                ..hello_world()
            },
            png(),
        )
        .await
        .unwrap();

    let reader_ids: Vec<Uuid> = h
        .service
        .list_published()
        .await
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(reader_ids, vec![published.id]);

    let admin_ids: Vec<Uuid> = h
        .service
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|b| b.id)
        .collect();
    assert!(admin_ids.contains(&draft.id));
    assert!(admin_ids.contains(&published.id));

    let toggled = h.service.toggle_publish(draft.id).await.unwrap();
    assert!(toggled.is_published);
    assert_eq!(h.service.list_published().await.unwrap().len(), 2);
}

#[tokio::test]
async fn comments_start_pending_and_need_approval() {
    let h = harness();
    let blog = h.service.create_blog(hello_world(), png()).await.unwrap();

    let comment = h
        .service
        .add_comment(NewComment {
            blog: blog.id.to_string(),
            name: "Ann".to_string(),
            content: "Great read".to_string(),
        })
        .await
        .unwrap();

    assert!(!comment.is_approved());
    assert!(h.service.approved_comments(blog.id).await.unwrap().is_empty());

    let approved = h.service.approve_comment(comment.id).await.unwrap();
    assert!(approved.approved_at().is_some());

    let visible = h.service.approved_comments(blog.id).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, comment.id);

    let err = h.service.approve_comment(comment.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn comment_listing_is_scoped_to_its_blog() {
    let h = harness();
    let first = h.service.create_blog(hello_world(), png()).await.unwrap();
    let second = h.service.create_blog(hello_world(), png()).await.unwrap();

    for blog in [&first, &second] {
        let comment = h
            .service
            .add_comment(NewComment {
                blog: blog.id.to_string(),
                name: "Ann".to_string(),
                content: format!("About {}", blog.id),
            })
            .await
            .unwrap();
        h.service.approve_comment(comment.id).await.unwrap();
    }

    let visible = h.service.approved_comments(first.id).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].blog_id, first.id);
}

#[tokio::test]
async fn invalid_comments_are_rejected() {
    let h = harness();
    let blog = h.service.create_blog(hello_world(), png()).await.unwrap();

    let err = h
        .service
        .add_comment(NewComment {
            blog: blog.id.to_string(),
            name: "Ann".to_string(),
            content: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = h
        .service
        .add_comment(NewComment {
            blog: Uuid::new_v4().to_string(),
            name: "Ann".to_string(),
            content: "Hello".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = h
        .service
        .add_comment(NewComment {
            blog: "not-an-id".to_string(),
            name: "Ann".to_string(),
            content: "Hello".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(h.comments.count().await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_a_blog_removes_its_comments() {
    let h = harness();
    let doomed = h.service.create_blog(hello_world(), png()).await.unwrap();
    let kept = h.service.create_blog(hello_world(), png()).await.unwrap();

    for blog in [&doomed, &doomed, &kept] {
        h.service
            .add_comment(NewComment {
                blog: blog.id.to_string(),
                name: "Ann".to_string(),
                content: "Hello".to_string(),
            })
            .await
            .unwrap();
    }

    h.service.delete_blog(doomed.id).await.unwrap();

    assert_eq!(h.comments.count().await.unwrap(), 1);
    assert_eq!(
        h.service.get_blog(doomed.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        h.service.delete_blog(doomed.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[tokio::test]
async fn moderation_listing_and_dashboard() {
    let h = harness();
    let draft = h.service.create_blog(hello_world(), png()).await.unwrap();
    h.service
        .create_blog(
            NewBlog {
                is_published: Some(true),
                ..hello_world()
            },
            png(),
        )
        .await
        .unwrap();

    let comment = h
        .service
        .add_comment(NewComment {
            blog: draft.id.to_string(),
            name: "Ann".to_string(),
            content: "Hello".to_string(),
        })
        .await
        .unwrap();

    let entries = h.service.all_comments().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].blog_title.as_deref(), Some("Hello"));
    assert!(!entries[0].comment.is_approved());

    let dashboard = h.service.dashboard().await.unwrap();
    assert_eq!(dashboard.blogs, 2);
    assert_eq!(dashboard.drafts, 1);
    assert_eq!(dashboard.comments, 1);
    assert_eq!(dashboard.recent_blogs.len(), 2);

    h.service.delete_comment(comment.id).await.unwrap();
    assert_eq!(
        h.service.delete_comment(comment.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

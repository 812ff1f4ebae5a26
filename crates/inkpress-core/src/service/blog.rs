//! Blog and comment use cases.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Blog, BlogFilter, Comment, CommentEntry, Dashboard, NewBlog, NewComment};
use crate::error::DomainError;
use crate::ports::{BlogRepository, CommentRepository, ImageHost, ImageUpload, Transformation};

/// Folder on the image host that holds blog covers.
pub const BLOG_IMAGE_FOLDER: &str = "/blogs";

/// Number of blogs shown on the admin dashboard.
const RECENT_BLOGS: u64 = 5;

/// Parse a client-supplied id. Malformed ids are reported as not found.
pub fn parse_id(raw: &str, entity_type: &'static str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::not_found(entity_type))
}

/// Blog service - validation, image upload and persistence of blogs and comments.
pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
    comments: Arc<dyn CommentRepository>,
    images: Arc<dyn ImageHost>,
}

impl BlogService {
    pub fn new(
        blogs: Arc<dyn BlogRepository>,
        comments: Arc<dyn CommentRepository>,
        images: Arc<dyn ImageHost>,
    ) -> Self {
        Self {
            blogs,
            comments,
            images,
        }
    }

    /// Validate, upload the cover, then persist the blog.
    ///
    /// The steps are not atomic: an upload that succeeds before a failed
    /// insert leaves the file on the image host.
    pub async fn create_blog(
        &self,
        input: NewBlog,
        image: Option<ImageUpload>,
    ) -> Result<Blog, DomainError> {
        let image = image.filter(|file| !file.is_empty());
        let (draft, image) = match (input.into_draft(), image) {
            (Some(draft), Some(image)) => (draft, image),
            _ => return Err(DomainError::validation("Missing required fields")),
        };

        let file_name = image.file_name.clone();
        let uploaded = self
            .images
            .upload(image, BLOG_IMAGE_FOLDER)
            .await
            .inspect_err(|e| {
                tracing::error!(file_name = %file_name, error = %e, "Cover upload failed");
            })?;

        let image_url = self
            .images
            .url(&uploaded.file_path, &Transformation::blog_cover());

        let blog = self.blogs.save(Blog::new(draft, image_url)).await?;
        tracing::info!(blog_id = %blog.id, published = blog.is_published, "Blog created");

        Ok(blog)
    }

    pub async fn get_blog(&self, id: Uuid) -> Result<Blog, DomainError> {
        self.blogs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Blog"))
    }

    /// Blogs visible to readers.
    pub async fn list_published(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.blogs.list(BlogFilter::Published, None).await?)
    }

    /// Every blog, drafts included.
    pub async fn list_all(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.blogs.list(BlogFilter::All, None).await?)
    }

    pub async fn toggle_publish(&self, id: Uuid) -> Result<Blog, DomainError> {
        let mut blog = self.get_blog(id).await?;
        blog.toggle_publish();

        let blog = self.blogs.save(blog).await?;
        tracing::info!(blog_id = %blog.id, published = blog.is_published, "Blog visibility changed");

        Ok(blog)
    }

    /// Delete a blog together with its comments.
    pub async fn delete_blog(&self, id: Uuid) -> Result<(), DomainError> {
        let blog = self.get_blog(id).await?;

        let removed = self.comments.delete_by_blog(blog.id).await?;
        self.blogs.delete(blog.id).await?;
        tracing::info!(blog_id = %blog.id, comments_removed = removed, "Blog deleted");

        Ok(())
    }

    /// Store a reader comment as pending.
    pub async fn add_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let name = input.name.trim();
        let content = input.content.trim();
        if name.is_empty() || content.is_empty() {
            return Err(DomainError::validation("Name and comment are required"));
        }

        let blog = self.get_blog(parse_id(&input.blog, "Blog")?).await?;

        let comment = Comment::new(blog.id, name.to_string(), content.to_string());
        let comment = self.comments.save(comment).await?;
        tracing::info!(comment_id = %comment.id, blog_id = %blog.id, "Comment submitted for review");

        Ok(comment)
    }

    /// Approved comments of one blog, as shown to readers.
    pub async fn approved_comments(&self, blog_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        Ok(self.comments.find_by_blog(blog_id, true).await?)
    }

    /// Every comment with its blog title, for moderation.
    pub async fn all_comments(&self) -> Result<Vec<CommentEntry>, DomainError> {
        let titles: HashMap<Uuid, String> = self
            .blogs
            .list(BlogFilter::All, None)
            .await?
            .into_iter()
            .map(|blog| (blog.id, blog.title))
            .collect();

        let entries = self
            .comments
            .list_all()
            .await?
            .into_iter()
            .map(|comment| CommentEntry {
                blog_title: titles.get(&comment.blog_id).cloned(),
                comment,
            })
            .collect();

        Ok(entries)
    }

    pub async fn approve_comment(&self, id: Uuid) -> Result<Comment, DomainError> {
        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Comment"))?;

        comment.approve()?;
        let comment = self.comments.save(comment).await?;
        tracing::info!(
            comment_id = %comment.id,
            blog_id = %comment.blog_id,
            approved_at = ?comment.approved_at(),
            "Comment approved"
        );

        Ok(comment)
    }

    pub async fn delete_comment(&self, id: Uuid) -> Result<(), DomainError> {
        if self.comments.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Comment"));
        }

        self.comments.delete(id).await?;
        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }

    pub async fn dashboard(&self) -> Result<Dashboard, DomainError> {
        Ok(Dashboard {
            blogs: self.blogs.count(BlogFilter::All).await?,
            comments: self.comments.count().await?,
            drafts: self.blogs.count(BlogFilter::Drafts).await?,
            recent_blogs: self.blogs.list(BlogFilter::All, Some(RECENT_BLOGS)).await?,
        })
    }
}

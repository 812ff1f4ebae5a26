use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, BlogFilter, Comment};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository. Listings are ordered newest first.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    async fn list(&self, filter: BlogFilter, limit: Option<u64>) -> Result<Vec<Blog>, RepoError>;

    async fn count(&self, filter: BlogFilter) -> Result<u64, RepoError>;
}

/// Comment repository. Listings are ordered newest first.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// Comments attached to one blog, optionally only the approved ones.
    async fn find_by_blog(
        &self,
        blog_id: Uuid,
        approved_only: bool,
    ) -> Result<Vec<Comment>, RepoError>;

    async fn list_all(&self) -> Result<Vec<Comment>, RepoError>;

    /// Remove every comment of a blog, returning how many were removed.
    async fn delete_by_blog(&self, blog_id: Uuid) -> Result<u64, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}

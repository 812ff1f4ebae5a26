//! In-memory repositories - used as fallback when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpress_core::domain::{Blog, BlogFilter, Comment};
use inkpress_core::error::RepoError;
use inkpress_core::ports::{BaseRepository, BlogRepository, CommentRepository};

/// In-memory blog store.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<HashMap<Uuid, Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, blog: Blog) -> Result<Blog, RepoError> {
        self.store.write().await.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, filter: BlogFilter, limit: Option<u64>) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;
        let mut blogs: Vec<Blog> = store.values().filter(|b| filter.matches(b)).cloned().collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = limit {
            blogs.truncate(limit as usize);
        }

        Ok(blogs)
    }

    async fn count(&self, filter: BlogFilter) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().filter(|b| filter.matches(b)).count() as u64)
    }
}

/// In-memory comment store.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    store: RwLock<HashMap<Uuid, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut comments: Vec<Comment>) -> Vec<Comment> {
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, RepoError> {
        self.store.write().await.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_blog(
        &self,
        blog_id: Uuid,
        approved_only: bool,
    ) -> Result<Vec<Comment>, RepoError> {
        let store = self.store.read().await;
        let comments = store
            .values()
            .filter(|c| c.blog_id == blog_id && (!approved_only || c.is_approved()))
            .cloned()
            .collect();

        Ok(Self::newest_first(comments))
    }

    async fn list_all(&self) -> Result<Vec<Comment>, RepoError> {
        let store = self.store.read().await;
        Ok(Self::newest_first(store.values().cloned().collect()))
    }

    async fn delete_by_blog(&self, blog_id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, c| c.blog_id != blog_id);
        Ok((before - store.len()) as u64)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

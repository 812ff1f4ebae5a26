//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use inkpress_core::domain::{Blog, BlogFilter, Comment};
use inkpress_core::error::RepoError;
use inkpress_core::ports::{BlogRepository, CommentRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

fn blogs_matching(filter: BlogFilter) -> Select<BlogEntity> {
    let query = BlogEntity::find();
    match filter {
        BlogFilter::All => query,
        BlogFilter::Published => query.filter(blog::Column::IsPublished.eq(true)),
        BlogFilter::Drafts => query.filter(blog::Column::IsPublished.eq(false)),
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list(&self, filter: BlogFilter, limit: Option<u64>) -> Result<Vec<Blog>, RepoError> {
        let mut query = blogs_matching(filter).order_by_desc(blog::Column::CreatedAt);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let result = query.all(&self.db).await.map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: BlogFilter) -> Result<u64, RepoError> {
        blogs_matching(filter)
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_blog(
        &self,
        blog_id: Uuid,
        approved_only: bool,
    ) -> Result<Vec<Comment>, RepoError> {
        let mut query = CommentEntity::find().filter(comment::Column::BlogId.eq(blog_id));
        if approved_only {
            query = query.filter(comment::Column::IsApproved.eq(true));
        }

        let result = query
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_by_blog(&self, blog_id: Uuid) -> Result<u64, RepoError> {
        tracing::debug!(blog_id = %blog_id, "Deleting comments of blog");

        let result = CommentEntity::delete_many()
            .filter(comment::Column::BlogId.eq(blog_id))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        CommentEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}

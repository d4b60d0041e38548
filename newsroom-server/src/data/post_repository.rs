use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter, start_of_today};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Option<Post>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, author_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id)
        .bind(post.author_id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            if e.as_database_error()
                .and_then(|db| db.constraint())
                .map(|c| c.contains("posts_author_id"))
                == Some(true)
            {
                DomainError::Validation("post references a missing author".to_string())
            } else {
                DomainError::Internal(format!("database error: {}", e))
            }
        })?;

        info!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, title, description, created_at, updated_at
            FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let query = match filter {
            PostFilter::All => sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, title, description, created_at, updated_at
                FROM posts
                ORDER BY created_at DESC
                "#,
            ),
            PostFilter::ByAuthor(author_id) => sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, title, description, created_at, updated_at
                FROM posts
                WHERE author_id = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(author_id),
            PostFilter::FromToday => sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, title, description, created_at, updated_at
                FROM posts
                WHERE created_at >= $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(start_of_today()),
            PostFilter::OldNews => sqlx::query_as::<_, Post>(
                r#"
                SELECT id, author_id, title, description, created_at, updated_at
                FROM posts
                WHERE created_at < $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(start_of_today()),
        };

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!("db error while fetching posts: {}", e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn update(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Option<Post>, DomainError> {
        let now = Utc::now();
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, description = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, author_id, title, description, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if post.is_some() {
            info!(post_id = %id, "post updated");
        }

        Ok(post)
    }
}

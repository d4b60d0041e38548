use crate::domain::author::Author;
use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn create(&self, author: Author) -> Result<Author, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Author>, DomainError>;
    async fn update(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Option<Author>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, author: Author) -> Result<Author, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, name, hometown, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(author.id)
        .bind(&author.name)
        .bind(&author.hometown)
        .bind(author.created_at)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create author: {}", e);
            if e.as_database_error().and_then(|db| db.constraint()).is_some() {
                DomainError::Validation(e.to_string())
            } else {
                DomainError::Internal(format!("database error: {}", e))
            }
        })?;

        info!(author_id = %author.id, "author created");
        Ok(author)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, hometown, created_at, updated_at
            FROM authors WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to find author by id {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn list_all(&self) -> Result<Vec<Author>, DomainError> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, hometown, created_at, updated_at
            FROM authors
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching authors: {}", e);
            DomainError::Internal(e.to_string())
        })
    }

    async fn update(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Option<Author>, DomainError> {
        let now = Utc::now();
        let author = sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET name = $1, hometown = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, name, hometown, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(hometown)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update author {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if author.is_some() {
            info!(author_id = %id, "author updated");
        }

        Ok(author)
    }
}
